use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// A canned HTTP response
#[derive(Debug, Clone)]
pub struct FixtureResponse {
    pub status: u16,
    pub body: String,
    /// Content-Length to announce when it should differ from the body
    pub content_length: Option<usize>,
}

impl FixtureResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            content_length: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            content_length: None,
        }
    }

    /// Announces more body than is sent, then closes the connection
    pub fn truncated(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            status,
            content_length: Some(body.len() + 64),
            body,
        }
    }
}

/// What the server saw for one request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Path and query, e.g. `/update?limit=1000&offset=0`
    pub target: String,
    pub authorization: Option<String>,
}

/// Single-threaded HTTP/1.1 server answering scripted responses in order
///
/// Every response carries `Connection: close`, so each request arrives on a
/// fresh connection. The listener closes after the last scripted response.
pub struct FixtureServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl FixtureServer {
    pub fn start(responses: Vec<FixtureResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            for response in responses {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                let mut reader = BufReader::new(stream);

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    return;
                }
                let target = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();

                let mut authorization = None;
                loop {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) | Err(_) => break,
                        Ok(_) => {}
                    }
                    let line = line.trim_end();
                    if line.is_empty() {
                        break;
                    }
                    if let Some((name, value)) = line.split_once(':') {
                        if name.eq_ignore_ascii_case("authorization") {
                            authorization = Some(value.trim().to_string());
                        }
                    }
                }

                recorded.lock().unwrap().push(RecordedRequest {
                    target,
                    authorization,
                });

                let mut stream = reader.into_inner();
                let reply = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    reason(response.status),
                    response.content_length.unwrap_or(response.body.len()),
                    response.body
                );
                let _ = stream.write_all(reply.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            addr,
            requests,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Waits until every scripted response has been served
    pub fn finish(mut self) -> Vec<RecordedRequest> {
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
        self.requests()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Keeps fixture traffic off any proxy configured in the environment
pub fn bypass_proxy_for_loopback() {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        std::env::set_var("no_proxy", "127.0.0.1,localhost");
    });
}

/// JSON array of `count` update records numbered from `start`
pub fn update_page(start: usize, count: usize) -> String {
    let records: Vec<serde_json::Value> = (start..start + count)
        .map(|i| {
            serde_json::json!({
                "update_uid": format!("00000000-0000-0000-0000-{:012}", i),
                "kb": format!("{}", 5000000 + i),
                "update_title": format!("Cumulative Update {}", i),
                "update_creation_date": "2024-01-09",
                "product_title": "Windows 11",
                "msrc_severity": "Critical",
            })
        })
        .collect();
    serde_json::Value::Array(records).to_string()
}
