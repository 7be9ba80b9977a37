use crate::ports::outbound::RecordFetcher;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use reqwest::blocking::{Client, Request};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Settings for [`CatalogClient`]
#[derive(Debug, Clone)]
pub struct CatalogClientOptions {
    /// Scheme, host and port, e.g. `https://wsusscn2.cab:443`
    pub base_url: String,
    pub api_key: String,
    /// Skip server certificate validation (DANGER!)
    pub insecure: bool,
    /// Dump full requests and responses at debug level
    pub debug: bool,
}

/// CatalogClient adapter for the wsusscn2.cab REST API
///
/// Implements the RecordFetcher port with a blocking reqwest client. The API
/// key travels as the password of HTTP Basic auth under a fixed username.
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Does not retry failed requests (every failure is fatal)
/// - The Authorization header is redacted from debug dumps
/// - `insecure` is fixed when the client is built and applies to every
///   request made through it
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: String,
    debug: bool,
}

impl CatalogClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://wsusscn2.cab:443";
    const TIMEOUT_SECONDS: u64 = 30;
    const AUTH_USERNAME: &'static str = "u";

    pub fn new(options: CatalogClientOptions) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("wsusscn2cli/{}", version);

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent);

        if options.insecure {
            log::warn!("TLS certificate validation is disabled for all requests");
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: options.base_url,
            api_key: options.api_key,
            debug: options.debug,
        })
    }

    fn build_request(&self, endpoint: &str, params: &[(String, String)]) -> Result<Request> {
        let url = request_url(&self.base_url, endpoint, params)?;
        let request = self
            .client
            .get(url.clone())
            .basic_auth(Self::AUTH_USERNAME, Some(&self.api_key))
            .build()
            .map_err(|e| CatalogError::Transport {
                url: url.to_string(),
                details: e.to_string(),
            })?;
        Ok(request)
    }
}

impl RecordFetcher for CatalogClient {
    fn fetch<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Vec<R>> {
        let request = self.build_request(endpoint, params)?;
        let url = request.url().to_string();

        log::info!("GET {}", url);
        if self.debug {
            log::debug!("{}", dump_request(&request));
        }

        let response = self
            .client
            .execute(request)
            .map_err(|e| CatalogError::Transport {
                url: url.clone(),
                details: e.to_string(),
            })?;

        let status = response.status();
        let headers = response.headers().clone();

        if status != StatusCode::OK {
            if self.debug {
                // the status decides the error even if the body is unreadable
                let body = response.text().unwrap_or_default();
                log::debug!("{}", dump_response(status, &headers, &body));
            }
            return Err(status_error(status, url).into());
        }

        let body = response.text().map_err(|e| CatalogError::Transport {
            url: url.clone(),
            details: e.to_string(),
        })?;

        if self.debug {
            log::debug!("{}", dump_response(status, &headers, &body));
        }

        let records: Vec<R> =
            serde_json::from_str(&body).map_err(|e| CatalogError::Decode {
                url,
                details: e.to_string(),
            })?;
        Ok(records)
    }
}

/// Joins base URL and endpoint and appends the query pairs in order
fn request_url(base_url: &str, endpoint: &str, params: &[(String, String)]) -> Result<Url> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), endpoint);
    Url::parse_with_params(&raw, params.iter()).map_err(|e| {
        CatalogError::Transport {
            url: raw.clone(),
            details: format!("Invalid request URL: {}", e),
        }
        .into()
    })
}

/// Maps a non-200 status to its typed error
fn status_error(status: StatusCode, url: String) -> CatalogError {
    match status {
        StatusCode::UNAUTHORIZED => CatalogError::Unauthorized { url },
        StatusCode::FORBIDDEN => CatalogError::Forbidden { url },
        StatusCode::NOT_FOUND => CatalogError::NotFound { url },
        other => CatalogError::UnknownStatus {
            status: other.as_u16(),
            url,
        },
    }
}

fn dump_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if *name == AUTHORIZATION {
                "<redacted>"
            } else {
                value.to_str().unwrap_or("<binary>")
            };
            format!("{}: {}\n", name, value)
        })
        .collect()
}

fn dump_request(request: &Request) -> String {
    format!(
        "{} {}\n{}",
        request.method(),
        request.url(),
        dump_headers(request.headers())
    )
}

fn dump_response(status: StatusCode, headers: &HeaderMap, body: &str) -> String {
    format!("{}\n{}\n{}", status, dump_headers(headers), body)
}
