use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use wsusscn2_cli::prelude::*;

enum Scripted {
    Body(String),
    Failure(CatalogError),
}

/// One request as the use case issued it
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCall {
    pub endpoint: String,
    pub params: Vec<(String, String)>,
}

impl FetchCall {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Mock RecordFetcher serving scripted JSON bodies in order
///
/// Once the script runs out every further call returns an empty page.
#[derive(Default, Clone)]
pub struct MockRecordFetcher {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<Mutex<Vec<FetchCall>>>,
}

impl MockRecordFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, body: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Body(body.into()));
        self
    }

    pub fn with_failure(self, error: CatalogError) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Failure(error));
        self
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl RecordFetcher for MockRecordFetcher {
    fn fetch<R: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Vec<R>> {
        self.calls.lock().unwrap().push(FetchCall {
            endpoint: endpoint.to_string(),
            params: params.to_vec(),
        });

        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Body(body)) => Ok(serde_json::from_str(&body)?),
            Some(Scripted::Failure(error)) => Err(error.into()),
            None => Ok(Vec::new()),
        }
    }
}
