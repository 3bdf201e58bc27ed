// Deterministic transport for exercising the prober without a network

use crate::error::{Result, ScanError};
use crate::transport::Transport;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

/// Answers from a fixed table. URLs without an entry fail the way a
/// refused connection would.
#[derive(Debug, Default)]
pub struct StaticTransport {
    responses: HashMap<String, StatusCode>,
    delays: HashMap<String, Duration>,
    requested: Mutex<Vec<String>>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: &str, status_code: StatusCode) -> Self {
        self.responses.insert(url.to_string(), status_code);
        self
    }

    /// Hold the answer for `url` back by `delay`
    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    /// Every URL requested so far, in request order
    pub async fn requested(&self) -> Vec<String> {
        self.requested.lock().await.clone()
    }
}

impl Transport for StaticTransport {
    async fn get(&self, url: &str) -> Result<StatusCode> {
        self.requested.lock().await.push(url.to_string());

        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }

        self.responses
            .get(url)
            .copied()
            .ok_or_else(|| ScanError::Other(format!("connection refused: {}", url)))
    }
}
