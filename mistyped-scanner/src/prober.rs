use crate::error::{Result, ScanError};
use crate::result::{CheckResponse, ProbeResult};
use crate::transport::Transport;
use futures::stream::{self, StreamExt};
use reqwest::StatusCode;
use std::collections::HashSet;
use tracing::{debug, info};

/// Status codes that mark a candidate as taken when no override is given
pub const DEFAULT_ACCEPTED: [u16; 3] = [200, 204, 403];

/// Fans a batch of GET probes out over a [`Transport`] and partitions the
/// answers into available and unavailable candidates.
#[derive(Debug, Clone)]
pub struct Prober<T> {
    transport: T,
    accepted: HashSet<StatusCode>,
    max_concurrency: Option<usize>,
}

impl<T: Transport> Prober<T> {
    pub fn new(transport: T) -> Self {
        let accepted = DEFAULT_ACCEPTED
            .iter()
            .filter_map(|code| StatusCode::from_u16(*code).ok())
            .collect();

        Self {
            transport,
            accepted,
            max_concurrency: None,
        }
    }

    pub fn with_accepted(mut self, accepted: HashSet<StatusCode>) -> Self {
        self.accepted = accepted;
        self
    }

    /// Cap the number of probes in flight. Without a cap every candidate is
    /// probed at once.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = Some(max_concurrency.max(1));
        self
    }

    pub fn accepted(&self) -> &HashSet<StatusCode> {
        &self.accepted
    }

    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Probe a single URL. Never fails: every error becomes an
    /// unavailable result.
    pub async fn probe(&self, url: &str) -> ProbeResult {
        match self.transport.get(url).await {
            Ok(status_code) if self.accepted.contains(&status_code) => {
                debug!("{} is available ({})", url, status_code);
                ProbeResult::available(url.to_string(), status_code)
            }
            Ok(status_code) => {
                debug!("{} answered {}", url, status_code);
                ProbeResult::unavailable(url.to_string(), format!("status {}", status_code))
            }
            Err(e) => {
                debug!("{} is unreachable: {}", url, e);
                ProbeResult::unavailable(url.to_string(), e.to_string())
            }
        }
    }

    /// Probe every URL concurrently and wait for all of them.
    ///
    /// Results are buffered in input order, so both sides of the returned
    /// partition follow the order of `urls`.
    pub async fn probe_all(&self, urls: Vec<String>) -> CheckResponse {
        if urls.is_empty() {
            return CheckResponse::default();
        }

        let total = urls.len();
        let width = self.max_concurrency.unwrap_or(total);
        info!("Probing {} candidates ({} in flight)", total, width.min(total));

        let results: Vec<ProbeResult> = stream::iter(urls)
            .map(|url| async move { self.probe(&url).await })
            .buffered(width)
            .collect()
            .await;

        let response = CheckResponse::from_results(results);
        info!(
            "Probe complete: {} available, {} unavailable",
            response.available.len(),
            response.unavailable.len()
        );
        response
    }
}

/// Parse a comma separated list of status codes, e.g. `200,204,403`
pub fn parse_accepted<S: AsRef<str>>(accept: S) -> Result<HashSet<StatusCode>> {
    let mut accepted = HashSet::new();
    for code in accept.as_ref().split(',').map(str::trim) {
        if code.is_empty() {
            continue;
        }
        let status_code = StatusCode::from_bytes(code.as_bytes())
            .map_err(|e| ScanError::InvalidStatus(format!("'{}': {}", code, e)))?;
        accepted.insert(status_code);
    }

    if accepted.is_empty() {
        return Err(ScanError::InvalidStatus(
            "at least one status code is required".to_string(),
        ));
    }

    Ok(accepted)
}
