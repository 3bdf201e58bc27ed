use crate::error::Result;
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

const USER_AGENT: &str = "mistyped/0.1 (https://github.com/trapdoorsec/mistyped)";

/// Issues a single GET and reports the final status code.
///
/// This is the seam between the prober and the network; tests swap in
/// [`crate::test_utils::StaticTransport`].
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<StatusCode>> + Send;
}

/// reqwest backed transport. Redirects are followed with reqwest's default
/// policy, so the final status code is what gets reported.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let timeout = Duration::from_secs(timeout_secs);
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(reqwest::redirect::Policy::default())
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<StatusCode> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Ok(response.status())
    }
}
