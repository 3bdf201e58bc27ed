use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Outcome of probing a single candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The candidate answered with an accepted status code
    Available(StatusCode),
    /// Transport failure, timeout or a status outside the accepted set
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub status: ProbeStatus,
}

impl ProbeResult {
    pub fn available(url: String, status_code: StatusCode) -> Self {
        Self {
            url,
            status: ProbeStatus::Available(status_code),
        }
    }

    pub fn unavailable(url: String, reason: String) -> Self {
        Self {
            url,
            status: ProbeStatus::Unavailable(reason),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, ProbeStatus::Available(_))
    }
}

/// Partition of probed candidates, serialized as
/// `{"Available": [...], "Unavailable": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponse {
    #[serde(rename = "Available")]
    pub available: Vec<String>,
    #[serde(rename = "Unavailable")]
    pub unavailable: Vec<String>,
}

impl CheckResponse {
    /// Partition results, keeping their relative order within each side.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = ProbeResult>,
    {
        let (available, unavailable): (Vec<_>, Vec<_>) =
            results.into_iter().partition(ProbeResult::is_available);

        Self {
            available: available.into_iter().map(|r| r.url).collect(),
            unavailable: unavailable.into_iter().map(|r| r.url).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.available.len() + self.unavailable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
