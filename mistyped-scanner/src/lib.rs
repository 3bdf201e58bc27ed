pub mod error;
pub mod prober;
pub mod result;
pub mod test_utils;
pub mod transport;

pub use error::ScanError;
pub use prober::{Prober, parse_accepted};
pub use result::{CheckResponse, ProbeResult, ProbeStatus};
pub use transport::{HttpTransport, Transport};
