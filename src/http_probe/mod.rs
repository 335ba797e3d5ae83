#[cfg(test)]
pub(crate) mod fake;
pub mod probe;
pub mod result;

pub mod prelude {
    pub use super::Probe;
    pub use super::probe::{SiteProber, normalize_url};
    pub use super::result::{ProbeOutcome, ProbeResult};
}

use std::fmt::Write;
use std::future::Future;

use result::ProbeResult;

/// Something that can check a single target. Implementations never fail:
/// every problem ends up in the returned result.
pub trait Probe: Send + Sync + 'static {
    fn probe(&self, target: &str) -> impl Future<Output = ProbeResult> + Send;
}

/// Flatten an error and its sources into a single line.
fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}
