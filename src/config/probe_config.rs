use std::time::Duration;

use serde::Deserialize;

/// Probe settings for the site checker.
/// Every field is optional in the YAML file and falls back to its default.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Total time allowed for a single request (connect + read), in seconds.
    /// Defaults to 10.
    pub timeout_seconds: u64,

    /// The User-Agent header sent with each probe.
    pub user_agent: String,

    /// Route requests through the proxies named by the usual environment variables.
    /// Defaults to true.
    pub use_system_proxy: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
            use_system_proxy: true,
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("sitecheck/{}", env!("CARGO_PKG_VERSION"))
}
