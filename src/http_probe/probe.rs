use std::time::{Duration, Instant};

use reqwest::Client;
use url::Url;

use super::prelude::*;
use super::report;
use crate::config::probe_config::ProbeConfig;

/// Ensure the target carries an explicit scheme, defaulting to https.
pub fn normalize_url(target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        target.to_string()
    } else {
        format!("https://{target}")
    }
}

/// Issues a single timed GET per target with a shared client.
#[derive(Debug, Clone)]
pub struct SiteProber {
    client: Client,
    timeout: Duration,
}

impl SiteProber {
    pub fn new(config: &ProbeConfig) -> Result<Self, reqwest::Error> {
        let timeout = config.timeout();
        let mut builder = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The URL is left out since every result already carries it.
    fn describe(&self, err: reqwest::Error) -> String {
        let err = err.without_url();
        if err.is_timeout() {
            format!(
                "request timed out after {}s: {}",
                self.timeout.as_secs_f64(),
                report(&err)
            )
        } else {
            report(&err)
        }
    }
}

impl Probe for SiteProber {
    async fn probe(&self, target: &str) -> ProbeResult {
        let url = normalize_url(target);

        let start = Instant::now();
        let outcome = match Url::parse(&url) {
            Ok(parsed) => match self.client.get(parsed).send().await {
                Ok(resp) => ProbeOutcome::Status(resp.status().as_u16()),
                Err(e) => ProbeOutcome::Failed(self.describe(e)),
            },
            Err(e) => ProbeOutcome::Failed(format!("invalid URL: {e}")),
        };
        let result = ProbeResult::new(url, outcome, start.elapsed());

        match &result.outcome {
            ProbeOutcome::Status(code) => {
                log::debug!("{} -> {} in {:.2}ms", result.url, code, result.elapsed_ms)
            }
            ProbeOutcome::Failed(e) => {
                log::info!("{} failed after {:.2}ms: {e}", result.url, result.elapsed_ms)
            }
        }

        result
    }
}
