use std::time::Duration;

/// What a single probe produced: either the HTTP status of a completed exchange,
/// or a description of why no status could be obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    Status(u16),
    Failed(String),
}

/// The result of probing one target. Built once by the prober and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// The normalized URL that was requested.
    pub url: String,
    pub outcome: ProbeOutcome,
    /// Wall-clock time of the request in milliseconds, rounded to two decimals.
    /// Populated for failures as well.
    pub elapsed_ms: f64,
}

impl ProbeResult {
    pub fn new(url: impl Into<String>, outcome: ProbeOutcome, elapsed: Duration) -> Self {
        Self {
            url: url.into(),
            outcome,
            elapsed_ms: round_millis(elapsed),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self.outcome {
            ProbeOutcome::Status(code) => Some(code),
            ProbeOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ProbeOutcome::Status(_) => None,
            ProbeOutcome::Failed(message) => Some(message),
        }
    }
}

/// Convert a duration to milliseconds rounded to two decimal places.
pub fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_nanos() as f64 / 10_000.0).round() / 100.0
}
