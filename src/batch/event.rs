use crate::http_probe::result::ProbeResult;

/// One result per submitted target, in submission order.
pub type BatchReport = Vec<ProbeResult>;

/// Notifications emitted by a running batch, delivered in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    /// A target is about to be probed.
    Progress(String),
    /// Every target has been probed. Sent exactly once, last.
    Completed(BatchReport),
}

pub(crate) fn progress_message(target: &str) -> String {
    format!("Checking {target}...")
}
