use std::fmt;

use chrono::{DateTime, Local};

/// The one-line summary of what the checker is doing.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    Ready,
    Started,
    Progress(String),
    Completed(DateTime<Local>),
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Ready => f.write_str("Ready to check sites"),
            StatusLine::Started => f.write_str("Checking sites..."),
            StatusLine::Progress(message) => f.write_str(message),
            StatusLine::Completed(at) => write!(f, "Check completed at {}", at.format("%H:%M:%S")),
        }
    }
}
