pub mod event;
pub mod runner;

pub use event::{BatchEvent, BatchReport};
pub use runner::{BatchError, BatchRunner, run_batch};
