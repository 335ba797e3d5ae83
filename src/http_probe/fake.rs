use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Semaphore;

use super::prelude::*;

/// In-memory prober: targets containing "fail" fail, everything else answers 200.
/// With a gate set, each probe waits for a permit first. `calls` may be shared to
/// observe the fake after it has been moved into a runner.
#[derive(Default)]
pub struct FakeProber {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub gate: Option<Arc<Semaphore>>,
}

impl Probe for FakeProber {
    async fn probe(&self, target: &str) -> ProbeResult {
        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await.expect("gate closed");
        }
        self.calls.lock().expect("poisoned").push(target.to_string());
        let outcome = if target.contains("fail") {
            ProbeOutcome::Failed("connection refused".to_string())
        } else {
            ProbeOutcome::Status(200)
        };
        ProbeResult::new(normalize_url(target), outcome, Duration::from_millis(1))
    }
}
