use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::event::{BatchEvent, BatchReport, progress_message};
use crate::http_probe::Probe;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BatchError {
    #[error("A check is already in progress")]
    AlreadyRunning,
}

/// Probe every target in order, announcing each one before it is probed.
/// Returns the collected results without sending the completion event.
async fn probe_all<P: Probe>(
    prober: &P,
    targets: &[String],
    events: &UnboundedSender<BatchEvent>,
) -> BatchReport {
    let mut results = Vec::with_capacity(targets.len());
    for target in targets {
        notify(events, BatchEvent::Progress(progress_message(target)));
        results.push(prober.probe(target).await);
    }
    results
}

/// Probe `targets` one after another and report through `events`:
/// one `Progress` per target, then a single `Completed` with all results.
pub async fn run_batch<P: Probe>(
    prober: &P,
    targets: &[String],
    events: &UnboundedSender<BatchEvent>,
) {
    let report = probe_all(prober, targets, events).await;
    notify(events, BatchEvent::Completed(report));
}

fn notify(events: &UnboundedSender<BatchEvent>, event: BatchEvent) {
    if events.send(event).is_err() {
        log::debug!("Batch listener dropped, continuing without notifications");
    }
}

/// Clears the in-flight flag when the batch task ends, however it ends.
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs batches on a background task, at most one at a time.
pub struct BatchRunner<P> {
    prober: Arc<P>,
    in_flight: Arc<AtomicBool>,
}

impl<P: Probe> BatchRunner<P> {
    pub fn new(prober: P) -> Self {
        Self {
            prober: Arc::new(prober),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Start probing `targets` on a separate task and return the event stream.
    /// Fails without side effects if a previous batch has not completed yet.
    pub fn start(&self, targets: Vec<String>) -> Result<UnboundedReceiver<BatchEvent>, BatchError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(BatchError::AlreadyRunning);
        }

        let guard = InFlight(Arc::clone(&self.in_flight));
        let prober = Arc::clone(&self.prober);
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            log::info!("Checking {} site(s)", targets.len());
            let report = probe_all(prober.as_ref(), &targets, &tx).await;
            // Release before completing so the listener can start the next batch right away.
            drop(guard);
            notify(&tx, BatchEvent::Completed(report));
        });

        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::Semaphore;

    use super::*;
    use crate::http_probe::fake::FakeProber;

    fn targets(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    async fn drain(mut rx: UnboundedReceiver<BatchEvent>) -> Vec<BatchEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_run_batch_progress_then_completion_in_order() {
        let prober = FakeProber::default();
        let (tx, rx) = mpsc::unbounded_channel();
        let input = targets(&["example.com", "https://example.org", "fail.test"]);

        run_batch(&prober, &input, &tx).await;
        drop(tx);
        let events = drain(rx).await;

        assert_eq!(events.len(), 4);
        assert_eq!(events[0], BatchEvent::Progress("Checking example.com...".to_string()));
        assert_eq!(events[1], BatchEvent::Progress("Checking https://example.org...".to_string()));
        assert_eq!(events[2], BatchEvent::Progress("Checking fail.test...".to_string()));

        let BatchEvent::Completed(report) = &events[3] else {
            panic!("last event should be the completion");
        };
        let urls: Vec<&str> = report.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, ["https://example.com", "https://example.org", "https://fail.test"]);
        assert_eq!(report[0].status_code(), Some(200));
        assert_eq!(report[2].error(), Some("connection refused"));
        assert_eq!(*prober.calls.lock().unwrap(), input);
    }

    #[tokio::test]
    async fn test_run_batch_empty_completes_immediately() {
        let prober = FakeProber::default();
        let (tx, rx) = mpsc::unbounded_channel();

        run_batch(&prober, &[], &tx).await;
        drop(tx);

        assert_eq!(drain(rx).await, vec![BatchEvent::Completed(vec![])]);
        assert!(prober.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_batch_survives_dropped_listener() {
        let prober = FakeProber::default();
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        run_batch(&prober, &targets(&["a.test", "b.test"]), &tx).await;

        assert_eq!(prober.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_runner_rejects_second_batch_while_running() {
        let gate = Arc::new(Semaphore::new(0));
        let runner = BatchRunner::new(FakeProber {
            gate: Some(Arc::clone(&gate)),
            ..Default::default()
        });

        let rx = runner.start(targets(&["a.test", "b.test"])).unwrap();
        assert!(runner.is_running());
        assert_eq!(
            runner.start(targets(&["c.test"])).unwrap_err(),
            BatchError::AlreadyRunning
        );

        gate.add_permits(2);
        let events = drain(rx).await;
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[2], BatchEvent::Completed(report) if report.len() == 2));
        assert!(!runner.is_running());

        gate.add_permits(1);
        let events = drain(runner.start(targets(&["c.test"])).unwrap()).await;
        assert_eq!(events.len(), 2);
    }
}
