use chrono::Local;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::batch::{BatchError, BatchEvent, BatchRunner};
use crate::http_probe::Probe;
use crate::input::parse_targets;
use crate::report::{StatusLine, render_table};

const PROMPT: &str = "Enter URLs (comma-separated): ";

/// The interactive front end: turns input lines into batches and batch events into text.
pub struct App<P> {
    runner: BatchRunner<P>,
    events: Option<UnboundedReceiver<BatchEvent>>,
}

impl<P: Probe> App<P> {
    pub fn new(runner: BatchRunner<P>) -> Self {
        Self {
            runner,
            events: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.events.is_some() || self.runner.is_running()
    }

    /// Handle one line of user input, returning what to show.
    pub fn submit(&mut self, line: &str) -> Vec<String> {
        if self.is_busy() {
            return vec![BatchError::AlreadyRunning.to_string()];
        }

        let targets = match parse_targets(line) {
            Ok(targets) => targets,
            Err(e) => return vec![format!("Input Error: {e}")],
        };

        match self.runner.start(targets) {
            Ok(events) => {
                self.events = Some(events);
                vec![StatusLine::Started.to_string()]
            }
            Err(e) => vec![e.to_string()],
        }
    }

    /// Wait for the next event of the running batch. Never resolves while idle.
    pub async fn next_event(&mut self) -> Option<BatchEvent> {
        let Some(events) = self.events.as_mut() else {
            return std::future::pending().await;
        };
        let event = events.recv().await;
        if event.is_none() {
            log::error!("Batch ended without reporting results");
            self.events = None;
        }
        event
    }

    /// Turn a batch event into what to show.
    pub fn handle(&mut self, event: BatchEvent) -> Vec<String> {
        match event {
            BatchEvent::Progress(message) => vec![StatusLine::Progress(message).to_string()],
            BatchEvent::Completed(report) => {
                self.events = None;
                vec![
                    render_table(&report),
                    StatusLine::Completed(Local::now()).to_string(),
                ]
            }
        }
    }
}

async fn write_lines<W: AsyncWrite + Unpin>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        out.write_all(line.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }
    out.flush().await
}

async fn prompt<W: AsyncWrite + Unpin>(out: &mut W) -> std::io::Result<()> {
    out.write_all(PROMPT.as_bytes()).await?;
    out.flush().await
}

/// Read URL lists from `input` until it ends, running one batch at a time.
/// Input stays live while a batch runs; an in-flight batch is finished before returning.
pub async fn run<P, R, W>(mut app: App<P>, input: R, mut out: W) -> std::io::Result<()>
where
    P: Probe,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    write_lines(&mut out, &[StatusLine::Ready.to_string()]).await?;
    prompt(&mut out).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    let shown = app.submit(&line);
                    write_lines(&mut out, &shown).await?;
                    if app.events.is_none() {
                        prompt(&mut out).await?;
                    }
                }
                None => break,
            },
            Some(event) = app.next_event() => {
                let shown = app.handle(event);
                write_lines(&mut out, &shown).await?;
                if app.events.is_none() {
                    prompt(&mut out).await?;
                }
            }
        }
    }

    while app.events.is_some() {
        match app.next_event().await {
            Some(event) => {
                let shown = app.handle(event);
                write_lines(&mut out, &shown).await?;
            }
            None => break,
        }
    }

    Ok(())
}
