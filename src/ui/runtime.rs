//! Drives the app: side effects in, intents out, frames to a sink.
//!
//! The runtime owns the cache handle. For each submitted name it asks the
//! cache for a resource, then keeps re-rendering until nothing is left to
//! wait for: the transition target settling, the shown resource settling,
//! or the next transition deadline.

use std::io::{self, Write};

use tokio::time::Instant;

use crate::pokemon::{FetchError, Pokemon};
use crate::resource::{CacheHandle, PendingSignal};
use crate::ui::app::{AppIntent, AppReducer, AppState};
use crate::ui::mvi::Reducer;
use crate::ui::transition::{SuspenseConfig, TransitionPhase};
use crate::ui::view::{render, Frame};

/// Destination for rendered frames.
pub trait FrameSink {
    fn emit(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Writes frames as plain text, one blank line between frames.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for WriterSink<W> {
    fn emit(&mut self, frame: &Frame) -> io::Result<()> {
        if frame.busy {
            writeln!(self.writer, "[loading]")?;
        }
        for line in &frame.lines {
            writeln!(self.writer, "{}", line)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

/// Keeps every emitted frame in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<Frame>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl FrameSink for RecordingSink {
    fn emit(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

pub struct AppRuntime<S: FrameSink> {
    cache: CacheHandle<Pokemon, FetchError>,
    state: AppState,
    sink: S,
    last_frame: Option<Frame>,
}

impl<S: FrameSink> AppRuntime<S> {
    pub fn new(cache: CacheHandle<Pokemon, FetchError>, config: SuspenseConfig, sink: S) -> Self {
        Self {
            cache,
            state: AppState::new(config),
            sink,
            last_frame: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn cache(&self) -> &CacheHandle<Pokemon, FetchError> {
        &self.cache
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Submit a name and run until the screen is stable.
    ///
    /// A blank name resets the app.
    pub async fn submit(&mut self, name: &str) -> io::Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return self.reset();
        }

        self.dispatch(AppIntent::Submit {
            name: name.to_string(),
        });

        let resource = self.cache.get(name);
        tracing::info!(
            pokemon = %name,
            resource_id = %resource.id(),
            status = %resource.status(),
            "Resource requested"
        );
        self.dispatch(AppIntent::ResourceRequested {
            resource,
            at: Instant::now(),
        });

        self.drive().await
    }

    /// Clear the form and the boundary.
    pub fn reset(&mut self) -> io::Result<()> {
        self.dispatch(AppIntent::Reset);
        self.present()
    }

    /// Render and wait on whatever can still change the screen.
    pub async fn drive(&mut self) -> io::Result<()> {
        loop {
            self.present()?;

            let awaiting_target = matches!(
                self.state.transition.phase,
                TransitionPhase::Pending { .. } | TransitionPhase::Busy { .. }
            );
            let transition_target = self
                .state
                .pending
                .as_ref()
                .filter(|_| awaiting_target)
                .map(|r| r.pending_signal());
            if let Some(None) = transition_target {
                // Settled (or abandoned) before we got to wait on it.
                self.dispatch(AppIntent::Settled { now: Instant::now() });
                continue;
            }
            let transition_target = transition_target.flatten();
            let shown = self
                .state
                .resource
                .as_ref()
                .and_then(|r| r.pending_signal());
            let deadline = self.state.transition.next_deadline();

            if transition_target.is_none() && shown.is_none() && deadline.is_none() {
                return Ok(());
            }

            tokio::select! {
                _ = wait_settled(transition_target) => {
                    self.dispatch(AppIntent::Settled { now: Instant::now() });
                }
                _ = wait_settled(shown) => {}
                _ = sleep_until(deadline) => {
                    self.dispatch(AppIntent::Tick { now: Instant::now() });
                }
            }
        }
    }

    fn dispatch(&mut self, intent: AppIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = AppReducer::reduce(state, intent);
    }

    fn present(&mut self) -> io::Result<()> {
        let frame = render(&self.state);
        if self.last_frame.as_ref() != Some(&frame) {
            self.sink.emit(&frame)?;
            self.last_frame = Some(frame);
        }
        Ok(())
    }
}

async fn wait_settled(signal: Option<PendingSignal>) {
    match signal {
        Some(signal) => signal.settled().await,
        None => std::future::pending().await,
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
