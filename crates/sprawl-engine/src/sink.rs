//! Destinations for per-step output.
//!
//! A [`DiagnosticSink`] receives the category grid after every tick and,
//! when diagnostics are enabled, the full [`StepDiagnostics`] of each
//! step. [`ChannelSink`] hands both off to another thread so that slow
//! persistence never holds up the step loop.

use std::error::Error;
use std::fmt;

use crossbeam_channel::{Receiver, Sender};
use sprawl_core::{CategoryGrid, TickId};
use sprawl_rule::StepDiagnostics;

// ── SinkError ──────────────────────────────────────────────────────

/// Errors a sink can report back to the run loop.
#[derive(Debug)]
pub enum SinkError {
    /// The receiving end of a [`ChannelSink`] was dropped.
    Disconnected,
    /// The sink's backend failed to persist a layer.
    Backend {
        /// Tick whose output could not be persisted.
        tick: TickId,
        /// Underlying failure.
        source: Box<dyn Error + Send + Sync>,
    },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "sink receiver disconnected"),
            Self::Backend { tick, source } => {
                write!(f, "failed to persist output of tick {tick}: {source}")
            }
        }
    }
}

impl Error for SinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Backend { source, .. } => Some(source.as_ref()),
            Self::Disconnected => None,
        }
    }
}

// ── DiagnosticSink ─────────────────────────────────────────────────

/// Receives run output, tick by tick.
pub trait DiagnosticSink {
    /// Called with the grid at `tick`: once for the initial grid at
    /// tick 0, then after every step.
    fn record_grid(&mut self, tick: TickId, grid: &CategoryGrid) -> Result<(), SinkError>;

    /// Called with the diagnostic layers of a step, before the
    /// corresponding [`record_grid`](Self::record_grid).
    fn record(&mut self, diagnostics: &StepDiagnostics) -> Result<(), SinkError>;
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record_grid(&mut self, tick: TickId, grid: &CategoryGrid) -> Result<(), SinkError> {
        (**self).record_grid(tick, grid)
    }

    fn record(&mut self, diagnostics: &StepDiagnostics) -> Result<(), SinkError> {
        (**self).record(diagnostics)
    }
}

// ── NullSink ───────────────────────────────────────────────────────

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record_grid(&mut self, _tick: TickId, _grid: &CategoryGrid) -> Result<(), SinkError> {
        Ok(())
    }

    fn record(&mut self, _diagnostics: &StepDiagnostics) -> Result<(), SinkError> {
        Ok(())
    }
}

// ── MemorySink ─────────────────────────────────────────────────────

/// Keeps everything in memory, in arrival order.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    grids: Vec<(TickId, CategoryGrid)>,
    diagnostics: Vec<StepDiagnostics>,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded grids, starting with tick 0.
    pub fn grids(&self) -> &[(TickId, CategoryGrid)] {
        &self.grids
    }

    /// Recorded diagnostics, one per step when enabled.
    pub fn diagnostics(&self) -> &[StepDiagnostics] {
        &self.diagnostics
    }

    /// The most recently recorded grid.
    pub fn last_grid(&self) -> Option<&CategoryGrid> {
        self.grids.last().map(|(_, g)| g)
    }
}

impl DiagnosticSink for MemorySink {
    fn record_grid(&mut self, tick: TickId, grid: &CategoryGrid) -> Result<(), SinkError> {
        self.grids.push((tick, grid.clone()));
        Ok(())
    }

    fn record(&mut self, diagnostics: &StepDiagnostics) -> Result<(), SinkError> {
        self.diagnostics.push(diagnostics.clone());
        Ok(())
    }
}

// ── ChannelSink ────────────────────────────────────────────────────

/// One message sent by a [`ChannelSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum SinkEvent {
    /// The grid at a tick.
    Grid {
        /// Tick the grid belongs to.
        tick: TickId,
        /// The grid.
        grid: CategoryGrid,
    },
    /// Diagnostic layers of one step.
    Diagnostics(Box<StepDiagnostics>),
}

/// Forwards output over a crossbeam channel.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: Sender<SinkEvent>,
}

impl ChannelSink {
    /// A sink backed by a channel holding at most `capacity` pending
    /// events. The run loop blocks when the channel is full.
    pub fn bounded(capacity: usize) -> (Self, Receiver<SinkEvent>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        (Self { tx }, rx)
    }

    /// A sink backed by an unbounded channel.
    pub fn unbounded() -> (Self, Receiver<SinkEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }

    fn send(&self, event: SinkEvent) -> Result<(), SinkError> {
        self.tx.send(event).map_err(|_| SinkError::Disconnected)
    }
}

impl DiagnosticSink for ChannelSink {
    fn record_grid(&mut self, tick: TickId, grid: &CategoryGrid) -> Result<(), SinkError> {
        self.send(SinkEvent::Grid {
            tick,
            grid: grid.clone(),
        })
    }

    fn record(&mut self, diagnostics: &StepDiagnostics) -> Result<(), SinkError> {
        self.send(SinkEvent::Diagnostics(Box::new(diagnostics.clone())))
    }
}
