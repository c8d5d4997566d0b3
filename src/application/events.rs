//! Notifications emitted by [`LifeEngine`](super::LifeEngine).
//!
//! Adapters (sound, logging, timers) subscribe here instead of the engine
//! reaching out to them.

use tracing::debug;

/// Something the engine just did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// A fresh random board was generated.
    Initialized { size: usize },
    /// One generation was computed.
    Stepped { generation: u64 },
    /// The board was rolled back one generation.
    Undone { generation: u64 },
    /// The game was stopped and re-randomized.
    Reset,
    /// The run state went from stopped to running.
    Started,
    /// The run state went from running to stopped.
    Paused,
}

/// Receives engine notifications on the engine's thread.
pub trait EngineObserver {
    fn notify(&mut self, event: &EngineEvent);
}

impl<F: FnMut(&EngineEvent)> EngineObserver for F {
    fn notify(&mut self, event: &EngineEvent) {
        self(event)
    }
}

/// Logs every event at debug level.
#[derive(Debug, Default)]
pub struct TraceObserver;

impl EngineObserver for TraceObserver {
    fn notify(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::Initialized { size } => debug!(size, "board initialized"),
            EngineEvent::Stepped { generation } => debug!(generation, "generation computed"),
            EngineEvent::Undone { generation } => debug!(generation, "generation undone"),
            EngineEvent::Reset => debug!("board reset"),
            EngineEvent::Started => debug!("simulation started"),
            EngineEvent::Paused => debug!("simulation paused"),
        }
    }
}
