mod config;
mod engine;
mod events;
mod history;
mod ticker;

pub use config::{ConfigError, LifeConfig};
pub use engine::{Command, DEFAULT_ALIVE_PROBABILITY, LifeEngine, RunState, Status};
pub use events::{EngineEvent, EngineObserver, TraceObserver};
pub use history::History;
pub use ticker::{MAX_CATCH_UP, Ticker};
