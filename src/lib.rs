// Domain layer - board and transition rule
pub mod domain;

// Application layer - engine, history, timing, settings
pub mod application;

// Infrastructure layer - UI, rendering, input, sound, CLI
pub mod audio;
pub mod cli;
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{Command, EngineEvent, LifeConfig, LifeEngine, RunState, Ticker};
pub use domain::{Cell, Grid};
pub use rendering::{GridSurface, Presenter};
