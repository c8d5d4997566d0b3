use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use super::config::{ConfigError, LifeConfig};
use super::events::{EngineEvent, EngineObserver};
use super::history::History;
use crate::domain::Grid;

/// Chance a cell starts alive on a fresh board.
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.3;

/// Whether the periodic driver should be advancing generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    Running,
    #[default]
    Stopped,
}

/// User-facing controls, in the order the panel shows them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Step,
    Pause,
    Reset,
    Undo,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Start,
        Command::Step,
        Command::Pause,
        Command::Reset,
        Command::Undo,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Command::Start => "Start",
            Command::Step => "Next Generation",
            Command::Pause => "Pause",
            Command::Reset => "Reset",
            Command::Undo => "Undo",
        }
    }
}

/// Read-only summary for rendering surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub generation: u64,
    pub population: usize,
    pub undoable: usize,
    pub run_state: RunState,
}

/// LifeEngine owns the board, its undo history and the run flag.
/// All mutation goes through its operations; observers hear about each one.
pub struct LifeEngine {
    grid: Grid,
    history: History,
    run_state: RunState,
    run_epoch: u64,
    generation: u64,
    alive_probability: f64,
    rng: StdRng,
    observers: Vec<Box<dyn EngineObserver>>,
}

impl LifeEngine {
    /// Random `size × size` board seeded from OS entropy, unbounded history.
    pub fn new(size: usize) -> Self {
        Self::with_rng(size, DEFAULT_ALIVE_PROBABILITY, None, StdRng::from_os_rng())
    }

    /// Build from validated settings; `seed` makes every board reproducible.
    pub fn from_config(config: &LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::with_rng(
            config.grid_size,
            config.alive_probability,
            config.history_limit,
            rng,
        ))
    }

    /// Start from a known board instead of a random one.
    /// Reset still produces random boards from OS entropy.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            history: History::new(grid.clone(), None),
            grid,
            run_state: RunState::Stopped,
            run_epoch: 0,
            generation: 0,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            rng: StdRng::from_os_rng(),
            observers: Vec::new(),
        }
    }

    fn with_rng(size: usize, alive_probability: f64, history_limit: Option<usize>, mut rng: StdRng) -> Self {
        let grid = Grid::random(size, alive_probability, &mut rng);
        Self {
            history: History::new(grid.clone(), history_limit),
            grid,
            run_state: RunState::Stopped,
            run_epoch: 0,
            generation: 0,
            alive_probability,
            rng,
            observers: Vec::new(),
        }
    }

    /// Register an observer; it receives every later event.
    pub fn subscribe(&mut self, observer: impl EngineObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: EngineEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }

    /// Replace the board with a fresh random `size × size` one.
    /// History restarts with this board as its only entry.
    pub fn initialize(&mut self, size: usize) {
        self.grid = Grid::random(size, self.alive_probability, &mut self.rng);
        self.history.restart(self.grid.clone());
        self.generation = 0;
        self.emit(EngineEvent::Initialized { size });
    }

    /// Record the current board, then advance one generation.
    pub fn step(&mut self) {
        let next = self.grid.evolve();
        let previous = std::mem::replace(&mut self.grid, next);
        self.history.push(self.generation, previous);
        self.generation += 1;
        let generation = self.generation;
        self.emit(EngineEvent::Stepped { generation });
    }

    /// Discard the most recent history entry and restore the board now on top.
    /// Returns false, leaving everything untouched, when only the first entry remains.
    pub fn undo(&mut self) -> bool {
        let Some(top) = self.history.pop() else {
            debug!(generation = self.generation, "undo ignored, no earlier state recorded");
            return false;
        };
        self.grid = top.grid.clone();
        self.generation = top.generation;
        let generation = self.generation;
        self.emit(EngineEvent::Undone { generation });
        true
    }

    /// Begin periodic stepping. No-op while already running.
    pub fn start(&mut self) {
        if self.run_state == RunState::Running {
            return;
        }
        self.run_state = RunState::Running;
        self.run_epoch += 1;
        self.emit(EngineEvent::Started);
    }

    /// Stop periodic stepping. No-op while already stopped.
    pub fn pause(&mut self) {
        if self.run_state == RunState::Stopped {
            return;
        }
        self.run_state = RunState::Stopped;
        self.emit(EngineEvent::Paused);
    }

    /// Stop, then start over with a fresh random board of the same size.
    pub fn reset(&mut self) {
        self.pause();
        self.initialize(self.grid.size());
        self.emit(EngineEvent::Reset);
    }

    /// Dispatch a control command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Step => self.step(),
            Command::Pause => self.pause(),
            Command::Reset => self.reset(),
            Command::Undo => {
                self.undo();
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current board
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Counts stopped-to-running transitions; changes on every effective start.
    pub fn run_epoch(&self) -> u64 {
        self.run_epoch
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> Status {
        Status {
            generation: self.generation,
            population: self.grid.population(),
            undoable: self.history.undoable(),
            run_state: self.run_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn blinker() -> Grid {
        Grid::from_rows(&[[0u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap()
    }

    fn seeded(size: usize, seed: u64) -> LifeEngine {
        let config = LifeConfig {
            grid_size: size,
            seed: Some(seed),
            ..LifeConfig::default()
        };
        LifeEngine::from_config(&config).unwrap()
    }

    fn recorder(engine: &mut LifeEngine) -> Rc<RefCell<Vec<EngineEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        engine.subscribe(move |event: &EngineEvent| sink.borrow_mut().push(*event));
        events
    }

    #[test]
    fn test_new_engine_is_stopped_with_one_entry() {
        let engine = LifeEngine::new(10);
        assert_eq!(engine.run_state(), RunState::Stopped);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.grid().size(), 10);
    }

    #[test]
    fn test_blinker_period_two() {
        let mut engine = LifeEngine::from_grid(blinker());
        engine.step();
        assert_eq!(engine.grid().rows(), vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]);
        engine.step();
        assert_eq!(engine.grid(), &blinker());
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_step_grows_history() {
        let mut engine = seeded(8, 3);
        for expected in 2..=6 {
            engine.step();
            assert_eq!(engine.history().len(), expected);
        }
    }

    #[test]
    fn test_undo_restores_pre_step_grid() {
        let mut engine = seeded(12, 11);
        let before = engine.snapshot();
        engine.step();
        assert!(engine.undo());
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_undo_restores_new_top_of_history() {
        let mut engine = seeded(12, 5);
        let mut boards = vec![engine.snapshot()];
        for _ in 0..4 {
            engine.step();
            boards.push(engine.snapshot());
        }
        assert_eq!(engine.history().len(), 5);

        // history holds [g0, g0, g1, g2, g3]; each undo drops the top and shows the next one down
        let expected = [(2, &boards[2]), (1, &boards[1]), (0, &boards[0]), (0, &boards[0])];
        for (generation, board) in expected {
            assert!(engine.undo());
            assert_eq!(engine.grid(), board);
            assert_eq!(engine.generation(), generation);
        }
        assert_eq!(engine.history().len(), 1);
        assert!(!engine.undo());
    }

    #[test]
    fn test_two_steps_then_undo_returns_to_start() {
        let mut engine = LifeEngine::from_grid(blinker());
        engine.step();
        engine.step();
        assert!(engine.undo());
        assert_eq!(engine.grid(), &blinker());
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn test_undo_at_oldest_state_is_noop() {
        let mut engine = seeded(6, 9);
        let before = engine.snapshot();
        assert!(!engine.undo());
        assert!(!engine.undo());
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_start_pause_idempotent() {
        let mut engine = seeded(4, 1);
        let events = recorder(&mut engine);
        engine.start();
        engine.start();
        assert!(engine.is_running());
        engine.pause();
        engine.pause();
        assert_eq!(engine.run_state(), RunState::Stopped);
        assert_eq!(*events.borrow(), vec![EngineEvent::Started, EngineEvent::Paused]);
    }

    #[test]
    fn test_step_and_undo_keep_run_state() {
        let mut engine = seeded(5, 2);
        engine.start();
        engine.step();
        engine.undo();
        assert!(engine.is_running());
    }

    #[test]
    fn test_reset_stops_and_truncates_history() {
        let mut engine = seeded(9, 21);
        let events = recorder(&mut engine);
        engine.start();
        engine.step();
        engine.step();
        engine.reset();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.run_state(), RunState::Stopped);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.grid().size(), 9);
        assert_eq!(
            *events.borrow(),
            vec![
                EngineEvent::Started,
                EngineEvent::Stepped { generation: 1 },
                EngineEvent::Stepped { generation: 2 },
                EngineEvent::Paused,
                EngineEvent::Initialized { size: 9 },
                EngineEvent::Reset,
            ]
        );
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = seeded(16, 77);
        let mut b = seeded(16, 77);
        assert_eq!(a.grid(), b.grid());
        a.step();
        b.step();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_history_limit_caps_undo() {
        let config = LifeConfig {
            grid_size: 8,
            seed: Some(4),
            history_limit: Some(3),
            ..LifeConfig::default()
        };
        let mut engine = LifeEngine::from_config(&config).unwrap();
        let initial = engine.snapshot();
        for _ in 0..10 {
            engine.step();
        }
        assert_eq!(engine.history().undoable(), 3);
        let mut undone = 0;
        while engine.undo() {
            undone += 1;
        }
        assert_eq!(undone, 3);
        assert_eq!(engine.grid(), &initial);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut engine = LifeEngine::from_grid(blinker());
        engine.apply(Command::Step);
        engine.apply(Command::Start);
        assert!(engine.is_running());
        engine.apply(Command::Undo);
        assert_eq!(engine.grid(), &blinker());
        engine.apply(Command::Pause);
        assert!(!engine.is_running());
        engine.apply(Command::Reset);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = LifeConfig { grid_size: 0, ..LifeConfig::default() };
        assert!(LifeEngine::from_config(&config).is_err());
    }
}
