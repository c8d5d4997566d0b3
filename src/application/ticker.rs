use std::time::Duration;

use super::LifeEngine;

/// Upper bound on generations fired in one frame after a long stall.
pub const MAX_CATCH_UP: u32 = 4;

/// Ticker drives `step()` at a fixed cadence from frame delta times.
///
/// It owns the only timer state. Pending time is discarded whenever the engine
/// is stopped or has been restarted since the last call, so every start waits
/// a full interval before the first step.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: f32,
    pending: f32,
    epoch: Option<u64>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32(),
            pending: 0.0,
            epoch: None,
        }
    }

    /// Feed `delta_time` seconds; returns how many generations were stepped.
    pub fn advance(&mut self, engine: &mut LifeEngine, delta_time: f32) -> u32 {
        if !engine.is_running() {
            self.pending = 0.0;
            self.epoch = None;
            return 0;
        }
        if self.epoch != Some(engine.run_epoch()) {
            self.pending = 0.0;
            self.epoch = Some(engine.run_epoch());
        }

        self.pending += delta_time.max(0.0);
        let mut fired = 0;
        while self.pending >= self.interval && fired < MAX_CATCH_UP {
            self.pending -= self.interval;
            engine.step();
            fired += 1;
        }
        if fired == MAX_CATCH_UP {
            self.pending = self.pending.min(self.interval);
        }
        fired
    }
}
