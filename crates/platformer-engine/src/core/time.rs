/// Maximum number of ticks a single frame may trigger.
const MAX_STEPS_PER_FRAME: u32 = 10;

/// Fixed timestep accumulator, in milliseconds.
/// Ensures game logic runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt_ms: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt_ms: f32) -> Self {
        Self {
            dt_ms,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_ms: f32) -> u32 {
        self.accumulator += frame_ms;
        // Cap to prevent spiral of death
        self.accumulator = self.accumulator.min(self.dt_ms * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt_ms) as u32;
        self.accumulator -= steps as f32 * self.dt_ms;
        steps
    }

    /// Drop any partially accumulated time (used on restart).
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// The fixed delta time in milliseconds.
    pub fn dt(&self) -> f32 {
        self.dt_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(20.0);
        let steps = ts.accumulate(20.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(20.0);
        let steps = ts.accumulate(12.0);
        assert_eq!(steps, 0);
        let steps = ts.accumulate(10.0); // over one tick total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(20.0);
        let steps = ts.accumulate(1000.0); // 50 ticks worth, but capped at 10
        assert_eq!(steps, 10);
    }

    #[test]
    fn reset_discards_partial_tick() {
        let mut ts = FixedTimestep::new(20.0);
        ts.accumulate(15.0);
        ts.reset();
        assert_eq!(ts.accumulate(10.0), 0);
    }
}
