/// Decides how many simulation ticks a rendered frame should run.
pub trait TickDriver {
    /// Report elapsed frame time. Returns the number of ticks to run now.
    fn advance(&mut self, frame_dt: f32) -> u32;
}

/// Fixed timestep accumulator.
/// Ensures game logic runs at a consistent rate regardless of frame time.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Most ticks a single frame may run before time is dropped.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self::with_max_steps(dt, 10)
    }

    pub fn with_max_steps(dt: f32, max_steps: u32) -> Self {
        assert!(dt > 0.0, "tick length must be positive");
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        // Cap to avoid a spiral of death after a long stall
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

impl TickDriver for FixedTimestep {
    fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulate(frame_dt)
    }
}

/// Deterministic driver for tests and replays: ignores wall time and runs exactly
/// the ticks queued with [`ManualTicks::queue`].
#[derive(Debug, Clone, Default)]
pub struct ManualTicks {
    queued: u32,
}

impl ManualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&mut self, ticks: u32) {
        self.queued += ticks;
    }

    pub fn queued(&self) -> u32 {
        self.queued
    }
}

impl TickDriver for ManualTicks {
    fn advance(&mut self, _frame_dt: f32) -> u32 {
        std::mem::take(&mut self.queued)
    }
}
