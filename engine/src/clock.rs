/// Fixed-timestep accumulator, in milliseconds.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    unprocessed_ms: f64,
    step_ms: f64,
}

impl SimulationClock {
    pub fn new(step_ms: f64) -> Self {
        Self {
            unprocessed_ms: 0.0,
            step_ms,
        }
    }

    pub fn from_hz(hz: u32) -> Self {
        Self::new(1000.0 / hz.max(1) as f64)
    }

    #[inline]
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    #[inline]
    pub fn unprocessed_ms(&self) -> f64 {
        self.unprocessed_ms
    }

    pub fn advance(&mut self, elapsed_ms: u64) {
        self.unprocessed_ms += elapsed_ms as f64;
    }

    /// Takes one step off the backlog if strictly more than a step is
    /// waiting. Returns whether a simulation step is due.
    pub fn consume_step(&mut self) -> bool {
        if self.unprocessed_ms > self.step_ms {
            self.unprocessed_ms -= self.step_ms;
            true
        } else {
            false
        }
    }
}

/// Frames counted over one reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpsWindow {
    pub frames: u32,
    /// Wall time the window actually covered.
    pub window_ms: u64,
}

impl FpsWindow {
    pub fn fps(&self) -> f64 {
        self.frames as f64 * 1000.0 / self.window_ms.max(1) as f64
    }

    /// Average per-frame duration. `None` when nothing was rendered.
    pub fn ms_per_frame(&self) -> Option<f64> {
        (self.frames > 0).then(|| self.window_ms as f64 / self.frames as f64)
    }
}

#[derive(Debug, Clone)]
pub struct FrameStats {
    frames: u32,
    window_ms: u64,
    period_ms: u64,
}

impl FrameStats {
    pub fn new(period_ms: u64) -> Self {
        Self {
            frames: 0,
            window_ms: 0,
            period_ms: period_ms.max(1),
        }
    }

    #[inline]
    pub fn frame_rendered(&mut self) {
        self.frames += 1;
    }

    #[inline]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Adds elapsed wall time. Once the window is full, returns its frame
    /// count and starts a new window.
    pub fn accumulate(&mut self, elapsed_ms: u64) -> Option<FpsWindow> {
        self.window_ms += elapsed_ms;
        if self.window_ms < self.period_ms {
            return None;
        }

        let window = FpsWindow {
            frames: self.frames,
            window_ms: self.window_ms,
        };
        self.frames = 0;
        self.window_ms = 0;
        Some(window)
    }
}
