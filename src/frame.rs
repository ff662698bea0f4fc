/// Timing of a single animation frame, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameContext {
    pub timestamp: f64,
    pub elapsed: f64,
}

impl FrameContext {
    pub fn new(timestamp: f64, elapsed: f64) -> Self {
        Self { timestamp, elapsed }
    }
}

/// Owned by the driving loop; remembers the previous frame's timestamp.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed time is zero on the first frame and never negative.
    pub fn tick(&mut self, timestamp: f64) -> FrameContext {
        let elapsed = self
            .previous
            .map_or(0.0, |previous| (timestamp - previous).max(0.0));
        self.previous = Some(timestamp);
        FrameContext::new(timestamp, elapsed)
    }

    pub fn tick_micros(&mut self, frame_time: i64) -> FrameContext {
        self.tick(frame_time as f64 / 1000.0)
    }
}
