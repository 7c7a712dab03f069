use std::time::Instant;

/// Seconds between frame-rate reports
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Wall-clock delta tracker. Only used for reporting; camera motion runs on
/// the fixed step in [`crate::camera::FIXED_DT`].
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame rate over a reporting interval
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: f32,
    frame_count: u32,
    elapsed: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frame_count: 0,
            elapsed: 0.0,
        }
    }

    /// Record one frame. Returns the averaged rate once per interval.
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed < self.interval {
            return None;
        }

        let fps = self.frame_count as f32 / self.elapsed;
        self.frame_count = 0;
        self.elapsed = 0.0;
        Some(fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(FPS_UPDATE_INTERVAL)
    }
}
