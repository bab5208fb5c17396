//! Frame clock: clamped delta time over an injected timebase

/// Longest delta a single frame may integrate, in seconds. A frame after a
/// stall (background window, debugger pause) advances by at most this much
/// instead of teleporting every particle.
pub const MAX_DELTA: f32 = 0.1;

/// Produces per-frame deltas from a monotonic `f64`-seconds timestamp
/// stream. The caller supplies `now`, so tests drive the clock without
/// touching wall time.
pub struct FrameClock {
    prev: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { prev: None }
    }

    /// Advance to `now`, returning the clamped delta in seconds.
    /// The first tick after creation or `reset` returns 0.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.prev {
            Some(prev) => ((now - prev) as f32).clamp(0.0, MAX_DELTA),
            None => 0.0,
        };
        self.prev = Some(now);
        dt
    }

    /// Forget the previous tick so the next one returns 0. Called when the
    /// loop restarts after idling, so idle wall time is never integrated.
    pub fn reset(&mut self) {
        self.prev = None;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
