//! Gated frame loop: callbacks run only while particles are live

use crate::clock::FrameClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Idle,
    Running,
}

/// Decides when the host should schedule the next per-frame callback.
///
/// The driver never touches the platform itself; `wake` and `end_frame`
/// return whether the caller should request one more callback. While idle
/// nothing is requested, so a drained overlay has zero per-frame cost.
pub struct LoopDriver {
    clock: FrameClock,
    state: LoopState,
}

impl LoopDriver {
    pub fn new() -> Self {
        Self {
            clock: FrameClock::new(),
            state: LoopState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Event-side hook: an emitter may have added particles. Returns true
    /// if the caller should request a callback, i.e. the loop was idle.
    /// The clock restarts so the first frame back integrates zero time.
    pub fn wake(&mut self) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        self.state = LoopState::Running;
        self.clock.reset();
        log::trace!("frame loop woken");
        true
    }

    /// Top of each frame callback. Returns the clamped delta in seconds.
    pub fn begin_frame(&mut self, now: f64) -> f32 {
        self.clock.tick(now)
    }

    /// Bottom of each frame callback. `any_live` is whether particles
    /// survived this frame; returns true if the caller should request the
    /// next callback.
    pub fn end_frame(&mut self, any_live: bool) -> bool {
        if any_live {
            self.state = LoopState::Running;
            return true;
        }
        if self.state == LoopState::Running {
            log::trace!("frame loop idle");
        }
        self.state = LoopState::Idle;
        false
    }
}

impl Default for LoopDriver {
    fn default() -> Self {
        Self::new()
    }
}
