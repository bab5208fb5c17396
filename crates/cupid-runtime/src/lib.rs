//! Cupid Runtime - frame timing and loop gating
//!
//! The overlay only renders while hearts are live. [`FrameClock`] turns a
//! monotonic timestamp stream into clamped per-frame deltas; [`LoopDriver`]
//! tells the host when to schedule its next per-frame callback and when to
//! park the loop entirely.

pub mod clock;
pub mod driver;

pub use clock::{FrameClock, MAX_DELTA};
pub use driver::LoopDriver;
