//! Platform abstraction layer
//!
//! Handles the pieces that live outside the simulation:
//! - Input sources producing per-tick key state
//! - Frame pacing and frame-rate measurement

pub mod input;
pub mod time;

pub use input::{AutoPilot, InputSource};
pub use time::{FpsCounter, FrameLimiter};
