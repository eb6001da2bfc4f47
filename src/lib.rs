//! Rally Pong - a two-paddle court game with an AI opponent and power-ups
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, paddles, power-ups, scoring, game state)
//! - `renderer`: Snapshot consumers (headless text HUD)
//! - `audio`: Cue playback sinks with silent fallback
//! - `platform`: Input sources and frame pacing
//! - `settings`: Data-driven game tuning loaded from JSON

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Court dimensions
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Pixels per tick while a movement key is held
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Gap between the court edge and a paddle's outer face
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Per-axis speed after a reset (pixels per tick)
    pub const BALL_BASE_SPEED: f32 = 5.0;
    /// Per-axis speed clamp
    pub const BALL_MAX_SPEED: f32 = 15.0;
    /// Horizontal speed-up applied on every paddle return
    pub const PADDLE_RETURN_BOOST: f32 = 1.1;
    /// Vertical nudge when a centered hit would flatten the trajectory
    pub const FLAT_HIT_NUDGE: f32 = 1.05;

    /// First side to reach this many points wins
    pub const WINNING_SCORE: u32 = 5;

    /// AI opponent tuning
    pub const AI_DIFFICULTY: f32 = 0.08;
    pub const AI_MAX_SPEED: f32 = 6.0;
    pub const AI_ERROR_CHANCE: f64 = 0.1;
    pub const AI_ERROR_RANGE: f32 = 80.0;

    /// Power-up tuning
    pub const POWERUP_SIZE: f32 = 30.0;
    /// Per-tick spawn probability (about one every five seconds at 60 Hz)
    pub const POWERUP_SPAWN_CHANCE: f64 = 1.0 / 300.0;
    /// Width of the spawn band centered on the court
    pub const POWERUP_BAND_WIDTH: f32 = 400.0;
    /// Distance the spawn band keeps from the top and bottom walls
    pub const POWERUP_EDGE_INSET: f32 = 60.0;
    /// Seconds an uncollected power-up stays on the field
    pub const POWERUP_VISIBLE_SECS: f32 = 7.0;
    /// Seconds a collected effect lasts
    pub const POWERUP_EFFECT_SECS: f32 = 5.0;
    pub const ENLARGE_FACTOR: f32 = 1.6;
    pub const SHRINK_FACTOR: f32 = 0.6;
    /// Per-axis ball speed while a Speed effect is active
    pub const SPEED_EFFECT_MAGNITUDE: f32 = 8.0;

    /// Number of score history entries shown on the HUD
    pub const HISTORY_DISPLAY_LEN: usize = 5;
}

/// Give `value` the magnitude `magnitude`, keeping its sign (zero counts as positive)
#[inline]
pub fn with_magnitude(value: f32, magnitude: f32) -> f32 {
    if value < 0.0 { -magnitude } else { magnitude }
}

/// Apply [`with_magnitude`] to both axes of a velocity
#[inline]
pub fn vec_with_magnitude(vel: Vec2, magnitude: f32) -> Vec2 {
    Vec2::new(
        with_magnitude(vel.x, magnitude),
        with_magnitude(vel.y, magnitude),
    )
}

/// Clamp each axis of a velocity to `[-max, max]`
#[inline]
pub fn clamp_axes(vel: Vec2, max: f32) -> Vec2 {
    vel.clamp(Vec2::splat(-max), Vec2::splat(max))
}
