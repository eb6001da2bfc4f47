//! Computer opponent
//!
//! Chases the ball's vertical center with a proportional step, capped at a
//! maximum speed, and occasionally aims at a perturbed target so it can miss.

use rand::Rng;

use crate::settings::Settings;

/// Tuning for the computer-controlled paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiPolicy {
    /// Human paddle speed the AI step is scaled from
    pub paddle_speed: f32,
    pub difficulty: f32,
    pub max_speed: f32,
    pub error_chance: f64,
    pub error_range: f32,
}

impl AiPolicy {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            paddle_speed: settings.paddle_speed,
            difficulty: settings.ai.difficulty,
            max_speed: settings.ai.max_speed,
            error_chance: settings.ai.error_chance,
            error_range: settings.ai.error_range,
        }
    }

    /// Where the AI wants its paddle center this tick
    pub fn target_y(&self, ball_center_y: f32, rng: &mut impl Rng) -> f32 {
        if self.error_chance > 0.0 && rng.random_bool(self.error_chance) {
            let range = self.error_range;
            ball_center_y + rng.random_range(-range..=range)
        } else {
            ball_center_y
        }
    }

    /// Unsigned distance to move toward `target_y`
    pub fn step(&self, target_y: f32, paddle_center_y: f32) -> f32 {
        let distance = (target_y - paddle_center_y).abs();
        (self.paddle_speed * self.difficulty * distance)
            .min(self.max_speed)
            .min(distance)
    }

    /// Signed vertical velocity for this tick (never overshoots the target)
    pub fn velocity(&self, ball_center_y: f32, paddle_center_y: f32, rng: &mut impl Rng) -> f32 {
        let target = self.target_y(ball_center_y, rng);
        let step = self.step(target, paddle_center_y);
        if target > paddle_center_y {
            step
        } else if target < paddle_center_y {
            -step
        } else {
            0.0
        }
    }
}
