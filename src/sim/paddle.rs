//! Paddle control
//!
//! Human paddles move a fixed amount per tick while a key is held; the AI
//! paddle follows [`AiPolicy`]. Both end clamped to the court.

use rand::Rng;

use super::ai::AiPolicy;
use super::state::Paddle;

/// Held movement keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
}

impl MoveKeys {
    /// Per-tick velocity for a human paddle (both keys cancel out)
    pub fn velocity(self, paddle_speed: f32) -> f32 {
        let mut dy = 0.0;
        if self.up {
            dy -= paddle_speed;
        }
        if self.down {
            dy += paddle_speed;
        }
        dy
    }
}

/// Move a human paddle from its held keys
pub fn drive_human(paddle: &mut Paddle, keys: MoveKeys, paddle_speed: f32, court_height: f32) {
    paddle.shift(keys.velocity(paddle_speed), court_height);
}

/// Move an AI paddle toward the ball
pub fn drive_ai(
    paddle: &mut Paddle,
    policy: &AiPolicy,
    ball_center_y: f32,
    court_height: f32,
    rng: &mut impl Rng,
) {
    let dy = policy.velocity(ball_center_y, paddle.center_y(), rng);
    paddle.shift(dy, court_height);
}
