//! Ball integration, wall and paddle bounces, and goal detection

use glam::Vec2;

use super::state::{GameEvent, Side, World};
use crate::clamp_axes;
use crate::consts::{FLAT_HIT_NUDGE, PADDLE_RETURN_BOOST};

/// Rebound velocity after the ball meets a paddle
///
/// The offset is relative to the configured (base) paddle half-height and is
/// not clamped: an enlarged paddle can produce offsets beyond ±1, which the
/// final speed clamp brings back into range.
pub fn paddle_bounce(
    vel: Vec2,
    ball_center_y: f32,
    paddle_center_y: f32,
    base_paddle_height: f32,
    base_speed: f32,
    max_speed: f32,
) -> Vec2 {
    let offset = (ball_center_y - paddle_center_y) / (base_paddle_height / 2.0);
    let vx = -vel.x * PADDLE_RETURN_BOOST;
    let mut vy = base_speed * offset;
    if vy == 0.0 {
        // Dead-center hit would send the ball flat forever
        vy = vel.y * FLAT_HIT_NUDGE;
    }
    clamp_axes(Vec2::new(vx, vy), max_speed)
}

/// Advance the ball one tick
///
/// Returns the side that scored, if the ball left the court. On a score the
/// ball is already re-served when this returns.
pub fn step_ball(world: &mut World, events: &mut Vec<GameEvent>) -> Option<Side> {
    let court = world.court();
    let max_speed = world.settings.ball_max_speed;

    world.ball.pos += world.ball.vel;

    // Top/bottom walls: any contact reflects vy
    let rect = world.ball.rect();
    if rect.top() <= 0.0 || rect.bottom() >= court.y {
        world.ball.vel.y = -world.ball.vel.y;
    }

    // Paddles: respond once per approach
    for side in Side::BOTH {
        let paddle = &world.paddles[side.index()];
        let touching = world.ball.rect().overlaps(&paddle.rect());
        if world.contacts[side.index()].update(touching) {
            world.ball.vel = paddle_bounce(
                world.ball.vel,
                world.ball.center_y(),
                paddle.center_y(),
                world.settings.paddle_height,
                world.settings.ball_base_speed,
                max_speed,
            );
            log::trace!("Paddle hit on {side}, vel={:?}", world.ball.vel);
            events.push(GameEvent::PaddleHit { side });
        }
    }

    world.ball.vel = clamp_axes(world.ball.vel, max_speed);

    let rect = world.ball.rect();
    let scorer = if rect.left() <= 0.0 {
        Some(Side::Right)
    } else if rect.right() >= court.x {
        Some(Side::Left)
    } else {
        None
    };

    if scorer.is_some() {
        world.serve_ball();
    }
    scorer
}
