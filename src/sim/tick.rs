//! Fixed timestep simulation tick
//!
//! Order within a Playing tick: paddles, ball, power-ups, scoring, win check.
//! The clock is sampled once and that instant is shared by every stage.

use super::ai::AiPolicy;
use super::machine;
use super::paddle::{self, MoveKeys};
use super::physics;
use super::powerup;
use super::snapshot::{Snapshot, TickReport};
use super::state::{GameEvent, GameState, Side, World};

/// Key state for a single tick
///
/// Movement fields are held keys; the rest are one-shot presses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    /// Alternate key set, only read when the AI is off
    pub right_up: bool,
    pub right_down: bool,
    /// Some key went down this tick
    pub any_key: bool,
    pub pause: bool,
    pub reset: bool,
    /// Cosmetic, the simulation ignores it
    pub cycle_theme: bool,
    /// Handled by the frame loop
    pub quit: bool,
}

impl TickInput {
    pub fn left_keys(&self) -> MoveKeys {
        MoveKeys {
            up: self.left_up,
            down: self.left_down,
        }
    }

    pub fn right_keys(&self) -> MoveKeys {
        MoveKeys {
            up: self.right_up,
            down: self.right_down,
        }
    }
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, input: &TickInput) -> TickReport {
    let mut events = Vec::new();

    if machine::apply_commands(world, input) == GameState::Playing {
        simulate(world, input, &mut events);
    }

    world.check_invariants();

    TickReport {
        snapshot: Snapshot::capture(world),
        events,
    }
}

fn simulate(world: &mut World, input: &TickInput, events: &mut Vec<GameEvent>) {
    let now = world.clock.advance();
    let speed = world.settings.paddle_speed;
    let court_height = world.settings.court_height;

    paddle::drive_human(
        &mut world.paddles[Side::Left.index()],
        input.left_keys(),
        speed,
        court_height,
    );
    if world.settings.ai.enabled {
        let policy = AiPolicy::from_settings(&world.settings);
        let ball_center_y = world.ball.center_y();
        paddle::drive_ai(
            &mut world.paddles[Side::Right.index()],
            &policy,
            ball_center_y,
            court_height,
            &mut world.rng,
        );
    } else {
        paddle::drive_human(
            &mut world.paddles[Side::Right.index()],
            input.right_keys(),
            speed,
            court_height,
        );
    }

    let scorer = physics::step_ball(world, events);

    powerup::step_powerups(world, now, events);

    if let Some(scorer) = scorer {
        let entry = world.scores.record(scorer, now);
        log::info!("{entry} at {:.1}s", entry.timestamp.as_secs());
        events.push(GameEvent::ScoreEvent {
            scorer,
            left_score: entry.left_score,
            right_score: entry.right_score,
        });
        machine::check_for_winner(world, events);
    }
}
