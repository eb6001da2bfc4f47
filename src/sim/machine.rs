//! Match lifecycle: Start → Playing ⇄ Paused → GameOver → Start

use super::state::{GameEvent, GameState, World};
use super::tick::TickInput;

/// Apply this tick's one-shot commands to the match state
///
/// At most one transition happens per tick, so the key that leaves Start or
/// GameOver is not also read as pause or reset. Returns the new state.
pub fn apply_commands(world: &mut World, input: &TickInput) -> GameState {
    let next = match world.state {
        GameState::Start if input.any_key => Some(GameState::Playing),
        GameState::Playing if input.pause => Some(GameState::Paused),
        GameState::Playing if input.reset => {
            world.full_reset();
            Some(GameState::Start)
        }
        GameState::Paused if input.pause => Some(GameState::Playing),
        GameState::GameOver if input.any_key => {
            world.full_reset();
            Some(GameState::Start)
        }
        _ => None,
    };

    if let Some(next) = next {
        log::info!("{:?} -> {:?}", world.state, next);
        world.state = next;
    }
    world.state
}

/// End the match if either side reached the winning score
pub fn check_for_winner(world: &mut World, events: &mut Vec<GameEvent>) {
    if world.state != GameState::Playing {
        return;
    }
    if let Some(winner) = world.scores.winner(world.settings.winning_score) {
        let (left, right) = world.scores.scores();
        log::info!("{winner} wins {left}-{right}");
        world.winner = Some(winner);
        world.state = GameState::GameOver;
        events.push(GameEvent::GameOver { winner });
    }
}
