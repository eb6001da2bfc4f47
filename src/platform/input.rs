//! Input sources
//!
//! Raw device polling belongs to the host; anything that can turn the last
//! snapshot into a [`TickInput`] can drive the game.

use crate::sim::{GameState, Side, Snapshot, TickInput};

/// Producer of per-tick key state
pub trait InputSource {
    /// Key state for the next tick, given what the player last saw
    fn poll(&mut self, last: &Snapshot) -> TickInput;
}

/// Unattended player for the left paddle
///
/// Presses a key on the title screen, tracks the ball during play and asks to
/// quit once it has seen `matches` games end.
#[derive(Debug, Clone)]
pub struct AutoPilot {
    /// Ignore offsets smaller than this so the paddle does not jitter
    pub dead_zone: f32,
    matches: u32,
    finished: u32,
    in_game_over: bool,
}

impl AutoPilot {
    pub fn new(matches: u32) -> Self {
        Self {
            dead_zone: 10.0,
            matches: matches.max(1),
            finished: 0,
            in_game_over: false,
        }
    }

    pub fn finished(&self) -> u32 {
        self.finished
    }
}

impl Default for AutoPilot {
    fn default() -> Self {
        Self::new(1)
    }
}

impl InputSource for AutoPilot {
    fn poll(&mut self, last: &Snapshot) -> TickInput {
        match last.state {
            GameState::Start | GameState::Paused => {
                self.in_game_over = false;
                TickInput {
                    any_key: true,
                    pause: last.state == GameState::Paused,
                    ..Default::default()
                }
            }
            GameState::Playing => {
                let paddle = last.paddles[Side::Left.index()].rect.center_y();
                let ball = last.ball.center_y();
                TickInput {
                    left_up: ball < paddle - self.dead_zone,
                    left_down: ball > paddle + self.dead_zone,
                    ..Default::default()
                }
            }
            GameState::GameOver => {
                if !self.in_game_over {
                    self.in_game_over = true;
                    self.finished += 1;
                    log::info!("Autopilot saw match {} end", self.finished);
                }
                if self.finished >= self.matches {
                    TickInput {
                        quit: true,
                        ..Default::default()
                    }
                } else {
                    TickInput {
                        any_key: true,
                        ..Default::default()
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::World;
    use glam::Vec2;

    #[test]
    fn test_presses_key_on_start() {
        let world = World::new(Settings::default(), 1);
        let mut pilot = AutoPilot::default();
        let input = pilot.poll(&Snapshot::capture(&world));
        assert!(input.any_key);
        assert!(!input.pause);
    }

    #[test]
    fn test_tracks_ball() {
        let mut world = World::new(Settings::default(), 1);
        world.state = GameState::Playing;
        world.ball.pos = Vec2::new(400.0, 10.0);
        let mut pilot = AutoPilot::default();
        let input = pilot.poll(&Snapshot::capture(&world));
        assert!(input.left_up && !input.left_down);

        world.ball.pos = Vec2::new(400.0, 500.0);
        let input = pilot.poll(&Snapshot::capture(&world));
        assert!(input.left_down && !input.left_up);
    }

    #[test]
    fn test_quits_after_last_match() {
        let mut world = World::new(Settings::default(), 1);
        world.state = GameState::GameOver;
        let mut pilot = AutoPilot::new(2);
        let snapshot = Snapshot::capture(&world);

        let input = pilot.poll(&snapshot);
        assert!(input.any_key && !input.quit);
        assert_eq!(pilot.finished(), 1);

        world.state = GameState::Start;
        pilot.poll(&Snapshot::capture(&world));
        world.state = GameState::GameOver;
        let input = pilot.poll(&Snapshot::capture(&world));
        assert!(input.quit);
        assert_eq!(pilot.finished(), 2);
    }
}
