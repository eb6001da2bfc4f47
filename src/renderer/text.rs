//! Headless HUD renderer
//!
//! Writes a status line to the log whenever something a player would notice
//! changes: the state, the score, or the power-up on the field.

use super::Renderer;
use crate::sim::{GameState, PowerUpKind, Side, Snapshot, winner_banner};

/// The parts of a snapshot that trigger a new HUD line
#[derive(Debug, Clone, PartialEq)]
struct HudKey {
    state: GameState,
    scores: (u32, u32),
    powerup: Option<PowerUpKind>,
    effect: Option<(PowerUpKind, Side)>,
}

impl HudKey {
    fn of(snapshot: &Snapshot) -> Self {
        Self {
            state: snapshot.state,
            scores: (snapshot.left_score, snapshot.right_score),
            powerup: snapshot.powerup.map(|p| p.kind),
            effect: snapshot.effect.kind().zip(snapshot.effect.target()),
        }
    }
}

/// Logs HUD lines through the `log` facade
#[derive(Debug, Default)]
pub struct TextRenderer {
    last: Option<HudKey>,
    lines: u64,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of HUD lines written so far
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Text a player would see for this snapshot
    pub fn hud_line(snapshot: &Snapshot, fps: Option<u32>) -> String {
        let mut line = match snapshot.state {
            GameState::Start => "Rally Pong - press any key to start".to_string(),
            GameState::Paused => "PAUSED - press P to resume".to_string(),
            GameState::GameOver => match snapshot.winner {
                Some(winner) => format!("{} - press any key to restart", winner_banner(winner)),
                None => "Game over".to_string(),
            },
            GameState::Playing => format!("{} - {}", snapshot.left_score, snapshot.right_score),
        };

        if let Some(powerup) = &snapshot.powerup {
            line.push_str(&format!(" | {:?} on field", powerup.kind));
        }
        if let (Some(kind), Some(target)) = (snapshot.effect.kind(), snapshot.effect.target()) {
            line.push_str(&format!(" | {kind:?} on {target}"));
        }
        if let Some(latest) = snapshot.recent_scores.first() {
            line.push_str(&format!(" | {latest}"));
        }
        if let Some(fps) = fps {
            line.push_str(&format!(" | FPS: {fps}"));
        }
        line
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, snapshot: &Snapshot, fps: Option<u32>) {
        let key = HudKey::of(snapshot);
        if self.last.as_ref() == Some(&key) {
            return;
        }
        log::info!("{}", Self::hud_line(snapshot, fps));
        self.last = Some(key);
        self.lines += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{SimInstant, World};

    #[test]
    fn test_only_changes_are_written() {
        let mut world = World::new(Settings::default(), 3);
        let mut renderer = TextRenderer::new();
        renderer.render(&Snapshot::capture(&world), None);
        renderer.render(&Snapshot::capture(&world), None);
        assert_eq!(renderer.lines(), 1);

        world.state = GameState::Playing;
        world.scores.record(Side::Left, SimInstant(1));
        renderer.render(&Snapshot::capture(&world), Some(60));
        assert_eq!(renderer.lines(), 2);
    }

    #[test]
    fn test_hud_text() {
        let mut world = World::new(Settings::default(), 3);
        world.state = GameState::Playing;
        world.scores.record(Side::Right, SimInstant(1));
        let line = TextRenderer::hud_line(&Snapshot::capture(&world), Some(59));
        assert_eq!(line, "0 - 1 | Right scored! 0-1 | FPS: 59");

        world.state = GameState::GameOver;
        world.winner = Some(Side::Right);
        let line = TextRenderer::hud_line(&Snapshot::capture(&world), None);
        assert!(line.starts_with("Right Player Wins!"));
    }
}
