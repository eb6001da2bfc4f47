//! Read-only view of the world handed to renderers and audio each tick

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::powerup::{Effect, PowerUp};
use super::score::ScoreEntry;
use super::state::{GameEvent, GameState, Side, World};
use crate::consts::HISTORY_DISPLAY_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub side: Side,
    pub rect: Rect,
    pub height: f32,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Simulation ticks elapsed (only Playing ticks count)
    pub tick: u64,
    pub state: GameState,
    pub paused: bool,
    /// Indexed by [`Side::index`]
    pub paddles: [PaddleView; 2],
    pub ball: Rect,
    pub left_score: u32,
    pub right_score: u32,
    pub powerup: Option<PowerUp>,
    pub effect: Effect,
    pub winner: Option<Side>,
    /// Most recent points, newest first
    pub recent_scores: Vec<ScoreEntry>,
}

impl Snapshot {
    pub fn capture(world: &World) -> Self {
        let view = |side: Side| {
            let paddle = world.paddle(side);
            PaddleView {
                side,
                rect: paddle.rect(),
                height: paddle.height,
            }
        };
        let (left_score, right_score) = world.scores.scores();

        Self {
            tick: world.now().ticks(),
            state: world.state,
            paused: world.state == GameState::Paused,
            paddles: [view(Side::Left), view(Side::Right)],
            ball: world.ball.rect(),
            left_score,
            right_score,
            powerup: world.powerups.live,
            effect: world.powerups.effect,
            winner: world.winner,
            recent_scores: world.scores.recent(HISTORY_DISPLAY_LEN),
        }
    }
}

/// Result of one `tick`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub snapshot: Snapshot,
    pub events: Vec<GameEvent>,
}
