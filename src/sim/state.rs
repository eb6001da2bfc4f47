//! Game state and core simulation types
//!
//! The whole simulation lives in one owned [`World`] that `tick` mutates.

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::{Clock, SimInstant};
use super::collision::{ContactEdge, Rect};
use super::powerup::{PowerUpKind, PowerUpManager};
use super::score::ScoreTracker;
use crate::settings::Settings;

/// Which end of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall match mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Title screen, waiting for any key
    Start,
    /// Active gameplay
    Playing,
    /// Simulation frozen until pause is pressed again
    Paused,
    /// Match decided, waiting for any key
    GameOver,
}

/// Discrete signals produced by a tick (for audio and visual feedback)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PaddleHit {
        side: Side,
    },
    ScoreEvent {
        scorer: Side,
        left_score: u32,
        right_score: u32,
    },
    PowerUpCollected {
        kind: PowerUpKind,
        target: Side,
    },
    PowerUpExpired {
        kind: PowerUpKind,
    },
    GameOver {
        winner: Side,
    },
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Fixed horizontal position of the left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    /// Current height (power-ups change it)
    pub height: f32,
}

impl Paddle {
    /// A paddle centered vertically at its side of the court
    pub fn new(side: Side, settings: &Settings) -> Self {
        let x = match side {
            Side::Left => settings.paddle_margin,
            Side::Right => settings.court_width - settings.paddle_margin - settings.paddle_width,
        };
        Self {
            side,
            x,
            y: (settings.court_height - settings.paddle_height) / 2.0,
            width: settings.paddle_width,
            height: settings.paddle_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Keep the paddle inside `[0, court_height]`
    pub fn clamp_to_court(&mut self, court_height: f32) {
        let max_top = (court_height - self.height).max(0.0);
        self.y = self.y.clamp(0.0, max_top);
    }

    /// Move vertically by `dy`, then clamp
    pub fn shift(&mut self, dy: f32, court_height: f32) {
        self.y += dy;
        self.clamp_to_court(court_height);
    }

    /// Change height around the current center, then clamp
    pub fn set_height(&mut self, height: f32, court_height: f32) {
        if (self.height - height).abs() <= f32::EPSILON {
            return;
        }
        let center = self.center_y();
        self.height = height;
        self.y = center - height / 2.0;
        self.clamp_to_court(court_height);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Put the ball at the court center heading in a random diagonal
    pub fn serve(&mut self, court: Vec2, base_speed: f32, rng: &mut impl Rng) {
        self.pos = (court - Vec2::splat(self.size)) / 2.0;
        let sx = if rng.random::<bool>() { 1.0 } else { -1.0 };
        let sy = if rng.random::<bool>() { 1.0 } else { -1.0 };
        self.vel = Vec2::new(base_speed * sx, base_speed * sy);
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub settings: Settings,
    pub state: GameState,
    pub clock: Clock,
    /// Seeded RNG shared by the AI and power-up spawner
    pub rng: Pcg32,
    /// Indexed by [`Side::index`]
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    /// Previous-tick ball overlap per paddle
    pub contacts: [ContactEdge; 2],
    pub powerups: PowerUpManager,
    pub scores: ScoreTracker,
    /// Set when the match ends
    pub winner: Option<Side>,
}

impl World {
    /// Create a world on the start screen with the given seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let mut world = Self {
            state: GameState::Start,
            clock: Clock::new(),
            rng: Pcg32::seed_from_u64(seed),
            paddles: [
                Paddle::new(Side::Left, &settings),
                Paddle::new(Side::Right, &settings),
            ],
            ball: Ball::new(settings.ball_size),
            contacts: [ContactEdge::default(); 2],
            powerups: PowerUpManager::default(),
            scores: ScoreTracker::new(),
            winner: None,
            settings,
        };
        world.serve_ball();
        world
    }

    #[inline]
    pub fn court(&self) -> Vec2 {
        Vec2::new(self.settings.court_width, self.settings.court_height)
    }

    #[inline]
    pub fn now(&self) -> SimInstant {
        self.clock.now()
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    /// Recenter the ball with a fresh random direction
    pub fn serve_ball(&mut self) {
        let court = self.court();
        self.ball
            .serve(court, self.settings.ball_base_speed, &mut self.rng);
        for contact in &mut self.contacts {
            contact.clear();
        }
    }

    /// Restore both paddles to their configured height
    pub fn restore_paddle_heights(&mut self) {
        let (height, court_height) = (self.settings.paddle_height, self.settings.court_height);
        for paddle in &mut self.paddles {
            paddle.set_height(height, court_height);
        }
    }

    /// Clear scores, history, power-ups and winner, and re-serve the ball
    pub fn full_reset(&mut self) {
        self.scores.reset();
        self.winner = None;
        self.powerups.reset();
        self.restore_paddle_heights();
        self.serve_ball();
        log::info!("Match reset");
    }

    /// Check the clamped invariants (debug builds only)
    pub fn check_invariants(&self) {
        let court_height = self.settings.court_height;
        for paddle in &self.paddles {
            debug_assert!(
                paddle.top() >= 0.0 && paddle.bottom() <= court_height + 1e-3,
                "{} paddle out of court: top={} bottom={}",
                paddle.side,
                paddle.top(),
                paddle.bottom()
            );
        }
        let max = self.settings.ball_max_speed;
        debug_assert!(
            self.ball.vel.x.abs() <= max && self.ball.vel.y.abs() <= max,
            "ball speed out of bounds: {:?}",
            self.ball.vel
        );
    }
}
