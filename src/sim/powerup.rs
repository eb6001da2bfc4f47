//! Power-up spawning, collection, effects and expiry
//!
//! At most one power-up is on the field and at most one effect is active. The
//! slot is only freed for a new spawn once the effect has expired.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::clock::{SimInstant, secs_to_ticks};
use super::collision::Rect;
use super::state::{GameEvent, Side, World};
use crate::settings::PowerUpSettings;
use crate::vec_with_magnitude;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Target paddle grows
    Enlarge,
    /// Target paddle shrinks
    Shrink,
    /// Ball is held at a higher fixed speed
    Speed,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Enlarge,
        PowerUpKind::Shrink,
        PowerUpKind::Speed,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A pickup waiting on the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    pub spawned_at: SimInstant,
}

/// The active power-up effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    #[default]
    None,
    Enlarge {
        target: Side,
        expires_at: SimInstant,
    },
    Shrink {
        target: Side,
        expires_at: SimInstant,
    },
    Speed {
        target: Side,
        expires_at: SimInstant,
    },
}

impl Effect {
    pub fn new(kind: PowerUpKind, target: Side, expires_at: SimInstant) -> Self {
        match kind {
            PowerUpKind::Enlarge => Effect::Enlarge { target, expires_at },
            PowerUpKind::Shrink => Effect::Shrink { target, expires_at },
            PowerUpKind::Speed => Effect::Speed { target, expires_at },
        }
    }

    pub fn kind(&self) -> Option<PowerUpKind> {
        match self {
            Effect::None => None,
            Effect::Enlarge { .. } => Some(PowerUpKind::Enlarge),
            Effect::Shrink { .. } => Some(PowerUpKind::Shrink),
            Effect::Speed { .. } => Some(PowerUpKind::Speed),
        }
    }

    pub fn target(&self) -> Option<Side> {
        match *self {
            Effect::None => None,
            Effect::Enlarge { target, .. }
            | Effect::Shrink { target, .. }
            | Effect::Speed { target, .. } => Some(target),
        }
    }

    pub fn expires_at(&self) -> Option<SimInstant> {
        match *self {
            Effect::None => None,
            Effect::Enlarge { expires_at, .. }
            | Effect::Shrink { expires_at, .. }
            | Effect::Speed { expires_at, .. } => Some(expires_at),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self, Effect::None)
    }
}

/// Live pickup plus active effect
#[derive(Debug, Clone, Default)]
pub struct PowerUpManager {
    pub live: Option<PowerUp>,
    pub effect: Effect,
}

impl PowerUpManager {
    /// Drop the live pickup and the effect without touching the world
    pub fn reset(&mut self) {
        self.live = None;
        self.effect = Effect::None;
    }

    /// A new power-up may spawn
    pub fn slot_free(&self) -> bool {
        self.live.is_none() && !self.effect.is_active()
    }
}

/// Paddle the effect of a pickup lands on, from the ball's travel direction
pub fn effect_target(ball_vel: Vec2) -> Side {
    if ball_vel.x >= 0.0 { Side::Left } else { Side::Right }
}

/// Random spawn rectangle inside the central band of the court
pub fn spawn_rect(court: Vec2, tuning: &PowerUpSettings, rng: &mut impl Rng) -> Rect {
    let size = tuning.size;
    let band = tuning.band_width.min(court.x);

    let x_min = (court.x - band) / 2.0;
    let x_max = (x_min + band - size).max(x_min);
    let y_min = tuning.edge_inset.min((court.y - size) / 2.0).max(0.0);
    let y_max = (court.y - tuning.edge_inset - size).max(y_min);

    let x = rng.random_range(x_min..=x_max);
    let y = rng.random_range(y_min..=y_max);
    Rect::new(x, y, size, size)
}

/// Run the power-up lifecycle for one tick
pub fn step_powerups(world: &mut World, now: SimInstant, events: &mut Vec<GameEvent>) {
    if !world.settings.powerups.enabled {
        return;
    }

    if let Some(expires_at) = world.powerups.effect.expires_at() {
        if now >= expires_at {
            expire_effect(world, events);
        }
    }

    remove_stale(world, now);

    if let Some(powerup) = world.powerups.live {
        if world.ball.rect().overlaps(&powerup.rect) {
            collect(world, powerup, now, events);
        }
    }

    apply_effect(world);

    let chance = world.settings.powerups.spawn_chance;
    if world.powerups.slot_free() && chance > 0.0 && world.rng.random_bool(chance) {
        let rect = spawn_rect(world.court(), &world.settings.powerups, &mut world.rng);
        let kind = PowerUpKind::random(&mut world.rng);
        log::debug!("Spawned {kind:?} power-up at ({:.0}, {:.0})", rect.pos.x, rect.pos.y);
        world.powerups.live = Some(PowerUp {
            rect,
            kind,
            spawned_at: now,
        });
    }
}

/// Remove a pickup that has been on the field too long
fn remove_stale(world: &mut World, now: SimInstant) {
    let visible = secs_to_ticks(world.settings.powerups.visible_secs);
    if let Some(powerup) = world.powerups.live {
        if now.ticks_since(powerup.spawned_at) >= visible {
            log::debug!("{:?} power-up expired uncollected", powerup.kind);
            world.powerups.live = None;
        }
    }
}

fn collect(world: &mut World, powerup: PowerUp, now: SimInstant, events: &mut Vec<GameEvent>) {
    let target = effect_target(world.ball.vel);
    let expires_at = now.after_secs(world.settings.powerups.effect_secs);
    world.powerups.live = None;
    world.powerups.effect = Effect::new(powerup.kind, target, expires_at);
    log::debug!(
        "{:?} collected for {target}, expires at tick {}",
        powerup.kind,
        expires_at.ticks()
    );
    events.push(GameEvent::PowerUpCollected {
        kind: powerup.kind,
        target,
    });
}

/// Re-assert the active effect (called every tick while it lasts)
fn apply_effect(world: &mut World) {
    let base = world.settings.paddle_height;
    let court_height = world.settings.court_height;
    let tuning = &world.settings.powerups;

    match world.powerups.effect {
        Effect::None => {}
        Effect::Enlarge { target, .. } => {
            let height = base * tuning.enlarge_factor;
            world.paddles[target.index()].set_height(height, court_height);
        }
        Effect::Shrink { target, .. } => {
            let height = base * tuning.shrink_factor;
            world.paddles[target.index()].set_height(height, court_height);
        }
        Effect::Speed { .. } => {
            world.ball.vel = vec_with_magnitude(world.ball.vel, tuning.speed_magnitude);
        }
    }
}

/// End the effect: default paddle heights and base ball speed, signs kept
fn expire_effect(world: &mut World, events: &mut Vec<GameEvent>) {
    let Some(kind) = world.powerups.effect.kind() else {
        return;
    };
    world.restore_paddle_heights();
    world.ball.vel = vec_with_magnitude(world.ball.vel, world.settings.ball_base_speed);
    world.powerups.effect = Effect::None;
    log::debug!("{kind:?} effect expired");
    events.push(GameEvent::PowerUpExpired { kind });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::state::GameState;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn world_without_spawns() -> World {
        let mut settings = Settings::default();
        settings.powerups.spawn_chance = 0.0;
        let mut world = World::new(settings, 77);
        world.state = GameState::Playing;
        world
    }

    /// Place a pickup right on top of the ball
    fn drop_on_ball(world: &mut World, kind: PowerUpKind, now: SimInstant) {
        world.powerups.live = Some(PowerUp {
            rect: world.ball.rect(),
            kind,
            spawned_at: now,
        });
    }

    #[test]
    fn test_effect_target_follows_ball_direction() {
        assert_eq!(effect_target(Vec2::new(5.0, 1.0)), Side::Left);
        assert_eq!(effect_target(Vec2::new(-5.0, 1.0)), Side::Right);
    }

    #[test]
    fn test_speed_effect_forces_magnitude_then_reverts() {
        let mut world = world_without_spawns();
        let mut events = Vec::new();
        let now = SimInstant(100);
        world.ball.vel = Vec2::new(-6.0, 4.0);
        drop_on_ball(&mut world, PowerUpKind::Speed, now);

        step_powerups(&mut world, now, &mut events);
        assert_eq!(world.ball.vel, Vec2::new(-8.0, 8.0));
        assert!(world.powerups.live.is_none());
        assert_eq!(
            events,
            vec![GameEvent::PowerUpCollected {
                kind: PowerUpKind::Speed,
                target: Side::Right
            }]
        );

        // Still forced near the end of the five seconds
        world.ball.vel = Vec2::new(6.6, -3.0);
        step_powerups(&mut world, SimInstant(399), &mut events);
        assert_eq!(world.ball.vel, Vec2::new(8.0, -8.0));

        step_powerups(&mut world, SimInstant(400), &mut events);
        assert_eq!(world.ball.vel, Vec2::new(5.0, -5.0));
        assert_eq!(world.powerups.effect, Effect::None);
        assert_eq!(
            events.last(),
            Some(&GameEvent::PowerUpExpired {
                kind: PowerUpKind::Speed
            })
        );
    }

    #[test]
    fn test_enlarge_and_shrink_resize_target() {
        let mut world = world_without_spawns();
        let mut events = Vec::new();
        world.ball.vel = Vec2::new(5.0, 5.0);
        drop_on_ball(&mut world, PowerUpKind::Enlarge, SimInstant(1));
        step_powerups(&mut world, SimInstant(1), &mut events);
        assert_eq!(world.paddle(Side::Left).height, PADDLE_HEIGHT * ENLARGE_FACTOR);
        assert_eq!(world.paddle(Side::Right).height, PADDLE_HEIGHT);

        step_powerups(&mut world, SimInstant(301), &mut events);
        assert_eq!(world.paddle(Side::Left).height, PADDLE_HEIGHT);

        world.ball.vel = Vec2::new(-5.0, 5.0);
        drop_on_ball(&mut world, PowerUpKind::Shrink, SimInstant(302));
        step_powerups(&mut world, SimInstant(302), &mut events);
        assert_eq!(world.paddle(Side::Right).height, PADDLE_HEIGHT * SHRINK_FACTOR);
    }

    #[test]
    fn test_enlarged_paddle_stays_in_court() {
        let mut world = world_without_spawns();
        let mut events = Vec::new();
        world.paddle_mut(Side::Left).y = COURT_HEIGHT - PADDLE_HEIGHT;
        world.ball.vel = Vec2::new(5.0, 5.0);
        drop_on_ball(&mut world, PowerUpKind::Enlarge, SimInstant(1));
        step_powerups(&mut world, SimInstant(1), &mut events);
        assert_eq!(world.paddle(Side::Left).bottom(), COURT_HEIGHT);
    }

    #[test]
    fn test_stale_powerup_is_removed_after_timeout() {
        let mut world = world_without_spawns();
        let mut events = Vec::new();
        world.powerups.live = Some(PowerUp {
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            kind: PowerUpKind::Shrink,
            spawned_at: SimInstant(10),
        });
        step_powerups(&mut world, SimInstant(10 + 419), &mut events);
        assert!(world.powerups.live.is_some());
        step_powerups(&mut world, SimInstant(10 + 420), &mut events);
        assert!(world.powerups.live.is_none());
        assert!(!world.powerups.effect.is_active());
        assert!(events.is_empty());
    }

    #[test]
    fn test_spawn_blocked_while_effect_active() {
        let mut settings = Settings::default();
        settings.powerups.spawn_chance = 1.0;
        let mut world = World::new(settings, 5);
        world.state = GameState::Playing;
        world.ball.pos = Vec2::new(-500.0, -500.0); // keep the ball away from pickups
        let mut events = Vec::new();

        world.powerups.effect = Effect::new(PowerUpKind::Enlarge, Side::Left, SimInstant(50));
        step_powerups(&mut world, SimInstant(1), &mut events);
        assert!(world.powerups.live.is_none());

        step_powerups(&mut world, SimInstant(50), &mut events);
        assert!(world.powerups.live.is_some());
        assert_eq!(world.powerups.live.map(|p| p.spawned_at), Some(SimInstant(50)));
    }

    #[test]
    fn test_spawn_rect_inside_bands() {
        let tuning = PowerUpSettings::default();
        let court = Vec2::new(COURT_WIDTH, COURT_HEIGHT);
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..500 {
            let rect = spawn_rect(court, &tuning, &mut rng);
            assert!(rect.left() >= 200.0 && rect.right() <= 600.0);
            assert!(rect.top() >= POWERUP_EDGE_INSET);
            assert!(rect.bottom() <= COURT_HEIGHT - POWERUP_EDGE_INSET);
        }
    }

    #[test]
    fn test_random_kind_covers_all() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(PowerUpKind::random(&mut rng));
        }
        assert_eq!(seen.len(), 3);
    }
}
