//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod ai;
pub mod clock;
pub mod collision;
pub mod machine;
pub mod paddle;
pub mod physics;
pub mod powerup;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use ai::AiPolicy;
pub use clock::{Clock, SimInstant};
pub use collision::{ContactEdge, Rect};
pub use paddle::MoveKeys;
pub use powerup::{Effect, PowerUp, PowerUpKind, PowerUpManager};
pub use score::{ScoreEntry, ScoreTracker, winner_banner};
pub use snapshot::{PaddleView, Snapshot, TickReport};
pub use state::{Ball, GameEvent, GameState, Paddle, Side, World};
pub use tick::{TickInput, tick};
