//! Snapshot consumers
//!
//! Drawing is the host's job; a renderer only ever sees the read-only
//! [`Snapshot`] produced by a tick.

pub mod text;

pub use text::TextRenderer;

use crate::sim::Snapshot;

/// Consumer of per-tick snapshots
pub trait Renderer {
    /// Present one frame. `fps` is the measured frame rate, if shown.
    fn render(&mut self, snapshot: &Snapshot, fps: Option<u32>);
}
