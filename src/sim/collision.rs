//! Axis-aligned collision geometry
//!
//! Everything on the court is a rectangle. Overlap is strict: rectangles that
//! only share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y * 0.5
    }

    /// Strict overlap test
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Edge detector for a contact that may persist over several ticks
///
/// Reports `true` only on the tick the contact begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactEdge {
    touching: bool,
}

impl ContactEdge {
    /// Feed this tick's overlap state, returns whether contact just started
    pub fn update(&mut self, touching: bool) -> bool {
        let started = touching && !self.touching;
        self.touching = touching;
        started
    }

    pub fn clear(&mut self) {
        self.touching = false;
    }
}
