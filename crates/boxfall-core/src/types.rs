//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

pub use glam::Vec2;

/// Axis-aligned rectangle derived from a position and dimensions.
///
/// Screen coordinates: `x` grows right, `y` grows down, so the top edge
/// is `y` and the bottom edge is `y + height`. Boxes are computed on the
/// fly by systems and never stored on entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_corner(corner: Vec2, width: f32, height: f32) -> Self {
        Self::new(corner.x, corner.y, width, height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive overlap test: boxes that share an edge intersect.
    /// A body resting exactly on a surface therefore stays in contact.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of fixed steps executed.
    pub tick: u64,
    /// Simulated time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one step of `step_ms` milliseconds.
    pub fn advance(&mut self, step_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += step_ms;
    }
}
