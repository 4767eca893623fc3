//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems, not
//! components; the few helpers here are pure accessors.

use std::sync::Arc;

use crate::enums::{ColliderKind, ComponentTag};
use crate::types::{BoundingBox, Vec2};

/// Location of the entity's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub current: Vec2,
    /// Value of `current` at the start of the running fixed step.
    /// Refreshed by the step driver before any system runs.
    pub previous: Vec2,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        let at = Vec2::new(x, y);
        Self {
            current: at,
            previous: at,
        }
    }

    /// Record the start-of-step position.
    pub fn snapshot(&mut self) {
        self.previous = self.current;
    }
}

/// Linear velocity in px/s with a per-axis speed limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub linear: Vec2,
    /// Maximum magnitude per axis. Infinite means unbounded.
    pub max: Vec2,
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            linear: Vec2::new(x, y),
            max: Vec2::splat(f32::INFINITY),
        }
    }

    pub fn with_max(mut self, max_x: f32, max_y: f32) -> Self {
        self.max = Vec2::new(max_x.abs(), max_y.abs());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Box anchored at `corner` with these dimensions.
    pub fn bounding_box(&self, corner: Vec2) -> BoundingBox {
        BoundingBox::from_corner(corner, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub kind: ColliderKind,
    /// Set during a collision pass when this collider overlaps another.
    /// Cleared at the start of every pass.
    pub is_colliding: bool,
}

impl Collider {
    pub fn new(kind: ColliderKind) -> Self {
        Self {
            kind,
            is_colliding: false,
        }
    }
}

/// Constant downward acceleration, scaled by `mass`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub mass: f32,
}

/// Marks an entity as driven by player input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controllable {
    /// Run speed and jump impulse (px/s).
    pub speed: f32,
}

/// Decoded image pixels, opaque to the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8.
    pub rgba: Vec<u8>,
}

pub type ImageHandle = Arc<ImageData>;

/// Image drawn for the entity. Supplied once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub image: ImageHandle,
}

/// Closed set of components accepted when building an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Position(Position),
    Velocity(Velocity),
    Dimensions(Dimensions),
    Collider(Collider),
    Gravity(Gravity),
    Controllable(Controllable),
    Sprite(Sprite),
}

impl Component {
    pub fn tag(&self) -> ComponentTag {
        match self {
            Component::Position(_) => ComponentTag::Position,
            Component::Velocity(_) => ComponentTag::Velocity,
            Component::Dimensions(_) => ComponentTag::Dimensions,
            Component::Collider(_) => ComponentTag::Collider,
            Component::Gravity(_) => ComponentTag::Gravity,
            Component::Controllable(_) => ComponentTag::Controllable,
            Component::Sprite(_) => ComponentTag::Sprite,
        }
    }
}

macro_rules! impl_from_component {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Component {
                fn from(value: $variant) -> Self {
                    Component::$variant(value)
                }
            }
        )*
    };
}

impl_from_component!(Position, Velocity, Dimensions, Collider, Gravity, Controllable, Sprite);
