//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a collider takes part in collision resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColliderKind {
    /// Immovable obstacle that blocks dynamic bodies.
    Rigid,
    /// Immovable obstacle that only reports overlap (trigger volume).
    Static,
    /// Moving body resolved against rigid obstacles.
    Dynamic,
}

impl ColliderKind {
    /// Rigid and static colliders act as obstacles for dynamic bodies.
    pub fn is_obstacle(self) -> bool {
        !matches!(self, ColliderKind::Dynamic)
    }
}

/// Discriminant for every component kind an entity can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentTag {
    Position,
    Velocity,
    Dimensions,
    Collider,
    Gravity,
    Controllable,
    Sprite,
}

impl ComponentTag {
    pub const ALL: [ComponentTag; 7] = [
        ComponentTag::Position,
        ComponentTag::Velocity,
        ComponentTag::Dimensions,
        ComponentTag::Collider,
        ComponentTag::Gravity,
        ComponentTag::Controllable,
        ComponentTag::Sprite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentTag::Position => "position",
            ComponentTag::Velocity => "velocity",
            ComponentTag::Dimensions => "dimensions",
            ComponentTag::Collider => "collider",
            ComponentTag::Gravity => "gravity",
            ComponentTag::Controllable => "controllable",
            ComponentTag::Sprite => "sprite",
        }
    }
}

impl fmt::Display for ComponentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduler state, toggled by host focus/blur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopState {
    #[default]
    Running,
    Paused,
}
