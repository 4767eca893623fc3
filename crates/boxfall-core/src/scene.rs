//! Serializable scene definitions.
//!
//! A scene is an ordered list of entities, each an id plus a list of
//! tagged component definitions. The simulation turns these into live
//! components; sprite sources are resolved by the asset loader at that
//! point.

use serde::{Deserialize, Serialize};

use crate::enums::{ColliderKind, ComponentTag};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDef {
    pub entities: Vec<EntityDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDef {
    pub id: String,
    pub components: Vec<ComponentDef>,
}

/// One component, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComponentDef {
    Position {
        x: f32,
        y: f32,
    },
    Velocity {
        x: f32,
        y: f32,
        /// Omitted limits are unbounded.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_x: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_y: Option<f32>,
    },
    Dimensions {
        width: f32,
        height: f32,
    },
    Collider {
        kind: ColliderKind,
    },
    Gravity {
        mass: f32,
    },
    Controllable {
        speed: f32,
    },
    Sprite {
        /// Asset key passed to the image loader.
        source: String,
    },
}

impl ComponentDef {
    pub fn tag(&self) -> ComponentTag {
        match self {
            ComponentDef::Position { .. } => ComponentTag::Position,
            ComponentDef::Velocity { .. } => ComponentTag::Velocity,
            ComponentDef::Dimensions { .. } => ComponentTag::Dimensions,
            ComponentDef::Collider { .. } => ComponentTag::Collider,
            ComponentDef::Gravity { .. } => ComponentTag::Gravity,
            ComponentDef::Controllable { .. } => ComponentTag::Controllable,
            ComponentDef::Sprite { .. } => ComponentTag::Sprite,
        }
    }
}

impl SceneDef {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl EntityDef {
    pub fn new(id: impl Into<String>, components: Vec<ComponentDef>) -> Self {
        Self {
            id: id.into(),
            components,
        }
    }
}
