//! Render snapshot: the read-only scene view handed to the renderer once per frame.

use serde::{Deserialize, Serialize};

use crate::enums::LoopState;
use crate::types::{SimTime, Vec2};

/// Drawable surface size reported by the window host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Scene state after all fixed steps of a frame have run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub state: LoopState,
    pub entities: Vec<EntityView>,
}

/// One drawable entity: id, top-left corner and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: String,
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

impl SceneSnapshot {
    pub fn entity(&self, id: &str) -> Option<&EntityView> {
        self.entities.iter().find(|e| e.id == id)
    }
}
