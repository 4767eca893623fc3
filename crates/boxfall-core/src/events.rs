//! Events emitted by the simulation for host feedback.

use serde::{Deserialize, Serialize};

use crate::enums::ColliderKind;

/// Discrete simulation events, drained by the host after each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A dynamic body overlapped an obstacle during a collision pass.
    Contact {
        entity: String,
        obstacle: String,
        obstacle_kind: ColliderKind,
        /// Axes on which the body was snapped and its velocity zeroed.
        resolved_x: bool,
        resolved_y: bool,
        tick: u64,
    },
    /// The scheduler dropped accumulated time to avoid a catch-up spiral.
    StepsDropped { dropped: u32, tick: u64 },
}
