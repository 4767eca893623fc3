//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next fixed-step boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Set horizontal intent: -1 = left, 0 = stop, 1 = right.
    /// Values outside [-1, 1] are clamped.
    Move { horizontal: f32 },
    /// Request a jump. Honoured on the next step if the body is at rest vertically.
    Jump,
}

/// Input state consumed by the movement system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    /// Horizontal intent in [-1, 1].
    pub horizontal: f32,
    /// Pending jump request, cleared after one step.
    pub jump: bool,
}

impl ControlState {
    pub fn apply(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Move { horizontal } => {
                self.horizontal = if horizontal.is_finite() {
                    horizontal.clamp(-1.0, 1.0)
                } else {
                    0.0
                };
            }
            PlayerCommand::Jump => self.jump = true,
        }
    }
}
