//! Events sent from the host's main thread to the loop thread.

use boxfall_core::commands::PlayerCommand;
use boxfall_core::state::{SceneSnapshot, Viewport};

/// Window lifecycle and input, delivered in order to the loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Window regained focus: resume at the current host time.
    Focus,
    /// Window lost focus: pause.
    Blur,
    /// Drawable area changed size.
    Resize(Viewport),
    /// Player input, forwarded to the simulation.
    Input(PlayerCommand),
    /// Stop the loop thread gracefully.
    Shutdown,
}

/// What the loop thread did before it stopped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostSummary {
    /// Host frames processed.
    pub frames: u64,
    /// Fixed steps executed across all frames.
    pub steps: u64,
    /// Simulation events drained during the run.
    pub events: u64,
    /// Last snapshot rendered.
    pub last_snapshot: SceneSnapshot,
}
