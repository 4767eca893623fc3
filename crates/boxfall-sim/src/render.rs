//! Render collaborator seam.
//!
//! The simulation never draws. Once per host frame, after all fixed steps
//! have run, the host hands the latest snapshot to a `RenderSink`.

use thiserror::Error;

use boxfall_core::state::{SceneSnapshot, Viewport};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no render context available")]
    NoContext,
    #[error("render output failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait RenderSink {
    /// The drawable area changed size.
    fn resize(&mut self, viewport: Viewport);

    /// Draw one snapshot. Called once per host frame.
    fn render(&mut self, snapshot: &SceneSnapshot) -> Result<(), RenderError>;
}

/// Sink that keeps every snapshot it is given.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub viewport: Viewport,
    pub frames: Vec<SceneSnapshot>,
}

impl RenderSink for RecordingSink {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn render(&mut self, snapshot: &SceneSnapshot) -> Result<(), RenderError> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}
