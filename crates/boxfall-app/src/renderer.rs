//! Text renderer for the headless host.
//!
//! Writes one line per frame: either the snapshot as JSON, or a compact
//! human-readable summary of the entities inside the viewport.

use std::io::Write;

use boxfall_core::state::{EntityView, SceneSnapshot, Viewport};
use boxfall_sim::render::{RenderError, RenderSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// `serde_json` snapshot per line.
    JsonLines,
    /// `tick N [state] id@(x,y) ...`, on-screen entities only.
    Plain,
}

pub struct TextRenderer<W: Write> {
    out: W,
    format: TextFormat,
    viewport: Viewport,
}

impl<W: Write> TextRenderer<W> {
    /// Fails with `NoContext` when the viewport has no drawable area.
    pub fn new(out: W, format: TextFormat, viewport: Viewport) -> Result<Self, RenderError> {
        if viewport.is_empty() {
            return Err(RenderError::NoContext);
        }
        Ok(Self {
            out,
            format,
            viewport,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn on_screen(&self, entity: &EntityView) -> bool {
        entity.position.x + entity.width >= 0.0
            && entity.position.y + entity.height >= 0.0
            && entity.position.x <= self.viewport.width as f32
            && entity.position.y <= self.viewport.height as f32
    }

    fn write_plain(&mut self, snapshot: &SceneSnapshot) -> Result<(), RenderError> {
        let mut line = format!("tick {} [{:?}]", snapshot.time.tick, snapshot.state);
        let mut hidden = 0;
        for entity in &snapshot.entities {
            if self.on_screen(entity) {
                line.push_str(&format!(
                    " {}@({:.1},{:.1})",
                    entity.id, entity.position.x, entity.position.y
                ));
            } else {
                hidden += 1;
            }
        }
        if hidden > 0 {
            line.push_str(&format!(" +{hidden} offscreen"));
        }
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

impl<W: Write> RenderSink for TextRenderer<W> {
    fn resize(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            log::warn!("ignoring resize to empty viewport {viewport:?}");
            return;
        }
        log::debug!("viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    fn render(&mut self, snapshot: &SceneSnapshot) -> Result<(), RenderError> {
        match self.format {
            TextFormat::JsonLines => {
                serde_json::to_writer(&mut self.out, snapshot).map_err(std::io::Error::from)?;
                writeln!(self.out)?;
            }
            TextFormat::Plain => self.write_plain(snapshot)?,
        }
        self.out.flush()?;
        Ok(())
    }
}
