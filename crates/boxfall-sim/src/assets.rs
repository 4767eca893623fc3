//! Image loading collaborator.
//!
//! Sprites receive their image data once, when the entity is built.
//! The simulation never touches the pixels afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use boxfall_core::components::{ImageData, ImageHandle};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no image registered under `{0}`")]
    NotFound(String),

    #[error("image `{name}` is malformed: {reason}")]
    Malformed { name: String, reason: String },
}

/// Supplies decoded images by key.
pub trait AssetSource {
    fn load_image(&self, name: &str) -> Result<ImageHandle, AssetError>;
}

/// In-memory image table. Used by the headless host and by tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryAssets {
    images: HashMap<String, ImageHandle>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register decoded pixels under `name`. Rejects buffers whose size
    /// does not match `width * height * 4`.
    pub fn insert(&mut self, name: impl Into<String>, image: ImageData) -> Result<(), AssetError> {
        let name = name.into();
        let expected = image.width as usize * image.height as usize * 4;
        if image.rgba.len() != expected {
            return Err(AssetError::Malformed {
                reason: format!("expected {expected} bytes, got {}", image.rgba.len()),
                name,
            });
        }
        self.images.insert(name, Arc::new(image));
        Ok(())
    }

    /// Register a solid-colour placeholder.
    pub fn insert_placeholder(&mut self, name: impl Into<String>, width: u32, height: u32, rgba: [u8; 4]) {
        let pixels = (width as usize) * (height as usize);
        let image = ImageData {
            width,
            height,
            rgba: rgba.repeat(pixels),
        };
        self.images.insert(name.into(), Arc::new(image));
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl AssetSource for MemoryAssets {
    fn load_image(&self, name: &str) -> Result<ImageHandle, AssetError> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }
}
