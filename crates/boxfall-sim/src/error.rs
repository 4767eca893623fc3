use boxfall_core::enums::ComponentTag;
use thiserror::Error;

use crate::assets::AssetError;

/// Failures while building or editing a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity `{0}` already exists")]
    DuplicateEntity(String),

    #[error("entity `{entity}` has more than one `{tag}` component")]
    DuplicateComponent { entity: String, tag: ComponentTag },

    #[error("failed to load sprite for entity `{entity}`: {source}")]
    Asset {
        entity: String,
        #[source]
        source: AssetError,
    },

    #[error("invalid scene definition: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Invalid simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target fps must be finite and in (0, 10000], got {0}")]
    InvalidFps(f64),

    #[error("fixed step must be finite and at least 0.1 ms, got {0}")]
    InvalidFrameTime(f64),

    #[error("gravity must be finite, got {0}")]
    InvalidGravity(f32),

    #[error("max steps per frame must be at least 1")]
    ZeroStepCap,

    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}
