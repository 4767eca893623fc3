//! Simulation engine for boxfall.
//!
//! Owns the hecs ECS world, runs the movement, gravity and collision
//! systems at a fixed timestep, and produces `SceneSnapshot`s for the
//! renderer.

pub mod accessor;
pub mod assets;
pub mod config;
pub mod engine;
pub mod error;
pub mod render;
pub mod scene;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use boxfall_core as core;
pub use config::SimConfig;
pub use engine::Simulation;
pub use error::SceneError;
pub use scene::Scene;
