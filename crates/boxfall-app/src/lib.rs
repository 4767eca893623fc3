//! boxfall headless host.
//!
//! Wires the simulation to a window-less host: a loop thread that feeds
//! frame timestamps to the engine, lifecycle and input events over a
//! channel, and a text renderer.

pub mod host;
pub mod renderer;
pub mod state;

pub use boxfall_core as core;
