//! Core types and definitions for the boxfall simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, scene definitions, render snapshots, events,
//! and constants. It has no dependency on the ECS or any host runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod scene;
pub mod state;
pub mod types;
