//! Simulation constants and tuning parameters.

/// Default fixed-step rate (steps per simulated second).
pub const TARGET_FPS: f64 = 60.0;

/// Milliseconds per fixed step at the default rate.
pub const FRAME_TIME_MS: f64 = 1000.0 / TARGET_FPS;

/// Shortest fixed step accepted (ms). Caps the step rate at 10 kHz.
pub const MIN_FRAME_TIME_MS: f64 = 0.1;

/// Downward acceleration per unit of mass (px/s² per mass unit).
/// Positive Y points down the screen.
pub const GRAVITY: f32 = 9.81;

// --- Demo scene ---

/// Viewport used by the headless host when none is given.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

/// Player body size.
pub const PLAYER_WIDTH: f32 = 10.0;
pub const PLAYER_HEIGHT: f32 = 25.0;

/// Player speed limits (px/s).
pub const PLAYER_MAX_SPEED_X: f32 = 750.0;
pub const PLAYER_MAX_SPEED_Y: f32 = 500.0;

/// Horizontal run speed and jump impulse for controllable bodies.
pub const PLAYER_CONTROL_SPEED: f32 = 1000.0;

/// Gravity mass multiplier for the player.
pub const PLAYER_MASS: f32 = 80.0;

// --- Scatter scenes ---

/// Floor thickness for generated scenes.
pub const SCATTER_FLOOR_HEIGHT: f32 = 20.0;

/// Crate edge length range for generated scenes.
pub const SCATTER_CRATE_MIN: f32 = 6.0;
pub const SCATTER_CRATE_MAX: f32 = 24.0;

/// Initial horizontal speed range for generated crates (px/s).
pub const SCATTER_MAX_DRIFT: f32 = 120.0;

/// Mass range for generated crates.
pub const SCATTER_MASS_MIN: f32 = 20.0;
pub const SCATTER_MASS_MAX: f32 = 100.0;

/// Terminal fall speed for generated crates (px/s).
pub const SCATTER_MAX_FALL_SPEED: f32 = 600.0;
