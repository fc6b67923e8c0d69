//! Pong - a classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Frame simulation (ball physics, bounce tables, enemy AI, match flow)
//! - `game`: Host glue driving the simulation, audio cues and drawing
//! - `renderer`: Draw-command interface and CPU vertex tessellation
//! - `audio`: Sound cues and a procedural clip bank
//! - `settings` / `tuning`: User preferences and data-driven game balance

pub mod audio;
pub mod error;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::Game;
pub use settings::{Difficulty, Settings};
pub use tuning::Tuning;

use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Fixed logical resolution reported to the host
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Fixed simulation timestep (60 Hz, one tick per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Ball defaults (a square, in pixels)
    pub const BALL_SIZE: f32 = 20.0;
    /// Maximum ball speed in pixels per frame
    pub const BALL_MAX_SPEED: f32 = 15.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 110.0;
    /// Gap between a paddle and its screen edge
    pub const PADDLE_MARGIN: f32 = 70.0;
    pub const PLAYER_PADDLE_SPEED: f32 = 15.0;
    pub const ENEMY_PADDLE_SPEED: f32 = 12.0;

    /// First serve of a round travels at this fraction of max speed
    pub const SERVE_SPEED_FACTOR: f32 = 0.5;
    /// Hit acceleration: fraction of max speed on the first return...
    pub const HIT_SPEED_BASE: f32 = 0.6;
    /// ...growing by this much per volley
    pub const HIT_SPEED_PER_VOLLEY: f32 = 0.025;

    /// Enemy AI
    pub const AI_DEAD_ZONE: f32 = 10.0;
    pub const PATROL_TOLERANCE: f32 = 15.0;
    pub const PATROL_INTERVAL: u32 = 2;
    pub const FEINT_CHANCE: f64 = 0.1;

    pub const POINTS_TO_WIN: u32 = 10;
}

/// Uniform sample in `[min, max)`; returns `min` for an empty range
#[inline]
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..max)
}

/// Randomly `a` or `b`; `a` when they are equal
#[inline]
pub fn random_choice<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    if a == b || rng.random_bool(0.5) { a } else { b }
}
