//! Brick Pong - a single-screen Pong/Breakout hybrid
//!
//! Core modules:
//! - `sim`: Game state, the controller state machine and the host seam
//! - `settings`: Data-driven game configuration
//! - `replay`: Scripted sessions for the headless runner
//! - `error`: Setup and configuration failures

pub mod error;
pub mod replay;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SetupError};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (scene is centered on the origin)
    pub const ARENA_WIDTH: f32 = 750.0;
    pub const ARENA_HEIGHT: f32 = 1334.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    /// Distance from the arena bottom edge to the paddle center
    pub const PADDLE_BOTTOM_OFFSET: f32 = 100.0;

    /// Ball defaults (square collider)
    pub const BALL_SIZE: f32 = 30.0;

    /// Brick row
    pub const NUMBER_OF_BRICKS: u32 = 6;
    pub const BRICK_HEIGHT: f32 = 25.0;
    /// Distance from the arena top edge to the brick row center
    pub const BRICK_TOP_OFFSET: f32 = 100.0;

    /// Magnitude of each impulse component applied at launch
    pub const LAUNCH_IMPULSE: f32 = 10.0;

    /// Round-over modal texts
    pub const MODAL_TITLE: &str = "Game Over";
    pub const MODAL_ACTION: &str = "Okay";
    pub const WIN_MESSAGE: &str = "You won :)";
    pub const LOSS_MESSAGE: &str = "You lost :(";
}

/// Axis-aligned containment test for a box centered at `center`
#[inline]
pub fn rect_contains(center: Vec2, size: Vec2, point: Vec2) -> bool {
    let half = size / 2.0;
    point.x >= center.x - half.x
        && point.x <= center.x + half.x
        && point.y >= center.y - half.y
        && point.y <= center.y + half.y
}
