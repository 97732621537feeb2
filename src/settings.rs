//! Game settings
//!
//! Every value defaults to the compiled-in constants in [`crate::consts`];
//! a JSON file may override any subset of them.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Tunable game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Scene geometry ===
    // Node sizes for `HeadlessScene::standard`; a live host supplies its own
    // and `GameController::initialize` checks those.
    pub arena_width: f32,
    pub arena_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the arena bottom edge to the paddle center
    pub paddle_bottom_offset: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Per-axis magnitude of the launch impulse
    pub launch_impulse: f32,

    // === Bricks ===
    pub number_of_bricks: u32,
    pub brick_height: f32,
    /// Distance from the arena top edge to the brick row center
    pub brick_top_offset: f32,

    // === Round-over modal ===
    pub modal_title: String,
    pub modal_action: String,
    pub win_message: String,
    pub loss_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            ball_size: BALL_SIZE,
            launch_impulse: LAUNCH_IMPULSE,

            number_of_bricks: NUMBER_OF_BRICKS,
            brick_height: BRICK_HEIGHT,
            brick_top_offset: BRICK_TOP_OFFSET,

            modal_title: MODAL_TITLE.to_string(),
            modal_action: MODAL_ACTION.to_string(),
            win_message: WIN_MESSAGE.to_string(),
            loss_message: LOSS_MESSAGE.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check that the configuration can describe a playable arena
    pub fn validate(&self) -> Result<(), SettingsError> {
        let dimensions = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
            ("ball_size", self.ball_size),
            ("launch_impulse", self.launch_impulse),
            ("brick_height", self.brick_height),
            ("brick_top_offset", self.brick_top_offset),
        ];
        for (field, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::InvalidDimension { field });
            }
        }

        if self.number_of_bricks == 0 {
            return Err(SettingsError::NoBricks);
        }
        if self.paddle_width >= self.arena_width {
            return Err(SettingsError::PaddleTooWide);
        }
        if self.paddle_bottom_offset >= self.arena_height / 2.0 {
            return Err(SettingsError::PaddleOutsideLowerHalf);
        }
        if self.brick_top_offset >= self.arena_height {
            return Err(SettingsError::BrickRowOutsideArena);
        }
        Ok(())
    }

    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn ball_size(&self) -> Vec2 {
        Vec2::splat(self.ball_size)
    }

    /// The two equally likely launch impulses
    pub fn launch_impulses(&self) -> [Vec2; 2] {
        let m = self.launch_impulse;
        [Vec2::new(m, m), Vec2::new(-m, -m)]
    }
}
