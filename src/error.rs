//! Setup and configuration failures
//!
//! Gameplay itself has no recoverable errors: unexpected touches and contact
//! pairs are ignored. Only loading settings and wiring up the scene can fail.

use std::fmt;

use crate::sim::NodeName;

/// Invalid or unreadable [`Settings`](crate::Settings)
#[derive(Debug)]
pub enum SettingsError {
    /// A size or offset is zero, negative or not finite
    InvalidDimension { field: &'static str },
    /// The brick row must contain at least one brick
    NoBricks,
    /// The paddle could never move (or fit) inside the arena
    PaddleTooWide,
    /// The paddle home would not be in the lower half of the arena
    PaddleOutsideLowerHalf,
    /// The brick row would sit at or below the arena bottom edge
    BrickRowOutsideArena,
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidDimension { field } => {
                write!(f, "setting `{}` must be a positive finite number", field)
            }
            SettingsError::NoBricks => write!(f, "number_of_bricks must be at least 1"),
            SettingsError::PaddleTooWide => {
                write!(f, "paddle must be narrower than the arena")
            }
            SettingsError::PaddleOutsideLowerHalf => {
                write!(f, "paddle_bottom_offset must be less than half the arena height")
            }
            SettingsError::BrickRowOutsideArena => {
                write!(f, "brick_top_offset places the brick row below the arena bottom")
            }
            SettingsError::Io(e) => write!(f, "failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// The scene handed to the controller cannot host a game
#[derive(Debug)]
pub enum SetupError {
    /// A required scene node was not found by name
    MissingNode(NodeName),
    /// A required node has a zero, negative or non-finite size
    InvalidNodeSize(NodeName),
    /// The host paddle is not strictly narrower than the host arena
    PaddleTooWide { paddle: f32, arena: f32 },
    /// `paddle_bottom_offset` would put the paddle outside the lower half,
    /// where drags are not followed
    PaddleOutsideLowerHalf { offset: f32, arena_height: f32 },
    /// `brick_top_offset` would put the brick row at or below the arena bottom
    BrickRowOutsideArena { offset: f32, arena_height: f32 },
    InvalidSettings(SettingsError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingNode(name) => {
                write!(f, "scene has no node named `{}`", name.as_str())
            }
            SetupError::InvalidNodeSize(name) => {
                write!(f, "scene node `{}` has an invalid size", name.as_str())
            }
            SetupError::PaddleTooWide { paddle, arena } => {
                write!(f, "paddle width {} does not fit arena width {}", paddle, arena)
            }
            SetupError::PaddleOutsideLowerHalf {
                offset,
                arena_height,
            } => write!(
                f,
                "paddle offset {} is not in the lower half of an arena {} high",
                offset, arena_height
            ),
            SetupError::BrickRowOutsideArena {
                offset,
                arena_height,
            } => write!(
                f,
                "brick offset {} is outside an arena {} high",
                offset, arena_height
            ),
            SetupError::InvalidSettings(e) => write!(f, "invalid settings: {}", e),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::InvalidSettings(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SettingsError> for SetupError {
    fn from(e: SettingsError) -> Self {
        SetupError::InvalidSettings(e)
    }
}
