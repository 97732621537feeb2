//! Game simulation module
//!
//! All gameplay decisions live here. Motion, contact detection and drawing
//! belong to the host engine behind [`Host`]:
//! - Seeded RNG only
//! - Every transition happens inside a host event
//! - No rendering or platform dependencies

pub mod controller;
pub mod headless;
pub mod host;
pub mod state;

pub use controller::GameController;
pub use headless::{HeadlessNode, HeadlessScene};
pub use host::{Body, BodyShape, Host, Modal, NodeName, NodeSpec, SceneNode};
pub use state::{
    Ball, Brick, BrickColor, BrickSpec, Category, Contact, EntityId, GameEvent, GamePhase,
    GameState, Paddle, RoundOutcome, generate_bricks,
};
