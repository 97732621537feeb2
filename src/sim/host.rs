//! Scene/physics host seam
//!
//! The controller never integrates motion, detects contacts or draws
//! anything. It talks to whatever engine hosts the scene through [`Host`],
//! and receives that engine's input and contact callbacks as
//! [`GameEvent`](super::GameEvent)s.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{BrickColor, Category, EntityId};

/// Scene nodes the controller requires at setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeName {
    /// The scene itself; its size is the arena
    Arena,
    Paddle,
    Ball,
    ScoreLabel,
}

impl NodeName {
    pub const REQUIRED: [NodeName; 4] = [
        NodeName::Arena,
        NodeName::Paddle,
        NodeName::Ball,
        NodeName::ScoreLabel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeName::Arena => "arena",
            NodeName::Paddle => "bottomPaddle",
            NodeName::Ball => "ball",
            NodeName::ScoreLabel => "bottomScoreLabel",
        }
    }
}

/// A node found in the host scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneNode {
    pub entity: EntityId,
    pub position: Vec2,
    pub size: Vec2,
}

/// Collider geometry, in the owning node's frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyShape {
    Rect { size: Vec2 },
    /// Closed loop around a rectangle centered on the node
    EdgeLoop { size: Vec2 },
    Edge { from: Vec2, to: Vec2 },
}

/// Physics body attached to a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub shape: BodyShape,
    pub dynamic: bool,
    pub restitution: f32,
    pub friction: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub allows_rotation: bool,
    pub category: Category,
    /// Categories whose contacts with this body are reported
    pub contacts: Vec<Category>,
}

impl Body {
    /// Immovable collider with default material
    pub fn fixed(shape: BodyShape, category: Category) -> Self {
        Self {
            shape,
            dynamic: false,
            restitution: 0.2,
            friction: 0.2,
            linear_damping: 0.1,
            angular_damping: 0.1,
            allows_rotation: true,
            category,
            contacts: Vec::new(),
        }
    }

    /// Perfectly elastic, frictionless, undamped, non-rotating body
    pub fn bouncy(shape: BodyShape, category: Category) -> Self {
        Self {
            shape,
            dynamic: true,
            restitution: 1.0,
            friction: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            allows_rotation: false,
            category,
            contacts: Vec::new(),
        }
    }

    pub fn reporting(mut self, contacts: &[Category]) -> Self {
        self.contacts = contacts.to_vec();
        self
    }
}

/// A node the controller asks the host to create
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub position: Vec2,
    pub size: Vec2,
    /// Fill color, `None` for invisible nodes
    pub color: Option<BrickColor>,
    pub body: Body,
}

/// Round-over prompt with exactly one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modal {
    pub title: String,
    pub message: String,
    pub action: String,
}

/// Everything the controller needs from the engine hosting the scene
pub trait Host {
    fn find_node(&self, name: NodeName) -> Option<SceneNode>;

    fn attach_body(&mut self, entity: EntityId, body: Body);

    fn spawn_node(&mut self, spec: NodeSpec) -> EntityId;

    fn remove_entity(&mut self, entity: EntityId);

    fn set_position(&mut self, entity: EntityId, position: Vec2);

    fn apply_impulse(&mut self, entity: EntityId, impulse: Vec2);

    fn set_velocity(&mut self, entity: EntityId, linear: Vec2, angular: f32);

    /// Pause or resume both simulation and rendering
    fn set_paused(&mut self, paused: bool);

    fn set_label(&mut self, entity: EntityId, text: &str);

    /// Show `modal`; the host reports its action as
    /// [`GameEvent::ModalAcknowledged`](super::GameEvent::ModalAcknowledged).
    fn present_modal(&mut self, modal: Modal);
}
