//! In-memory scene host
//!
//! Records everything the controller asks of a host without simulating
//! motion. Contacts and touches are whatever the caller feeds the controller.

use std::collections::BTreeMap;

use glam::Vec2;

use super::host::{Body, Host, Modal, NodeName, NodeSpec, SceneNode};
use super::state::{BrickColor, Category, EntityId};
use crate::settings::Settings;

/// Height of the score label node
const LABEL_HEIGHT: f32 = 40.0;

/// A node stored by [`HeadlessScene`]
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessNode {
    pub name: Option<NodeName>,
    pub position: Vec2,
    pub size: Vec2,
    pub color: Option<BrickColor>,
    pub body: Option<Body>,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub label: Option<String>,
}

impl HeadlessNode {
    fn new(name: Option<NodeName>, position: Vec2, size: Vec2) -> Self {
        Self {
            name,
            position,
            size,
            color: None,
            body: None,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            label: None,
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.body.as_ref().map(|b| b.category)
    }
}

/// Scene host backed by a map of nodes
#[derive(Debug, Clone, Default)]
pub struct HeadlessScene {
    nodes: BTreeMap<EntityId, HeadlessNode>,
    next_id: u32,
    paused: bool,
    modals: Vec<Modal>,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene laid out the way the game expects it: arena, paddle near the
    /// bottom edge, ball at the center, and a score label below the paddle.
    pub fn standard(settings: &Settings) -> Self {
        let mut scene = Self::new();
        let arena = settings.arena_size();
        let bottom = -arena.y / 2.0;

        scene.add_named(NodeName::Arena, Vec2::ZERO, arena);
        scene.add_named(
            NodeName::Paddle,
            Vec2::new(0.0, bottom + settings.paddle_bottom_offset),
            settings.paddle_size(),
        );
        scene.add_named(NodeName::Ball, Vec2::ZERO, settings.ball_size());
        let label = scene.add_named(
            NodeName::ScoreLabel,
            Vec2::new(0.0, bottom + LABEL_HEIGHT),
            Vec2::new(arena.x / 4.0, LABEL_HEIGHT),
        );
        scene.set_label(label, "0");
        scene
    }

    /// Drop every node called `name`
    pub fn without_node(mut self, name: NodeName) -> Self {
        self.nodes.retain(|_, node| node.name != Some(name));
        self
    }

    pub fn add_named(&mut self, name: NodeName, position: Vec2, size: Vec2) -> EntityId {
        self.insert(HeadlessNode::new(Some(name), position, size))
    }

    fn insert(&mut self, node: HeadlessNode) -> EntityId {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        self.nodes.insert(id, node);
        id
    }

    pub fn node(&self, entity: EntityId) -> Option<&HeadlessNode> {
        self.nodes.get(&entity)
    }

    pub fn node_named(&self, name: NodeName) -> Option<&HeadlessNode> {
        self.nodes.values().find(|n| n.name == Some(name))
    }

    /// Entities whose body carries `category`, in creation order
    pub fn entities_with_category(&self, category: Category) -> Vec<EntityId> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.category() == Some(category))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn brick_count(&self) -> usize {
        self.entities_with_category(Category::Brick).len()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Every modal presented so far, oldest first
    pub fn modals(&self) -> &[Modal] {
        &self.modals
    }

    pub fn last_modal(&self) -> Option<&Modal> {
        self.modals.last()
    }
}

impl Host for HeadlessScene {
    fn find_node(&self, name: NodeName) -> Option<SceneNode> {
        self.nodes
            .iter()
            .find(|(_, n)| n.name == Some(name))
            .map(|(id, n)| SceneNode {
                entity: *id,
                position: n.position,
                size: n.size,
            })
    }

    fn attach_body(&mut self, entity: EntityId, body: Body) {
        match self.nodes.get_mut(&entity) {
            Some(node) => node.body = Some(body),
            None => log::warn!("attach_body: no entity {:?}", entity),
        }
    }

    fn spawn_node(&mut self, spec: NodeSpec) -> EntityId {
        let mut node = HeadlessNode::new(None, spec.position, spec.size);
        node.color = spec.color;
        node.body = Some(spec.body);
        self.insert(node)
    }

    fn remove_entity(&mut self, entity: EntityId) {
        if self.nodes.remove(&entity).is_none() {
            log::debug!("remove_entity: {:?} already gone", entity);
        }
    }

    fn set_position(&mut self, entity: EntityId, position: Vec2) {
        if let Some(node) = self.nodes.get_mut(&entity) {
            node.position = position;
        }
    }

    fn apply_impulse(&mut self, entity: EntityId, impulse: Vec2) {
        // Unit mass: an impulse is a velocity change
        match self.nodes.get_mut(&entity) {
            Some(node) if node.body.as_ref().is_some_and(|b| b.dynamic) => {
                node.velocity += impulse;
            }
            _ => log::warn!("apply_impulse: {:?} has no dynamic body", entity),
        }
    }

    fn set_velocity(&mut self, entity: EntityId, linear: Vec2, angular: f32) {
        if let Some(node) = self.nodes.get_mut(&entity) {
            node.velocity = linear;
            node.angular_velocity = angular;
        }
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn set_label(&mut self, entity: EntityId, text: &str) {
        if let Some(node) = self.nodes.get_mut(&entity) {
            node.label = Some(text.to_string());
        }
    }

    fn present_modal(&mut self, modal: Modal) {
        log::debug!("Modal: {} - {}", modal.title, modal.message);
        self.modals.push(modal);
    }
}
