//! Game state and core types
//!
//! Positions are scene coordinates with the arena centered on the origin,
//! y pointing up.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rect_contains;

/// Opaque handle for an entity owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Collision tag attached to every collider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Ball,
    Paddle,
    /// Arena edge loop
    Wall,
    /// Sensor along the arena bottom edge
    Bottom,
    Brick,
}

/// Brick colors alternate by index, starting with blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickColor {
    Blue,
    Red,
}

impl BrickColor {
    pub fn for_index(index: u32) -> Self {
        if index % 2 == 0 {
            BrickColor::Blue
        } else {
            BrickColor::Red
        }
    }
}

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball at rest, waiting for the first touch
    Idle,
    /// Ball launched, bricks remain
    Running,
    /// Host paused, modal shown, waiting for acknowledgement
    RoundOver,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Won,
    Lost,
}

/// The ball. Its motion belongs to the host; only home and size are tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub entity: EntityId,
    pub size: Vec2,
}

impl Ball {
    /// Ball rest position at the start of every round
    pub const HOME: Vec2 = Vec2::ZERO;
}

/// The player's paddle (static collider, moved only by drags)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub entity: EntityId,
    pub pos: Vec2,
    pub size: Vec2,
    /// Bottom-center rest position
    pub home: Vec2,
}

impl Paddle {
    /// Whether a touch at `point` lands on the paddle
    pub fn contains(&self, point: Vec2) -> bool {
        rect_contains(self.pos, self.size, point)
    }

    /// Move horizontally by `dx` if the paddle stays strictly inside the arena.
    ///
    /// Out-of-bounds requests are rejected whole, never clamped.
    /// Returns whether the paddle moved.
    pub fn try_shift(&mut self, dx: f32, arena_width: f32) -> bool {
        let new_x = self.pos.x + dx;
        let half_paddle = self.size.x / 2.0;
        let half_arena = arena_width / 2.0;

        if new_x - half_paddle > -half_arena && new_x + half_paddle < half_arena {
            self.pos.x = new_x;
            true
        } else {
            false
        }
    }
}

/// Placement of one brick before the host has spawned it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickSpec {
    pub index: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: BrickColor,
}

/// A live brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub entity: EntityId,
    pub index: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: BrickColor,
}

impl Brick {
    pub fn new(entity: EntityId, spec: BrickSpec) -> Self {
        Self {
            entity,
            index: spec.index,
            pos: spec.pos,
            size: spec.size,
            color: spec.color,
        }
    }
}

/// Lay out `count` bricks edge to edge across the full arena width.
///
/// Brick `i` is centered at `i * w - arena_width / 2 + w / 2` where
/// `w = arena_width / count`, at `top_offset` below the arena top edge.
pub fn generate_bricks(arena: Vec2, count: u32, height: f32, top_offset: f32) -> Vec<BrickSpec> {
    if count == 0 {
        return Vec::new();
    }
    let width = arena.x / count as f32;
    let y = arena.y / 2.0 - top_offset;

    (0..count)
        .map(|i| BrickSpec {
            index: i,
            pos: Vec2::new(i as f32 * width - arena.x / 2.0 + width / 2.0, y),
            size: Vec2::new(width, height),
            color: BrickColor::for_index(i),
        })
        .collect()
}

/// One side of a contact report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub category: Category,
    pub entity: EntityId,
}

/// Events delivered by the host, in delivery order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    TouchBegin { point: Vec2 },
    TouchMove { previous: Vec2, current: Vec2 },
    TouchEnd,
    CollisionBegin { a: Contact, b: Contact },
    /// The round-over modal's single action was chosen
    ModalAcknowledged,
}

/// Complete controller state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Vec2,
    pub paddle: Paddle,
    pub ball: Ball,
    pub score_label: EntityId,
    /// Arena node carrying the edge loop
    pub walls: EntityId,
    /// Bottom edge sensor
    pub bottom: EntityId,
    /// Live bricks, in layout order
    pub bricks: Vec<Brick>,
    /// Bricks generated at the start of every round
    pub number_of_bricks: u32,
    /// Distinct bricks destroyed this round
    pub hit_count: u32,
    /// Bottom player score, incremented on wins only
    pub score: u64,
    pub phase: GamePhase,
    pub finger_on_paddle: bool,
    pub last_outcome: Option<RoundOutcome>,
}

impl GameState {
    /// Remove a live brick by entity. `None` if it is not (or no longer) live.
    pub fn take_brick(&mut self, entity: EntityId) -> Option<Brick> {
        let idx = self.bricks.iter().position(|b| b.entity == entity)?;
        Some(self.bricks.remove(idx))
    }

    pub fn is_round_cleared(&self) -> bool {
        self.hit_count == self.number_of_bricks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(x: f32) -> Paddle {
        Paddle {
            entity: EntityId(1),
            pos: Vec2::new(x, -400.0),
            size: Vec2::new(100.0, 20.0),
            home: Vec2::new(0.0, -400.0),
        }
    }

    #[test]
    fn test_brick_layout_300_wide() {
        let bricks = generate_bricks(Vec2::new(300.0, 600.0), 6, 25.0, 100.0);
        assert_eq!(bricks.len(), 6);
        for (i, brick) in bricks.iter().enumerate() {
            assert_eq!(brick.size, Vec2::new(50.0, 25.0));
            assert!((brick.pos.x - (i as f32 * 50.0 - 150.0 + 25.0)).abs() < 1e-4);
            assert_eq!(brick.pos.y, 200.0);
        }
        assert_eq!(bricks[0].pos.x, -125.0);
        assert_eq!(bricks[5].pos.x, 125.0);
    }

    #[test]
    fn test_brick_colors_alternate_from_blue() {
        let bricks = generate_bricks(Vec2::new(300.0, 600.0), 6, 25.0, 100.0);
        let colors: Vec<_> = bricks.iter().map(|b| b.color).collect();
        assert_eq!(
            colors,
            vec![
                BrickColor::Blue,
                BrickColor::Red,
                BrickColor::Blue,
                BrickColor::Red,
                BrickColor::Blue,
                BrickColor::Red,
            ]
        );
    }

    #[test]
    fn test_paddle_shift_inside() {
        let mut paddle = paddle_at(0.0);
        assert!(paddle.try_shift(50.0, 300.0));
        assert_eq!(paddle.pos.x, 50.0);
    }

    #[test]
    fn test_paddle_shift_rejected_not_clamped() {
        let mut paddle = paddle_at(90.0);
        // Would put the right edge at 150, touching the wall
        assert!(!paddle.try_shift(10.0, 300.0));
        assert_eq!(paddle.pos.x, 90.0);

        assert!(!paddle.try_shift(-500.0, 300.0));
        assert_eq!(paddle.pos.x, 90.0);
    }

    #[test]
    fn test_paddle_contains() {
        let paddle = paddle_at(0.0);
        assert!(paddle.contains(Vec2::new(49.0, -391.0)));
        assert!(!paddle.contains(Vec2::new(51.0, -400.0)));
        assert!(!paddle.contains(Vec2::new(0.0, -380.0)));
    }
}
