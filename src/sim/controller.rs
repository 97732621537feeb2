//! Round state machine
//!
//! `Idle` -> first touch -> `Running` -> bottom contact or last brick ->
//! `RoundOver` -> modal acknowledged -> `Idle`.
//!
//! Every transition happens synchronously inside [`GameController::handle`]
//! (or the per-event methods it forwards to), on the host's event thread.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::host::{Body, BodyShape, Host, Modal, NodeName, NodeSpec, SceneNode};
use super::state::{
    Ball, Brick, Category, Contact, GameEvent, GamePhase, GameState, Paddle, RoundOutcome,
    generate_bricks,
};
use crate::error::SetupError;
use crate::settings::Settings;

/// Owns the game state and drives the host
pub struct GameController<H: Host> {
    host: H,
    settings: Settings,
    state: GameState,
    rng: Pcg32,
}

fn require<H: Host>(host: &H, name: NodeName) -> Result<SceneNode, SetupError> {
    let node = host.find_node(name).ok_or(SetupError::MissingNode(name))?;
    let size_ok = node.size.is_finite() && node.size.x > 0.0 && node.size.y > 0.0;
    if !size_ok {
        return Err(SetupError::InvalidNodeSize(name));
    }
    Ok(node)
}

/// The host scene decides the real geometry; it must leave the paddle room
/// to move in the lower half and keep the brick row inside the arena.
fn check_geometry(arena: Vec2, paddle: Vec2, settings: &Settings) -> Result<(), SetupError> {
    if paddle.x >= arena.x {
        return Err(SetupError::PaddleTooWide {
            paddle: paddle.x,
            arena: arena.x,
        });
    }
    if settings.paddle_bottom_offset >= arena.y / 2.0 {
        return Err(SetupError::PaddleOutsideLowerHalf {
            offset: settings.paddle_bottom_offset,
            arena_height: arena.y,
        });
    }
    if settings.brick_top_offset >= arena.y {
        return Err(SetupError::BrickRowOutsideArena {
            offset: settings.brick_top_offset,
            arena_height: arena.y,
        });
    }
    Ok(())
}

impl<H: Host> GameController<H> {
    /// Wire up the host scene and lay out the first round.
    ///
    /// Fails when `settings` are invalid, a required node is absent, or the
    /// host geometry cannot hold a playable round; on success the controller
    /// is fully populated and `Idle`.
    pub fn initialize(mut host: H, settings: Settings, seed: u64) -> Result<Self, SetupError> {
        settings.validate()?;

        let arena = require(&host, NodeName::Arena)?;
        let paddle = require(&host, NodeName::Paddle)?;
        let ball = require(&host, NodeName::Ball)?;
        let score_label = require(&host, NodeName::ScoreLabel)?;
        check_geometry(arena.size, paddle.size, &settings)?;

        host.attach_body(
            paddle.entity,
            Body::fixed(BodyShape::Rect { size: paddle.size }, Category::Paddle),
        );
        host.attach_body(
            ball.entity,
            Body::bouncy(BodyShape::Rect { size: ball.size }, Category::Ball)
                .reporting(&[Category::Bottom, Category::Brick]),
        );
        host.attach_body(
            arena.entity,
            Body::fixed(BodyShape::EdgeLoop { size: arena.size }, Category::Wall),
        );

        // Bottom edge sensor, separate from the edge loop so it can be told apart
        let half = arena.size / 2.0;
        let bottom = host.spawn_node(NodeSpec {
            position: Vec2::ZERO,
            size: Vec2::new(arena.size.x, 0.0),
            color: None,
            body: Body::fixed(
                BodyShape::Edge {
                    from: Vec2::new(-half.x, -half.y),
                    to: Vec2::new(half.x, -half.y),
                },
                Category::Bottom,
            )
            .reporting(&[Category::Ball]),
        });

        let paddle_home = Vec2::new(0.0, -half.y + settings.paddle_bottom_offset);
        host.set_position(paddle.entity, paddle_home);
        host.set_position(ball.entity, Ball::HOME);
        host.set_label(score_label.entity, "0");

        let state = GameState {
            arena: arena.size,
            paddle: Paddle {
                entity: paddle.entity,
                pos: paddle_home,
                size: paddle.size,
                home: paddle_home,
            },
            ball: Ball {
                entity: ball.entity,
                size: ball.size,
            },
            score_label: score_label.entity,
            walls: arena.entity,
            bottom,
            bricks: Vec::new(),
            number_of_bricks: settings.number_of_bricks,
            hit_count: 0,
            score: 0,
            phase: GamePhase::Idle,
            finger_on_paddle: false,
            last_outcome: None,
        };

        let mut controller = Self {
            host,
            settings,
            state,
            rng: Pcg32::seed_from_u64(seed),
        };
        controller.spawn_bricks();

        log::info!(
            "Arena {}x{} ready with {} bricks (seed {})",
            arena.size.x,
            arena.size.y,
            controller.state.bricks.len(),
            seed
        );
        Ok(controller)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Single entry point for host events.
    ///
    /// Returns the outcome if this event ended the round.
    pub fn handle(&mut self, event: &GameEvent) -> Option<RoundOutcome> {
        match *event {
            GameEvent::TouchBegin { point } => {
                self.on_touch_begin(point);
                None
            }
            GameEvent::TouchMove { previous, current } => {
                self.on_touch_move(previous, current);
                None
            }
            GameEvent::TouchEnd => {
                self.on_touch_end();
                None
            }
            GameEvent::CollisionBegin { a, b } => self.on_collision(a, b),
            GameEvent::ModalAcknowledged => {
                if self.state.phase == GamePhase::RoundOver {
                    self.reset();
                } else {
                    log::debug!("Modal acknowledgement outside round over, ignored");
                }
                None
            }
        }
    }

    /// Start tracking a drag if `point` is on the paddle; launch the ball if idle.
    ///
    /// Returns the launch impulse when this touch started the round.
    pub fn on_touch_begin(&mut self, point: Vec2) -> Option<Vec2> {
        if self.state.phase == GamePhase::RoundOver {
            return None;
        }

        if self.state.paddle.contains(point) {
            self.state.finger_on_paddle = true;
        }

        if self.state.phase != GamePhase::Idle {
            return None;
        }

        let [forward, backward] = self.settings.launch_impulses();
        let impulse = if self.rng.random_bool(0.5) {
            forward
        } else {
            backward
        };
        self.host.apply_impulse(self.state.ball.entity, impulse);
        self.state.phase = GamePhase::Running;
        log::info!("Ball launched with impulse ({}, {})", impulse.x, impulse.y);
        Some(impulse)
    }

    /// Drag the paddle horizontally. Returns whether it moved.
    pub fn on_touch_move(&mut self, previous: Vec2, current: Vec2) -> bool {
        if self.state.phase == GamePhase::RoundOver || !self.state.finger_on_paddle {
            return false;
        }
        // Paddle only follows touches in the lower half of the arena
        if current.y >= 0.0 {
            return false;
        }

        let dx = current.x - previous.x;
        if !self.state.paddle.try_shift(dx, self.state.arena.x) {
            return false;
        }
        self.host
            .set_position(self.state.paddle.entity, self.state.paddle.pos);
        true
    }

    pub fn on_touch_end(&mut self) {
        self.state.finger_on_paddle = false;
    }

    /// React to a contact between two bodies.
    ///
    /// Bottom contact ends the round as a loss before any brick or win
    /// handling. Returns the outcome if the round ended.
    pub fn on_collision(&mut self, a: Contact, b: Contact) -> Option<RoundOutcome> {
        if self.state.phase == GamePhase::RoundOver {
            return None;
        }

        if a.category == Category::Bottom || b.category == Category::Bottom {
            log::debug!("Bottom collision");
            return Some(self.end_round(RoundOutcome::Lost));
        }

        if let Some(contact) = [a, b].into_iter().find(|c| c.category == Category::Brick) {
            match self.state.take_brick(contact.entity) {
                Some(brick) => {
                    self.host.remove_entity(brick.entity);
                    self.state.hit_count += 1;
                    log::debug!(
                        "Brick {} destroyed ({}/{})",
                        brick.index,
                        self.state.hit_count,
                        self.state.number_of_bricks
                    );
                }
                None => log::debug!("Contact with removed brick {:?}", contact.entity),
            }
        }

        if self.state.is_round_cleared() {
            return Some(self.end_round(RoundOutcome::Won));
        }
        None
    }

    /// Pause the host, settle the score and put up the round-over modal.
    ///
    /// A round ends once: while `RoundOver` this returns the recorded outcome
    /// and changes nothing.
    pub fn end_round(&mut self, outcome: RoundOutcome) -> RoundOutcome {
        if self.state.phase == GamePhase::RoundOver {
            return self.state.last_outcome.unwrap_or(outcome);
        }

        self.host.set_paused(true);
        self.state.phase = GamePhase::RoundOver;
        self.state.last_outcome = Some(outcome);

        let message = match outcome {
            RoundOutcome::Won => {
                self.state.score += 1;
                self.host
                    .set_label(self.state.score_label, &self.state.score.to_string());
                self.settings.win_message.clone()
            }
            RoundOutcome::Lost => self.settings.loss_message.clone(),
        };
        log::info!("Round over: {:?}, score {}", outcome, self.state.score);

        self.host.present_modal(Modal {
            title: self.settings.modal_title.clone(),
            message,
            action: self.settings.modal_action.clone(),
        });
        outcome
    }

    /// Put ball, paddle and bricks back for a fresh round and resume the host
    pub fn reset(&mut self) {
        let ball = self.state.ball.entity;
        self.host.set_position(ball, Ball::HOME);
        self.host.set_velocity(ball, Vec2::ZERO, 0.0);

        self.state.paddle.pos = self.state.paddle.home;
        self.host
            .set_position(self.state.paddle.entity, self.state.paddle.pos);

        for brick in self.state.bricks.drain(..) {
            self.host.remove_entity(brick.entity);
        }
        self.spawn_bricks();
        self.state.hit_count = 0;

        self.host.set_paused(false);
        self.state.phase = GamePhase::Idle;
        log::info!("Round reset");
    }

    fn spawn_bricks(&mut self) {
        let specs = generate_bricks(
            self.state.arena,
            self.settings.number_of_bricks,
            self.settings.brick_height,
            self.settings.brick_top_offset,
        );
        let host = &mut self.host;
        self.state.bricks = specs
            .into_iter()
            .map(|spec| {
                let entity = host.spawn_node(NodeSpec {
                    position: spec.pos,
                    size: spec.size,
                    color: Some(spec.color),
                    body: Body::fixed(BodyShape::Rect { size: spec.size }, Category::Brick)
                        .reporting(&[Category::Ball]),
                });
                Brick::new(entity, spec)
            })
            .collect();
    }
}
