//! Scripted sessions
//!
//! A script is a JSON list of steps standing in for the touches and contact
//! reports a live engine would deliver. Steps name bricks by layout index, so
//! scripts do not depend on the entity ids a host hands out.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{
    Category, Contact, GameController, GameEvent, GamePhase, GameState, Host, RoundOutcome,
};

/// One scripted input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    TouchBegin { point: Vec2 },
    TouchMove { from: Vec2, to: Vec2 },
    TouchEnd,
    /// Ball contact with the brick at this layout index
    HitBrick { index: u32 },
    HitBottom,
    HitPaddle,
    HitWall,
    Acknowledge,
}

impl Step {
    /// Translate into the event a host would deliver, `None` if the step
    /// refers to a brick that is not live.
    pub fn to_event(&self, state: &GameState) -> Option<GameEvent> {
        let ball = Contact {
            category: Category::Ball,
            entity: state.ball.entity,
        };
        let event = match *self {
            Step::TouchBegin { point } => GameEvent::TouchBegin { point },
            Step::TouchMove { from, to } => GameEvent::TouchMove {
                previous: from,
                current: to,
            },
            Step::TouchEnd => GameEvent::TouchEnd,
            Step::HitBrick { index } => {
                let brick = state.bricks.iter().find(|b| b.index == index)?;
                GameEvent::CollisionBegin {
                    a: ball,
                    b: Contact {
                        category: Category::Brick,
                        entity: brick.entity,
                    },
                }
            }
            Step::HitBottom => GameEvent::CollisionBegin {
                a: Contact {
                    category: Category::Bottom,
                    entity: state.bottom,
                },
                b: ball,
            },
            Step::HitPaddle => GameEvent::CollisionBegin {
                a: ball,
                b: Contact {
                    category: Category::Paddle,
                    entity: state.paddle.entity,
                },
            },
            Step::HitWall => GameEvent::CollisionBegin {
                a: Contact {
                    category: Category::Wall,
                    entity: state.walls,
                },
                b: ball,
            },
            Step::Acknowledge => GameEvent::ModalAcknowledged,
        };
        Some(event)
    }
}

/// What happened over a scripted session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub steps_applied: usize,
    pub steps_skipped: usize,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    pub score: u64,
    pub final_phase: GamePhase,
}

pub fn parse_script(json: &str) -> Result<Vec<Step>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Feed `steps` through the controller in order
pub fn run<H: Host>(controller: &mut GameController<H>, steps: &[Step]) -> ReplaySummary {
    let mut summary = ReplaySummary {
        steps_applied: 0,
        steps_skipped: 0,
        rounds_won: 0,
        rounds_lost: 0,
        score: 0,
        final_phase: controller.state().phase,
    };

    for (i, step) in steps.iter().enumerate() {
        let Some(event) = step.to_event(controller.state()) else {
            log::warn!("Step {}: {:?} has no live target, skipped", i, step);
            summary.steps_skipped += 1;
            continue;
        };
        summary.steps_applied += 1;

        match controller.handle(&event) {
            Some(RoundOutcome::Won) => summary.rounds_won += 1,
            Some(RoundOutcome::Lost) => summary.rounds_lost += 1,
            None => {}
        }
    }

    summary.score = controller.state().score;
    summary.final_phase = controller.state().phase;
    summary
}

/// Win a round by clearing every brick, then lose the next one
pub fn demo_script(number_of_bricks: u32, paddle_home: Vec2) -> Vec<Step> {
    let mut steps = vec![
        Step::TouchBegin { point: paddle_home },
        Step::TouchMove {
            from: paddle_home,
            to: paddle_home + Vec2::new(60.0, 0.0),
        },
        Step::HitPaddle,
        Step::TouchEnd,
    ];
    steps.extend((0..number_of_bricks).map(|index| Step::HitBrick { index }));
    steps.extend([
        Step::Acknowledge,
        Step::TouchBegin { point: Vec2::ZERO },
        Step::HitBrick { index: 0 },
        Step::HitWall,
        Step::HitBottom,
        Step::Acknowledge,
    ]);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::HeadlessScene;

    fn controller() -> GameController<HeadlessScene> {
        let settings = Settings::default();
        let scene = HeadlessScene::standard(&settings);
        GameController::initialize(scene, settings, 7).expect("standard scene")
    }

    #[test]
    fn test_demo_script() {
        let mut c = controller();
        let home = c.state().paddle.home;
        let steps = demo_script(c.state().number_of_bricks, home);
        let summary = run(&mut c, &steps);

        assert_eq!(summary.rounds_won, 1);
        assert_eq!(summary.rounds_lost, 1);
        assert_eq!(summary.score, 1);
        assert_eq!(summary.steps_skipped, 0);
        assert_eq!(summary.final_phase, GamePhase::Idle);
        assert_eq!(c.host().modals().len(), 2);
    }

    #[test]
    fn test_destroyed_brick_step_skipped() {
        let mut c = controller();
        let steps = [
            Step::TouchBegin { point: Vec2::ZERO },
            Step::HitBrick { index: 3 },
            Step::HitBrick { index: 3 },
            Step::HitBrick { index: 42 },
        ];
        let summary = run(&mut c, &steps);
        assert_eq!(summary.steps_applied, 2);
        assert_eq!(summary.steps_skipped, 2);
        assert_eq!(c.state().hit_count, 1);
        assert_eq!(summary.final_phase, GamePhase::Running);
    }

    #[test]
    fn test_parse_script() {
        let json = r#"[
            { "step": "touch_begin", "point": [0.0, -567.0] },
            { "step": "touch_move", "from": [0.0, -567.0], "to": [25.0, -567.0] },
            { "step": "touch_end" },
            { "step": "hit_brick", "index": 2 },
            { "step": "hit_bottom" },
            { "step": "acknowledge" }
        ]"#;
        let steps = parse_script(json).expect("valid script");
        assert_eq!(steps.len(), 6);
        assert_eq!(
            steps[1],
            Step::TouchMove {
                from: Vec2::new(0.0, -567.0),
                to: Vec2::new(25.0, -567.0),
            }
        );
        assert_eq!(steps[3], Step::HitBrick { index: 2 });

        let mut c = controller();
        let summary = run(&mut c, &steps);
        assert_eq!(summary.rounds_lost, 1);
        assert_eq!(summary.score, 0);
        assert_eq!(c.state().bricks.len(), 6);
    }

    #[test]
    fn test_unknown_step_rejected() {
        assert!(parse_script(r#"[{ "step": "teleport" }]"#).is_err());
    }
}
