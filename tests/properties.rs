//! Property tests for geometry, collision and the phase machine

use glam::Vec2;
use proptest::prelude::*;

use paddle_pong::game::{GamePhase, Trigger, build_state_machine};
use paddle_pong::sim::collision::resolve_pairs;
use paddle_pong::sim::{self, Entity, EntityKind, EntityPool, Field, Rect, Side};
use paddle_pong::{Action, ActionSet, GameSession, Settings};

const DT: f32 = 1.0 / 60.0;

fn rect() -> impl Strategy<Value = Rect> {
    (
        -100.0f32..900.0,
        -100.0f32..700.0,
        0.0f32..200.0,
        0.0f32..200.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn trigger() -> impl Strategy<Value = Trigger> {
    prop::sample::select(Trigger::ALL.to_vec())
}

proptest! {
    #[test]
    fn intersects_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn goals_are_mutually_exclusive(subject in rect()) {
        let field = Field::from_window_size(800, 600).unwrap();
        prop_assert!(
            !(field.is_subject_in_left_goal(&subject) && field.is_subject_in_right_goal(&subject))
        );
    }

    #[test]
    fn paddles_stay_in_field(
        inputs in prop::collection::vec((any::<bool>(), any::<bool>(), 0.0f32..0.25), 1..200)
    ) {
        let mut session = GameSession::new(&Settings::default(), (800, 600)).unwrap();
        for (up, down, dt) in inputs {
            let mut actions = ActionSet::new();
            actions.set(Action::P1Up, up);
            actions.set(Action::P1Down, down);
            actions.set(Action::P2Up, down);
            actions.set(Action::P2Down, up);
            session.apply_paddle_input(&actions);
            session.simulate(dt);

            for side in [Side::Left, Side::Right] {
                let paddle = session.pool.paddle(side).rect();
                prop_assert!(session.field.bounds.contains(&paddle), "{:?} paddle left the field: {:?}", side, paddle);
            }
        }
    }

    #[test]
    fn ball_never_tunnels_through_paddle(
        gap in 0.5f32..100.0,
        offset_y in -40.0f32..40.0,
        vx in 100.0f32..200_000.0,
        vy in -500.0f32..500.0,
    ) {
        let field = Field::from_window_size(800, 600).unwrap();
        let paddle = Entity::paddle(&field, Side::Right, Vec2::new(8.0, 128.0));
        let face = paddle.rect();

        let from = Vec2::new(face.left() - gap - 8.0, face.center().y + offset_y - 4.0);
        let mut ball = Entity::new(EntityKind::Ball, Rect::new(from.x, from.y, 8.0, 8.0), Vec2::new(vx, vy));
        ball.update(DT);
        let reached = from.x + 8.0 + vx * DT > face.left();

        let mut entities = [ball, paddle];
        resolve_pairs(&mut entities);
        let ball = entities[0];

        prop_assert!(ball.rect().right() <= face.left(), "ball ended past the paddle face: {:?}", ball.rect());
        prop_assert!(!ball.rect().intersects(&face));
        if reached {
            prop_assert!(ball.vel.x < 0.0);
        }
    }

    #[test]
    fn full_step_leaves_ball_outside_paddles(
        ball_x in 40.0f32..100.0,
        ball_y in 0.0f32..592.0,
        ball_vx in -2_000.0f32..2_000.0,
        ball_vy in -2_000.0f32..2_000.0,
        paddle_y in 0.0f32..472.0,
        paddle_vy in -400.0f32..400.0,
        dt in 0.0f32..0.25,
    ) {
        let field = Field::from_window_size(800, 600).unwrap();
        let size = Vec2::new(8.0, 128.0);
        let mut left = Entity::paddle(&field, Side::Left, size);
        left.pos.y = paddle_y;
        left.vel.y = paddle_vy;
        let ball = Entity::new(
            EntityKind::Ball,
            Rect::new(ball_x, ball_y, 8.0, 8.0),
            Vec2::new(ball_vx, ball_vy),
        );
        let mut pool = EntityPool::new(ball, left, Entity::paddle(&field, Side::Right, size));

        sim::step(&mut pool, &field, dt);

        let ball = pool.ball().rect();
        for side in [Side::Left, Side::Right] {
            let paddle = pool.paddle(side).rect();
            prop_assert!(!ball.intersects(&paddle), "ball {:?} overlaps {:?} paddle {:?}", ball, side, paddle);
            prop_assert!(field.bounds.contains(&paddle));
        }
    }

    #[test]
    fn unmapped_triggers_leave_phase_unchanged(triggers in prop::collection::vec(trigger(), 0..50)) {
        let mut fsm = build_state_machine().unwrap();
        for trigger in triggers {
            let before = fsm.state();
            let expected = fsm.target(before, trigger).unwrap_or(before);
            fsm.trigger(trigger);
            prop_assert_eq!(fsm.state(), expected);
            prop_assert_ne!(fsm.state(), GamePhase::Guard);
        }
    }

    #[test]
    fn terminate_is_absorbing(
        prefix in prop::collection::vec(trigger(), 0..20),
        suffix in prop::collection::vec(trigger(), 0..50),
    ) {
        let mut fsm = build_state_machine().unwrap();
        for trigger in prefix {
            fsm.trigger(trigger);
        }
        fsm.trigger(Trigger::Quit);
        if fsm.state() == GamePhase::Terminate {
            for trigger in suffix {
                fsm.trigger(trigger);
                prop_assert_eq!(fsm.state(), GamePhase::Terminate);
            }
        }
    }
}
