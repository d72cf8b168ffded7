//! One simulation step: integrate, then collide

use super::collision::{self, CollisionEvents};
use super::entity::EntityPool;
use super::field::Field;

/// Advance every entity by `dt` seconds and resolve the resulting contacts.
///
/// `dt` must already be clamped to be non-negative.
pub fn step(pool: &mut EntityPool, field: &Field, dt: f32) -> CollisionEvents {
    debug_assert!(dt >= 0.0, "negative delta time {dt}");

    let entities = pool.as_mut_slice();
    for entity in entities.iter_mut() {
        entity.update(dt);
    }

    collision::process(entities, &field.bounds)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::entity::Entity;
    use crate::sim::field::Side;

    fn pool(field: &Field, ball_vel: Vec2) -> EntityPool {
        let paddle = Vec2::new(8.0, 128.0);
        EntityPool::new(
            Entity::ball(field, 8.0, ball_vel),
            Entity::paddle(field, Side::Left, paddle),
            Entity::paddle(field, Side::Right, paddle),
        )
    }

    #[test]
    fn test_step_moves_ball() {
        let field = Field::from_window_size(800, 600).unwrap();
        let mut pool = pool(&field, Vec2::new(300.0, 0.0));
        let start = pool.ball().pos;

        let events = step(&mut pool, &field, 0.1);

        assert!(events.is_empty());
        assert!((pool.ball().pos.x - (start.x + 30.0)).abs() < 1e-3);
    }

    #[test]
    fn test_step_bounces_ball_off_floor() {
        let field = Field::from_window_size(800, 600).unwrap();
        let mut pool = pool(&field, Vec2::new(0.0, 400.0));
        pool.ball_mut().pos.y = 590.0;

        let events = step(&mut pool, &field, 0.1);

        assert_eq!(events.wall_bounces, 1);
        assert_eq!(pool.ball().rect().bottom(), 600.0);
        assert!(pool.ball().vel.y < 0.0);
    }

    #[test]
    fn test_held_paddle_stops_at_ceiling() {
        let field = Field::from_window_size(800, 600).unwrap();
        let mut pool = pool(&field, Vec2::ZERO);

        for _ in 0..200 {
            pool.paddle_mut(Side::Left).vel.y = -200.0;
            step(&mut pool, &field, 1.0 / 60.0);
            assert!(pool.paddle(Side::Left).rect().top() >= 0.0);
        }
        assert_eq!(pool.paddle(Side::Left).rect().top(), 0.0);
    }
}
