//! Entity model
//!
//! Every entity is a box with a velocity. What differs between kinds is how
//! it integrates motion and how it reacts to leaving the field, which lives
//! behind the [`Behavior`] trait.

use glam::Vec2;

use super::aabb::{Edge, Rect};
use super::field::{Field, Side};

/// Kind of entity, selects its [`Behavior`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Ball,
    Paddle(Side),
}

/// A moving box in the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per second
    pub vel: Vec2,
    /// Position before the latest integration step
    pub prev_pos: Vec2,
}

/// Per-kind update and boundary response
pub trait Behavior {
    /// Integrate motion over `dt` seconds
    fn update(&self, entity: &mut Entity, dt: f32) {
        entity.prev_pos = entity.pos;
        entity.pos += entity.vel * dt;
    }

    /// React to the entity extending past `edge` of `field`
    fn on_out_of_bounds(&self, entity: &mut Entity, edge: Edge, field: &Rect);
}

/// Bounces off the top and bottom walls. Left and right exits are goals and
/// are left alone here.
#[derive(Debug, Clone, Copy, Default)]
pub struct BallBehavior;

/// Stays inside the field vertically; hitting a wall pushes it back in and
/// turns it around.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleBehavior;

impl Behavior for BallBehavior {
    fn on_out_of_bounds(&self, entity: &mut Entity, edge: Edge, field: &Rect) {
        match edge {
            Edge::Top => {
                entity.pos.y = field.top();
                entity.vel.y = entity.vel.y.abs();
            }
            Edge::Bottom => {
                entity.pos.y = field.bottom() - entity.size.y;
                entity.vel.y = -entity.vel.y.abs();
            }
            Edge::Left | Edge::Right => {}
        }
    }
}

impl Behavior for PaddleBehavior {
    fn on_out_of_bounds(&self, entity: &mut Entity, edge: Edge, field: &Rect) {
        match edge {
            Edge::Top => {
                entity.pos.y = field.top();
                entity.vel.y = entity.vel.y.abs();
            }
            Edge::Bottom => {
                entity.pos.y = field.bottom() - entity.size.y;
                entity.vel.y = -entity.vel.y.abs();
            }
            Edge::Left => {
                entity.pos.x = field.left();
                entity.vel.x = 0.0;
            }
            Edge::Right => {
                entity.pos.x = field.right() - entity.size.x;
                entity.vel.x = 0.0;
            }
        }
    }
}

impl EntityKind {
    pub fn behavior(self) -> &'static dyn Behavior {
        match self {
            EntityKind::Ball => &BallBehavior,
            EntityKind::Paddle(_) => &PaddleBehavior,
        }
    }
}

impl Entity {
    pub fn new(kind: EntityKind, rect: Rect, vel: Vec2) -> Self {
        Self {
            kind,
            pos: rect.pos,
            size: rect.size,
            vel,
            prev_pos: rect.pos,
        }
    }

    /// Ball centred in the field, moving at `vel`
    pub fn ball(field: &Field, size: f32, vel: Vec2) -> Self {
        let rect = Rect::centered_at(field.center(), Vec2::splat(size));
        Self::new(EntityKind::Ball, rect, vel)
    }

    /// Resting paddle centred in its side's lane
    pub fn paddle(field: &Field, side: Side, size: Vec2) -> Self {
        let lane = field.paddle_lane(side);
        let rect = Rect::centered_at(lane.center(), size);
        Self::new(EntityKind::Paddle(side), rect, Vec2::ZERO)
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Box occupied before the latest integration step
    #[inline]
    pub fn prev_rect(&self) -> Rect {
        Rect::from_pos_size(self.prev_pos, self.size)
    }

    /// Distance moved by the latest integration step
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.pos - self.prev_pos
    }

    pub fn is_ball(&self) -> bool {
        matches!(self.kind, EntityKind::Ball)
    }

    pub fn is_paddle(&self) -> bool {
        matches!(self.kind, EntityKind::Paddle(_))
    }

    pub fn update(&mut self, dt: f32) {
        self.kind.behavior().update(self, dt);
    }

    pub fn on_out_of_bounds(&mut self, edge: Edge, field: &Rect) {
        self.kind.behavior().on_out_of_bounds(self, edge, field);
    }
}

/// Index of each entity in the pool
pub const BALL: usize = 0;
pub const LEFT_PADDLE: usize = 1;
pub const RIGHT_PADDLE: usize = 2;
pub const ENTITY_COUNT: usize = 3;

/// Fixed-capacity entity storage: one ball and two paddles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityPool {
    entities: [Entity; ENTITY_COUNT],
}

impl EntityPool {
    pub fn new(ball: Entity, left: Entity, right: Entity) -> Self {
        Self {
            entities: [ball, left, right],
        }
    }

    pub fn ball(&self) -> &Entity {
        &self.entities[BALL]
    }

    pub fn ball_mut(&mut self) -> &mut Entity {
        &mut self.entities[BALL]
    }

    pub fn paddle(&self, side: Side) -> &Entity {
        &self.entities[Self::paddle_index(side)]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Entity {
        &mut self.entities[Self::paddle_index(side)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    fn paddle_index(side: Side) -> usize {
        match side {
            Side::Left => LEFT_PADDLE,
            Side::Right => RIGHT_PADDLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::from_window_size(800, 600).unwrap()
    }

    #[test]
    fn test_update_integrates_velocity() {
        let mut ball = Entity::ball(&field(), 8.0, Vec2::new(300.0, -120.0));
        let start = ball.pos;
        ball.update(0.5);
        assert_eq!(ball.pos, start + Vec2::new(150.0, -60.0));
        assert_eq!(ball.prev_pos, start);
        assert_eq!(ball.displacement(), Vec2::new(150.0, -60.0));
    }

    #[test]
    fn test_zero_delta_does_not_move() {
        let mut ball = Entity::ball(&field(), 8.0, Vec2::new(300.0, 300.0));
        let start = ball.pos;
        ball.update(0.0);
        assert_eq!(ball.pos, start);
    }

    #[test]
    fn test_ball_bounces_off_top() {
        let field = field();
        let mut ball = Entity::ball(&field, 8.0, Vec2::new(100.0, -50.0));
        ball.pos.y = -3.0;
        ball.on_out_of_bounds(Edge::Top, &field.bounds);
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_ball_bounces_off_bottom() {
        let field = field();
        let mut ball = Entity::ball(&field, 8.0, Vec2::new(100.0, 50.0));
        ball.pos.y = 599.0;
        ball.on_out_of_bounds(Edge::Bottom, &field.bounds);
        assert_eq!(ball.pos.y, 592.0);
        assert_eq!(ball.vel.y, -50.0);
    }

    #[test]
    fn test_ball_ignores_side_exits() {
        let field = field();
        let mut ball = Entity::ball(&field, 8.0, Vec2::new(-100.0, 0.0));
        ball.pos.x = -5.0;
        let before = ball;
        ball.on_out_of_bounds(Edge::Left, &field.bounds);
        assert_eq!(ball, before);
    }

    #[test]
    fn test_paddle_clamped_at_walls() {
        let field = field();
        let mut paddle = Entity::paddle(&field, Side::Left, Vec2::new(8.0, 128.0));
        paddle.pos.y = -20.0;
        paddle.vel.y = -200.0;
        paddle.on_out_of_bounds(Edge::Top, &field.bounds);
        assert_eq!(paddle.pos.y, 0.0);
        assert_eq!(paddle.vel.y, 200.0);

        paddle.pos.y = 500.0;
        paddle.on_out_of_bounds(Edge::Bottom, &field.bounds);
        assert_eq!(paddle.pos.y, 600.0 - 128.0);
        assert_eq!(paddle.vel.y, -200.0);
    }

    #[test]
    fn test_paddles_start_in_their_lanes() {
        let field = field();
        let left = Entity::paddle(&field, Side::Left, Vec2::new(8.0, 128.0));
        let right = Entity::paddle(&field, Side::Right, Vec2::new(8.0, 128.0));
        assert!(field.paddle_lane(Side::Left).contains(&left.rect()));
        assert!(field.paddle_lane(Side::Right).contains(&right.rect()));
        assert_eq!(left.rect().center().y, 300.0);
        assert_eq!(left.vel, Vec2::ZERO);
    }

    #[test]
    fn test_pool_indices() {
        let field = field();
        let pool = EntityPool::new(
            Entity::ball(&field, 8.0, Vec2::X),
            Entity::paddle(&field, Side::Left, Vec2::new(8.0, 128.0)),
            Entity::paddle(&field, Side::Right, Vec2::new(8.0, 128.0)),
        );
        assert!(pool.ball().is_ball());
        assert_eq!(pool.paddle(Side::Left).kind, EntityKind::Paddle(Side::Left));
        assert_eq!(pool.paddle(Side::Right).kind, EntityKind::Paddle(Side::Right));
        assert_eq!(pool.iter().count(), ENTITY_COUNT);
    }
}
