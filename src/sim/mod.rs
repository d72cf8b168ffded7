//! Simulation module
//!
//! Everything that moves lives here. No rendering, platform or timing
//! dependencies: the caller supplies the frame's delta time.

pub mod aabb;
pub mod collision;
pub mod entity;
pub mod field;
pub mod step;

pub use aabb::{Edge, Rect, SweepHit, sweep};
pub use collision::{CollisionEvents, ball_paddle_contact};
pub use entity::{
    BallBehavior, Behavior, Entity, EntityKind, EntityPool, PaddleBehavior, ENTITY_COUNT,
};
pub use field::{Field, Side};
pub use step::step;
