//! Collision detection and response
//!
//! Runs after motion integration. Ball-vs-paddle contacts are found with a
//! swept test over the frame's displacement, so a fast ball cannot skip over
//! a paddle between two frames. Resolution is positional: the ball is moved
//! out of the paddle onto the face it approached and its velocity along that
//! face's normal is mirrored to point away.

use glam::Vec2;

use super::aabb::{Edge, Rect, SweepHit, sweep};
use super::entity::{Entity, EntityKind};

/// Gap left between a resolved ball and the paddle face it hit
pub const CONTACT_SKIN: f32 = 0.01;

/// What happened during one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionEvents {
    pub paddle_hits: u32,
    pub wall_bounces: u32,
}

impl CollisionEvents {
    pub fn is_empty(&self) -> bool {
        self.paddle_hits == 0 && self.wall_bounces == 0
    }
}

/// Run pairwise, boundary, then pinned-ball resolution over `entities`
pub fn process(entities: &mut [Entity], field: &Rect) -> CollisionEvents {
    let paddle_hits = resolve_pairs(entities);
    let wall_bounces = resolve_bounds(entities, field);
    resolve_pinned(entities);
    CollisionEvents {
        paddle_hits,
        wall_bounces,
    }
}

/// Resolve entity-vs-entity contacts. Returns the number of paddle hits.
///
/// Every ball-paddle pair is tested once. A ball only resolves its earliest
/// contact of the frame, so it cannot bounce twice in one step.
/// Paddle-paddle pairs never interact.
pub fn resolve_pairs(entities: &mut [Entity]) -> u32 {
    let mut hits = 0;

    for i in 0..entities.len() {
        if !entities[i].is_ball() {
            continue;
        }

        let mut earliest: Option<(usize, SweepHit)> = None;
        for j in 0..entities.len() {
            if i == j || !entities[j].is_paddle() {
                continue;
            }
            if let Some(hit) = ball_paddle_contact(&entities[i], &entities[j]) {
                if earliest.is_none_or(|(_, best)| hit.time < best.time) {
                    earliest = Some((j, hit));
                }
            }
        }

        if let Some((j, hit)) = earliest {
            let paddle = entities[j];
            bounce_off_paddle(&mut entities[i], &paddle, hit.normal);
            hits += 1;
            if let EntityKind::Paddle(side) = paddle.kind {
                log::trace!("Ball hit {:?} paddle (normal {:?})", side, hit.normal);
            }
        }
    }

    hits
}

/// Let every entity react to crossing a field edge. Returns the number of
/// ball wall bounces.
pub fn resolve_bounds(entities: &mut [Entity], field: &Rect) -> u32 {
    let mut bounces = 0;
    for entity in entities.iter_mut() {
        if let Some(edge) = field.crossed_edge(&entity.rect()) {
            entity.on_out_of_bounds(edge, field);
            if entity.is_ball() && matches!(edge, Edge::Top | Edge::Bottom) {
                bounces += 1;
            }
        }
    }
    bounces
}

/// Separate balls the wall pass clamped back into a paddle.
///
/// The ball is held by the wall, so the paddle gives way vertically.
pub fn resolve_pinned(entities: &mut [Entity]) {
    for i in 0..entities.len() {
        if !entities[i].is_ball() {
            continue;
        }
        let ball = entities[i].rect();
        for paddle in entities.iter_mut().filter(|e| e.is_paddle()) {
            if !paddle.rect().intersects(&ball) {
                continue;
            }
            if paddle.rect().center().y >= ball.center().y {
                paddle.pos.y = ball.bottom() + CONTACT_SKIN;
            } else {
                paddle.pos.y = ball.top() - paddle.size.y - CONTACT_SKIN;
            }
            log::trace!("Paddle pushed off pinned ball to y={}", paddle.pos.y);
        }
    }
}

/// Find the contact between a ball and a paddle during the last step.
///
/// `time` is 0 when the two already overlapped before moving; the normal is
/// then taken from the shallowest penetration axis.
pub fn ball_paddle_contact(ball: &Entity, paddle: &Entity) -> Option<SweepHit> {
    let ball_now = ball.rect();
    let paddle_now = paddle.rect();

    if !ball.prev_rect().intersects(&paddle.prev_rect()) {
        let relative = ball.displacement() - paddle.displacement();
        if let Some(hit) = sweep(&ball.prev_rect(), relative, &paddle.prev_rect()) {
            return Some(hit);
        }
    }

    ball_now.intersects(&paddle_now).then(|| SweepHit {
        time: 0.0,
        normal: penetration_normal(&ball_now, &paddle_now),
    })
}

/// Face of `paddle` that `ball` is least deep behind
fn penetration_normal(ball: &Rect, paddle: &Rect) -> Vec2 {
    let depth = ball.overlap(paddle);
    let offset = ball.center() - paddle.center();
    if depth.x <= depth.y {
        Vec2::new(if offset.x < 0.0 { -1.0 } else { 1.0 }, 0.0)
    } else {
        Vec2::new(0.0, if offset.y < 0.0 { -1.0 } else { 1.0 })
    }
}

/// Place the ball flush against the paddle face with `normal` and mirror the
/// matching velocity component away from the paddle.
fn bounce_off_paddle(ball: &mut Entity, paddle: &Entity, normal: Vec2) {
    let face = paddle.rect();
    if normal.x < 0.0 {
        ball.pos.x = face.left() - ball.size.x - CONTACT_SKIN;
        ball.vel.x = -ball.vel.x.abs();
    } else if normal.x > 0.0 {
        ball.pos.x = face.right() + CONTACT_SKIN;
        ball.vel.x = ball.vel.x.abs();
    } else if normal.y < 0.0 {
        ball.pos.y = face.top() - ball.size.y - CONTACT_SKIN;
        ball.vel.y = -ball.vel.y.abs();
    } else if normal.y > 0.0 {
        ball.pos.y = face.bottom() + CONTACT_SKIN;
        ball.vel.y = ball.vel.y.abs();
    }
}
