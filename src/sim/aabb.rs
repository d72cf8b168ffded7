//! Axis-aligned rectangle geometry
//!
//! Screen convention: `pos` is the top-left corner and y grows downward, so
//! the "top" edge is the smaller y.

use glam::Vec2;

/// An edge of a bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height, never negative
    pub size: Vec2,
}

/// Result of a swept test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Fraction of the displacement travelled before contact, in [0, 1]
    pub time: f32,
    /// Face normal of the target at the contact, pointing back toward the mover
    pub normal: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w.max(0.0), h.max(0.0)),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size: size.max(Vec2::ZERO),
        }
    }

    /// Build a rectangle of `size` centered on `center`
    pub fn centered_at(center: Vec2, size: Vec2) -> Self {
        Self::from_pos_size(center - size * 0.5, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open containment: min edges inclusive, max edges exclusive
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Check if `subject` lies entirely inside this rectangle
    pub fn contains(&self, subject: &Rect) -> bool {
        subject.left() >= self.left()
            && subject.right() <= self.right()
            && subject.top() >= self.top()
            && subject.bottom() <= self.bottom()
    }

    /// Which edge of `self` the `subject` extends past, if any.
    ///
    /// Top and bottom are checked before left and right so a ball leaving
    /// through a corner still bounces off the wall.
    pub fn crossed_edge(&self, subject: &Rect) -> Option<Edge> {
        if subject.top() < self.top() {
            Some(Edge::Top)
        } else if subject.bottom() > self.bottom() {
            Some(Edge::Bottom)
        } else if subject.left() < self.left() {
            Some(Edge::Left)
        } else if subject.right() > self.right() {
            Some(Edge::Right)
        } else {
            None
        }
    }

    /// Per-axis penetration depth with `other` (positive when overlapping)
    pub fn overlap(&self, other: &Rect) -> Vec2 {
        Vec2::new(
            self.right().min(other.right()) - self.left().max(other.left()),
            self.bottom().min(other.bottom()) - self.top().max(other.top()),
        )
    }
}

/// Swept AABB test: move `moving` by `displacement` against a static `target`.
///
/// Works on the Minkowski sum of the two boxes, so the mover is reduced to a
/// ray from its top-left corner. Returns `None` when the boxes already overlap
/// at the start, when they never touch, or when contact happens after the
/// full displacement.
pub fn sweep(moving: &Rect, displacement: Vec2, target: &Rect) -> Option<SweepHit> {
    let expanded = Rect {
        pos: target.pos - moving.size,
        size: target.size + moving.size,
    };
    let origin = moving.pos;

    let (entry_x, exit_x) = slab(origin.x, displacement.x, expanded.left(), expanded.right())?;
    let (entry_y, exit_y) = slab(origin.y, displacement.y, expanded.top(), expanded.bottom())?;

    let entry = entry_x.max(entry_y);
    let exit = exit_x.min(exit_y);
    if entry >= exit || entry < 0.0 || entry > 1.0 {
        return None;
    }

    let normal = if entry_x > entry_y {
        Vec2::new(-displacement.x.signum(), 0.0)
    } else {
        Vec2::new(0.0, -displacement.y.signum())
    };

    Some(SweepHit {
        time: entry,
        normal,
    })
}

/// Entry/exit times of a 1D ray against the open interval (min, max)
fn slab(origin: f32, delta: f32, min: f32, max: f32) -> Option<(f32, f32)> {
    if delta == 0.0 {
        // Stationary on this axis: either always inside the slab or never
        if origin > min && origin < max {
            Some((f32::NEG_INFINITY, f32::INFINITY))
        } else {
            None
        }
    } else {
        let t1 = (min - origin) / delta;
        let t2 = (max - origin) / delta;
        Some((t1.min(t2), t1.max(t2)))
    }
}
