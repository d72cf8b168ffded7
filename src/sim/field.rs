//! Playing field and goal zones

use glam::Vec2;

use super::aabb::Rect;
use crate::consts::PADDLE_LANE_RATIO;
use crate::error::ConfigError;

/// Horizontal side of the field. Left is player 1, right is player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Index into per-player arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// 1-based player number for display
    pub fn player_number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// The rectangular playing field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub bounds: Rect,
}

impl Field {
    pub fn new(bounds: Rect) -> Result<Self, ConfigError> {
        if bounds.size.x <= 0.0 || bounds.size.y <= 0.0 {
            return Err(ConfigError::EmptyField {
                width: bounds.size.x,
                height: bounds.size.y,
            });
        }
        Ok(Self { bounds })
    }

    /// Field covering a whole window
    pub fn from_window_size(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::new(Rect::new(0.0, 0.0, width as f32, height as f32))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Check if `subject` has crossed the left threshold of the field
    pub fn is_subject_in_left_goal(&self, subject: &Rect) -> bool {
        subject.left() < self.bounds.left()
    }

    /// Check if `subject` has crossed the right threshold of the field.
    ///
    /// Never true while the left predicate holds, so a single ball can never
    /// be in both goals.
    pub fn is_subject_in_right_goal(&self, subject: &Rect) -> bool {
        subject.right() > self.bounds.right() && !self.is_subject_in_left_goal(subject)
    }

    /// Which goal, if any, `subject` is in
    pub fn goal_side(&self, subject: &Rect) -> Option<Side> {
        if self.is_subject_in_left_goal(subject) {
            Some(Side::Left)
        } else if self.is_subject_in_right_goal(subject) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Vertical strip at one end of the field in which that side's paddle is
    /// centred.
    ///
    /// ```text
    ///  ----------------        ----------------
    /// |XXX|            |      |            |XXX|
    /// |XXX|            |      |            |XXX|
    ///  ----------------        ----------------
    ///       Left                    Right
    /// ```
    pub fn paddle_lane(&self, side: Side) -> Rect {
        let lane_width = self.bounds.right() / PADDLE_LANE_RATIO;
        let x = match side {
            Side::Left => self.bounds.left(),
            Side::Right => self.bounds.right() - lane_width,
        };
        Rect::new(x, self.bounds.top(), lane_width, self.bounds.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::from_window_size(800, 600).unwrap()
    }

    #[test]
    fn test_empty_field_rejected() {
        assert!(matches!(
            Field::from_window_size(0, 600),
            Err(ConfigError::EmptyField { .. })
        ));
    }

    #[test]
    fn test_left_goal() {
        let field = field();
        assert!(field.is_subject_in_left_goal(&Rect::new(-0.5, 300.0, 8.0, 8.0)));
        assert!(!field.is_subject_in_left_goal(&Rect::new(0.0, 300.0, 8.0, 8.0)));
        assert_eq!(
            field.goal_side(&Rect::new(-20.0, 300.0, 8.0, 8.0)),
            Some(Side::Left)
        );
    }

    #[test]
    fn test_right_goal() {
        let field = field();
        assert!(field.is_subject_in_right_goal(&Rect::new(793.0, 300.0, 8.0, 8.0)));
        assert!(!field.is_subject_in_right_goal(&Rect::new(792.0, 300.0, 8.0, 8.0)));
        assert_eq!(
            field.goal_side(&Rect::new(800.0, 300.0, 8.0, 8.0)),
            Some(Side::Right)
        );
    }

    #[test]
    fn test_goals_exclusive_for_oversized_subject() {
        let field = field();
        let huge = Rect::new(-10.0, 0.0, 1000.0, 8.0);
        assert!(field.is_subject_in_left_goal(&huge));
        assert!(!field.is_subject_in_right_goal(&huge));
    }

    #[test]
    fn test_paddle_lanes() {
        let field = field();
        let left = field.paddle_lane(Side::Left);
        let right = field.paddle_lane(Side::Right);
        assert!((left.size.x - 800.0 / 6.0).abs() < 1e-3);
        assert_eq!(left.left(), 0.0);
        assert!((right.right() - 800.0).abs() < 1e-3);
        assert_eq!(left.size.y, 600.0);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.player_number(), 2);
    }
}
