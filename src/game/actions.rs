//! Boolean input action vector
//!
//! The platform refreshes one of these per frame; the game never looks at
//! raw device state.

use crate::sim::Side;

/// Logical input actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
    Confirm,
    Pause,
    Quit,
}

impl Action {
    pub const COUNT: usize = 7;

    pub const ALL: [Action; Action::COUNT] = [
        Action::P1Up,
        Action::P1Down,
        Action::P2Up,
        Action::P2Down,
        Action::Confirm,
        Action::Pause,
        Action::Quit,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// (up, down) actions steering the paddle on `side`
    pub fn paddle_controls(side: Side) -> (Action, Action) {
        match side {
            Side::Left => (Action::P1Up, Action::P1Down),
            Side::Right => (Action::P2Up, Action::P2Down),
        }
    }
}

/// Which actions are held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet {
    held: [bool; Action::COUNT],
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set with exactly the given actions held
    pub fn with(actions: &[Action]) -> Self {
        let mut set = Self::new();
        for &action in actions {
            set.set(action, true);
        }
        set
    }

    #[inline]
    pub fn pressed(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn set(&mut self, action: Action, held: bool) {
        self.held[action.index()] = held;
    }

    pub fn clear(&mut self) {
        self.held = [false; Action::COUNT];
    }

    /// Vertical steering for the paddle on `side`: -1 up, 1 down, 0 when
    /// neither or both are held
    pub fn paddle_axis(&self, side: Side) -> f32 {
        let (up, down) = Action::paddle_controls(side);
        self.pressed(down) as i8 as f32 - self.pressed(up) as i8 as f32
    }

    pub fn any(&self) -> bool {
        self.held.iter().any(|&held| held)
    }
}
