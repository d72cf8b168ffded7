//! Paddle Pong - a two-player paddle-and-ball game
//!
//! Core modules:
//! - `fsm`: Generic table-driven state machine
//! - `sim`: Entities, AABB geometry, collision pipeline
//! - `game`: Game phases, session state and per-phase frame handlers
//! - `app`: Frame loop, timing and pacing
//! - `render`: Render surface boundary
//! - `settings`: Serde-backed configuration

pub mod app;
pub mod error;
pub mod fsm;
pub mod game;
pub mod headless;
pub mod render;
pub mod settings;
pub mod sim;

pub use app::{App, Clock, Platform, PlatformEvent, SystemClock};
pub use error::{ConfigError, FsmError, SettingsError};
pub use fsm::StateMachine;
pub use game::{Action, ActionSet, GamePhase, GameSession, HandlerTable, Trigger};
pub use render::{Color, DrawCommand, RecordingSurface, Surface};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frame budget for 60 Hz pacing, in milliseconds
    pub const FRAME_BUDGET_MS: f32 = 16.666;
    /// Largest delta time fed to the simulation (seconds)
    pub const MAX_DELTA: f32 = 0.25;

    /// Default field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddles sit centered in a lane this many times narrower than the field
    pub const PADDLE_LANE_RATIO: f32 = 6.0;
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 128.0;
    /// Vertical paddle speed while a direction is held (units/second)
    pub const PADDLE_SPEED: f32 = 200.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 8.0;
    pub const BALL_START_VX: f32 = 300.0;
    pub const BALL_START_VY: f32 = 180.0;

    /// First player to this score wins
    pub const WINNING_SCORE: u16 = 5;

    /// Prompt pulse animation (alpha units, alpha units/second)
    pub const PULSE_MIN_ALPHA: f32 = 60.0;
    pub const PULSE_MAX_ALPHA: f32 = 236.0;
    pub const PULSE_SPEED: f32 = 301.0;
    pub const PULSE_START_ALPHA: f32 = 100.0;

    /// Alpha used for the frozen playfield behind the pause prompt
    pub const FADED_ALPHA: u8 = 90;

    /// Horizontal offset of each score from the field centre
    pub const SCORE_OFFSET_X: f32 = 48.0;
    pub const SCORE_Y: f32 = 16.0;
}

/// Clamp a raw frame delta to the range the simulation accepts.
///
/// Negative or NaN deltas (clock anomalies) become zero so motion never runs
/// backwards.
#[inline]
pub fn clamp_delta(dt: f32, max_delta: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max_delta)
    }
}
