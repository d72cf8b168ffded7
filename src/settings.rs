//! Game settings
//!
//! Loaded from a JSON file when one is given on the command line; every
//! field falls back to its default when missing.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, SettingsError};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window / field ===
    pub window_width: u32,
    pub window_height: u32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Vertical speed while a direction is held (units/second)
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Velocity the ball starts with and is reset to after a goal
    pub ball_velocity: Vec2,

    // === Rules ===
    pub winning_score: u16,

    // === Timing ===
    /// Frame budget in milliseconds (60 Hz by default)
    pub frame_budget_ms: f32,
    /// Largest delta time handed to the simulation, in seconds
    pub max_delta: f32,

    // === Headless driver ===
    pub autopilot_seed: u64,
    /// Frames the autopilot waits on the start screen before confirming
    pub confirm_delay_frames: u32,
    /// Stop after this many frames (sent as an OS-level quit)
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: FIELD_WIDTH as u32,
            window_height: FIELD_HEIGHT as u32,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            ball_velocity: Vec2::new(BALL_START_VX, BALL_START_VY),

            winning_score: WINNING_SCORE,

            frame_budget_ms: FRAME_BUDGET_MS,
            max_delta: MAX_DELTA,

            autopilot_seed: 12345,
            confirm_delay_frames: 30,
            max_frames: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Reject settings the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid =
            |reason: String| -> Result<(), ConfigError> { Err(ConfigError::InvalidSettings(reason)) };

        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::EmptyField {
                width: self.window_width as f32,
                height: self.window_height as f32,
            });
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return invalid(format!(
                "paddle size must be positive, got {}x{}",
                self.paddle_width, self.paddle_height
            ));
        }
        if self.ball_size <= 0.0 {
            return invalid(format!("ball size must be positive, got {}", self.ball_size));
        }
        if self.paddle_height + self.ball_size > self.window_height as f32 {
            return invalid(format!(
                "paddle height {} plus ball size {} exceeds field height {}",
                self.paddle_height, self.ball_size, self.window_height
            ));
        }
        if !self.paddle_speed.is_finite() || self.paddle_speed < 0.0 {
            return invalid(format!("bad paddle speed {}", self.paddle_speed));
        }
        if !self.ball_velocity.is_finite() {
            return invalid("ball velocity must be finite".to_string());
        }
        if self.winning_score == 0 {
            return invalid("winning score must be at least 1".to_string());
        }
        if self.frame_budget_ms < 0.0 || self.max_delta <= 0.0 {
            return invalid(format!(
                "bad timing: frame budget {}ms, max delta {}s",
                self.frame_budget_ms, self.max_delta
            ));
        }
        Ok(())
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }
}
