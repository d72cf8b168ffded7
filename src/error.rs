//! Error types
//!
//! Everything here is a setup-time failure. Nothing raised during a frame is
//! an error: unmapped triggers are no-ops and a phase without a handler is
//! logged and skipped.

use std::fmt;

use crate::game::GamePhase;

/// State machine construction and registration failures
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FsmError {
    /// State or trigger count was zero
    EmptyUniverse { state_count: usize, trigger_count: usize },
    StateOutOfRange { state: usize, state_count: usize },
    TriggerOutOfRange { trigger: usize, trigger_count: usize },
}

impl fmt::Display for FsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUniverse {
                state_count,
                trigger_count,
            } => write!(
                f,
                "state machine needs at least one state and trigger (got {state_count} states, {trigger_count} triggers)"
            ),
            Self::StateOutOfRange { state, state_count } => {
                write!(f, "state {state} out of range (0..{state_count})")
            }
            Self::TriggerOutOfRange {
                trigger,
                trigger_count,
            } => write!(f, "trigger {trigger} out of range (0..{trigger_count})"),
        }
    }
}

impl std::error::Error for FsmError {}

/// Game session configuration failures
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    Fsm(FsmError),
    /// A reachable phase has no frame handler registered
    MissingHandler(GamePhase),
    /// Playing field has no area
    EmptyField { width: f32, height: f32 },
    InvalidSettings(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fsm(err) => write!(f, "state table: {err}"),
            Self::MissingHandler(phase) => write!(f, "no frame handler for phase {phase:?}"),
            Self::EmptyField { width, height } => {
                write!(f, "playing field must have positive size, got {width}x{height}")
            }
            Self::InvalidSettings(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fsm(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FsmError> for ConfigError {
    fn from(err: FsmError) -> Self {
        Self::Fsm(err)
    }
}

/// Settings file failures
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read settings: {err}"),
            Self::Parse(err) => write!(f, "cannot parse settings: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fsm_error_display() {
        let err = FsmError::StateOutOfRange {
            state: 9,
            state_count: 6,
        };
        assert_eq!(err.to_string(), "state 9 out of range (0..6)");
    }

    #[test]
    fn test_config_error_wraps_fsm_error() {
        let err: ConfigError = FsmError::EmptyUniverse {
            state_count: 0,
            trigger_count: 3,
        }
        .into();
        assert!(matches!(err, ConfigError::Fsm(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
