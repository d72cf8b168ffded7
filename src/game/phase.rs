//! Game phases, triggers and the transition table between them

use crate::error::FsmError;
use crate::fsm::StateMachine;

/// FSM states of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Reserved index 0, never a transition target
    Guard,
    /// Title prompt, waiting for confirm
    Start,
    Playing,
    Paused,
    GameOver,
    /// Absorbing: the loop stops
    Terminate,
}

/// FSM triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    InitDone,
    Quit,
    GameOver,
    Always,
    Pause,
    Resume,
}

pub type GameFsm = StateMachine<GamePhase, Trigger>;

impl GamePhase {
    pub const COUNT: usize = 6;

    pub const ALL: [GamePhase; GamePhase::COUNT] = [
        GamePhase::Guard,
        GamePhase::Start,
        GamePhase::Playing,
        GamePhase::Paused,
        GamePhase::GameOver,
        GamePhase::Terminate,
    ];

    /// Phases a running session can be in, each of which needs a frame handler
    pub fn reachable() -> impl Iterator<Item = GamePhase> {
        Self::ALL.into_iter().filter(|phase| *phase != GamePhase::Guard)
    }
}

impl Trigger {
    pub const COUNT: usize = 6;

    pub const ALL: [Trigger; Trigger::COUNT] = [
        Trigger::InitDone,
        Trigger::Quit,
        Trigger::GameOver,
        Trigger::Always,
        Trigger::Pause,
        Trigger::Resume,
    ];
}

impl From<GamePhase> for usize {
    fn from(phase: GamePhase) -> usize {
        phase as usize
    }
}

impl From<Trigger> for usize {
    fn from(trigger: Trigger) -> usize {
        trigger as usize
    }
}

/// Build the session state machine, starting in [`GamePhase::Start`]
pub fn build_state_machine() -> Result<GameFsm, FsmError> {
    let mut fsm = StateMachine::new(GamePhase::COUNT, Trigger::COUNT, GamePhase::Start)?;

    // Start
    fsm.on(GamePhase::Start, Trigger::Always, GamePhase::Playing)?;
    fsm.on(GamePhase::Start, Trigger::Quit, GamePhase::Terminate)?;

    // Playing
    fsm.on(GamePhase::Playing, Trigger::GameOver, GamePhase::GameOver)?;
    fsm.on(GamePhase::Playing, Trigger::Quit, GamePhase::Terminate)?;
    fsm.on(GamePhase::Playing, Trigger::Pause, GamePhase::Paused)?;

    // Paused
    fsm.on(GamePhase::Paused, Trigger::Quit, GamePhase::Terminate)?;
    fsm.on(GamePhase::Paused, Trigger::Resume, GamePhase::Playing)?;

    // Game over
    fsm.on(GamePhase::GameOver, Trigger::Always, GamePhase::Terminate)?;

    // Terminating
    fsm.on(GamePhase::Terminate, Trigger::Always, GamePhase::Terminate)?;

    Ok(fsm)
}
