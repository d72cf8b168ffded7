//! Game orchestration: phases, session state, input actions and the
//! per-phase frame handlers

pub mod actions;
pub mod handlers;
pub mod phase;
pub mod session;

pub use actions::{Action, ActionSet};
pub use handlers::{Flow, FrameContext, FrameHandler, HandlerTable};
pub use phase::{GameFsm, GamePhase, Trigger, build_state_machine};
pub use session::{GameSession, Player, Pulse};
