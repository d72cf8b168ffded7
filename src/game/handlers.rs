//! Per-phase frame handlers
//!
//! Each reachable [`GamePhase`] maps to one plain function that advances the
//! session by a frame and draws it. The table is checked once at
//! construction so the loop never has to guess.

use glam::Vec2;

use super::actions::{Action, ActionSet};
use super::phase::{GamePhase, Trigger};
use super::session::GameSession;
use crate::consts::{FADED_ALPHA, SCORE_OFFSET_X, SCORE_Y};
use crate::error::ConfigError;
use crate::render::{Color, Surface};
use crate::sim::Side;

/// Whether the loop keeps going after this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Per-frame inputs handed to a handler
pub struct FrameContext<'a> {
    /// Clamped seconds since the previous frame
    pub dt: f32,
    pub actions: ActionSet,
    pub surface: &'a mut dyn Surface,
}

pub type FrameHandler = fn(&mut GameSession, &mut FrameContext<'_>) -> Flow;

/// Phase -> handler mapping
#[derive(Clone, Copy)]
pub struct HandlerTable {
    handlers: [Option<FrameHandler>; GamePhase::COUNT],
}

impl std::fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registered: Vec<GamePhase> = GamePhase::ALL
            .into_iter()
            .filter(|phase| self.handlers[usize::from(*phase)].is_some())
            .collect();
        f.debug_struct("HandlerTable")
            .field("registered", &registered)
            .finish()
    }
}

impl HandlerTable {
    pub fn empty() -> Self {
        Self {
            handlers: [None; GamePhase::COUNT],
        }
    }

    /// Install `handler` for `phase`, replacing any previous one
    pub fn register(&mut self, phase: GamePhase, handler: FrameHandler) -> &mut Self {
        self.handlers[usize::from(phase)] = Some(handler);
        self
    }

    /// Every reachable phase must have a handler
    pub fn validate(&self) -> Result<(), ConfigError> {
        match GamePhase::reachable().find(|phase| self.handlers[usize::from(*phase)].is_none()) {
            Some(phase) => Err(ConfigError::MissingHandler(phase)),
            None => Ok(()),
        }
    }

    /// The game's handlers, validated
    pub fn standard() -> Result<Self, ConfigError> {
        let mut table = Self::empty();
        table
            .register(GamePhase::Start, start_frame)
            .register(GamePhase::Playing, playing_frame)
            .register(GamePhase::Paused, pause_frame)
            .register(GamePhase::GameOver, game_over_frame)
            .register(GamePhase::Terminate, terminate_frame);
        table.validate()?;
        Ok(table)
    }

    /// Run the handler for the session's current phase
    pub fn dispatch(&self, session: &mut GameSession, ctx: &mut FrameContext<'_>) -> Flow {
        let phase = session.phase();
        match self.handlers[usize::from(phase)] {
            Some(handler) => handler(session, ctx),
            None => {
                log::error!("No frame handler for phase {:?}", phase);
                debug_assert!(false, "no frame handler for phase {:?}", phase);
                Flow::Continue
            }
        }
    }
}

fn start_frame(session: &mut GameSession, ctx: &mut FrameContext<'_>) -> Flow {
    if ctx.actions.pressed(Action::Confirm) {
        session.fire(Trigger::Always);
    } else if ctx.actions.pressed(Action::Quit) {
        session.fire(Trigger::Quit);
    }

    session.start_pulse.advance(ctx.dt);
    let alpha = session.start_pulse.alpha();
    ctx.surface.draw_text(
        "Press Enter",
        session.field.center(),
        Color::WHITE.with_alpha(alpha),
    );
    Flow::Continue
}

fn playing_frame(session: &mut GameSession, ctx: &mut FrameContext<'_>) -> Flow {
    if ctx.actions.pressed(Action::Quit) {
        session.fire(Trigger::Quit);
    } else if ctx.actions.pressed(Action::Pause) {
        session.fire(Trigger::Pause);
    }

    session.apply_paddle_input(&ctx.actions);
    session.simulate(ctx.dt);
    session.check_goals();
    // Every Playing frame, not just goal frames: a win scored while pausing
    // fires on resume.
    if session.phase() == GamePhase::Playing && session.winner().is_some() {
        session.fire(Trigger::GameOver);
    }

    draw_playfield(session, ctx.surface, u8::MAX);
    Flow::Continue
}

fn pause_frame(session: &mut GameSession, ctx: &mut FrameContext<'_>) -> Flow {
    if ctx.actions.pressed(Action::Confirm) {
        session.fire(Trigger::Resume);
    } else if ctx.actions.pressed(Action::Quit) {
        session.fire(Trigger::Quit);
    }

    draw_playfield(session, ctx.surface, FADED_ALPHA);
    session.pause_pulse.advance(ctx.dt);
    let alpha = session.pause_pulse.alpha();
    ctx.surface
        .draw_text("Paused", session.field.center(), Color::WHITE.with_alpha(alpha));
    Flow::Continue
}

fn game_over_frame(session: &mut GameSession, ctx: &mut FrameContext<'_>) -> Flow {
    let line = match session.winner() {
        Some(side) => format!("Player {} wins", side.player_number()),
        None => "Game over".to_string(),
    };
    let (p1, p2) = session.scores();
    log::info!("{} ({} - {})", line, p1, p2);

    draw_playfield(session, ctx.surface, FADED_ALPHA);
    ctx.surface
        .draw_text(&line, session.field.center(), Color::WHITE);
    session.fire(Trigger::Always);
    Flow::Continue
}

fn terminate_frame(_session: &mut GameSession, _ctx: &mut FrameContext<'_>) -> Flow {
    Flow::Stop
}

/// Ball, paddles and both scores
fn draw_playfield(session: &GameSession, surface: &mut dyn Surface, alpha: u8) {
    let color = Color::WHITE.with_alpha(alpha);
    for entity in session.pool.iter() {
        surface.draw_region(entity.pos, entity.size, color);
    }

    let center_x = session.field.center().x;
    for (side, x) in [
        (Side::Left, center_x - SCORE_OFFSET_X),
        (Side::Right, center_x + SCORE_OFFSET_X),
    ] {
        surface.draw_text(
            &session.player(side).score().to_string(),
            Vec2::new(x, SCORE_Y),
            color,
        );
    }
}
