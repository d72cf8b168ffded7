//! Game session state
//!
//! Everything a running game mutates lives in [`GameSession`]: the field,
//! the entity pool, both players, the phase machine and the prompt
//! animations. Frame handlers receive it by `&mut`; there is no global state.

use glam::Vec2;

use super::actions::ActionSet;
use super::phase::{GameFsm, GamePhase, Trigger, build_state_machine};
use crate::app::PlatformEvent;
use crate::consts::{PULSE_MAX_ALPHA, PULSE_MIN_ALPHA, PULSE_SPEED, PULSE_START_ALPHA};
use crate::error::ConfigError;
use crate::settings::Settings;
use crate::sim::{self, CollisionEvents, Entity, EntityPool, Field, Side};

/// A player's running score. Only goals change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Player {
    score: u16,
}

impl Player {
    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn inc_score(&mut self) {
        self.score = self.score.saturating_add(1);
    }
}

/// Alpha value bouncing between two bounds at a signed rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    alpha: f32,
    /// Alpha units per second; flips sign at the bounds
    rate: f32,
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            alpha: PULSE_START_ALPHA,
            rate: PULSE_SPEED,
        }
    }
}

impl Pulse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        if self.alpha <= PULSE_MIN_ALPHA {
            self.rate = PULSE_SPEED;
        } else if self.alpha >= PULSE_MAX_ALPHA {
            self.rate = -PULSE_SPEED;
        }
        self.alpha = (self.alpha + self.rate * dt).clamp(0.0, 255.0);
    }

    pub fn alpha(&self) -> u8 {
        self.alpha.round() as u8
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }
}

/// A single game session
#[derive(Debug, Clone)]
pub struct GameSession {
    pub field: Field,
    pub pool: EntityPool,
    /// Configured start state the ball returns to after each goal
    ball_spawn: Entity,
    players: [Player; 2],
    fsm: GameFsm,
    pub start_pulse: Pulse,
    pub pause_pulse: Pulse,
    paddle_speed: f32,
    winning_score: u16,
}

impl GameSession {
    /// Configure the field and entities for a window of `window_size`
    pub fn new(settings: &Settings, window_size: (u32, u32)) -> Result<Self, ConfigError> {
        settings.validate()?;
        let field = Field::from_window_size(window_size.0, window_size.1)?;
        if settings.paddle_height + settings.ball_size > field.bounds.size.y {
            return Err(ConfigError::InvalidSettings(format!(
                "paddle height {} plus ball size {} exceeds field height {}",
                settings.paddle_height, settings.ball_size, field.bounds.size.y
            )));
        }

        let ball_spawn = Entity::ball(&field, settings.ball_size, settings.ball_velocity);
        let paddle_size = settings.paddle_size();
        let pool = EntityPool::new(
            ball_spawn,
            Entity::paddle(&field, Side::Left, paddle_size),
            Entity::paddle(&field, Side::Right, paddle_size),
        );

        let fsm = build_state_machine()?;

        log::debug!(
            "Session configured: field {}x{}, first to {}",
            field.bounds.size.x,
            field.bounds.size.y,
            settings.winning_score
        );

        Ok(Self {
            field,
            pool,
            ball_spawn,
            players: [Player::default(); 2],
            fsm,
            start_pulse: Pulse::new(),
            pause_pulse: Pulse::new(),
            paddle_speed: settings.paddle_speed,
            winning_score: settings.winning_score,
        })
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.fsm.state()
    }

    /// Feed a trigger to the phase machine. Returns whether it was handled.
    pub fn fire(&mut self, trigger: Trigger) -> bool {
        let from = self.fsm.state();
        let handled = self.fsm.trigger(trigger);
        let to = self.fsm.state();
        if from != to {
            log::debug!("Phase {:?} -> {:?} on {:?}", from, to, trigger);
        }
        handled
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// (player 1, player 2) scores
    pub fn scores(&self) -> (u16, u16) {
        (
            self.player(Side::Left).score(),
            self.player(Side::Right).score(),
        )
    }

    pub fn ball_spawn(&self) -> &Entity {
        &self.ball_spawn
    }

    /// Turn held directions into paddle velocities
    pub fn apply_paddle_input(&mut self, actions: &ActionSet) {
        for side in [Side::Left, Side::Right] {
            let vy = actions.paddle_axis(side) * self.paddle_speed;
            self.pool.paddle_mut(side).vel = Vec2::new(0.0, vy);
        }
    }

    /// Integrate and resolve collisions for one frame
    pub fn simulate(&mut self, dt: f32) -> CollisionEvents {
        let events = sim::step(&mut self.pool, &self.field, dt);
        if !events.is_empty() {
            log::trace!(
                "Collisions: {} paddle hits, {} wall bounces",
                events.paddle_hits,
                events.wall_bounces
            );
        }
        events
    }

    /// Score a goal if the ball is in one. Returns the side that scored.
    pub fn check_goals(&mut self) -> Option<Side> {
        let goal = self.field.goal_side(&self.pool.ball().rect())?;
        let scorer = goal.opposite();
        self.players[scorer.index()].inc_score();
        *self.pool.ball_mut() = self.ball_spawn;

        let (p1, p2) = self.scores();
        log::debug!(
            "Goal! Player {} scores ({} - {})",
            scorer.player_number(),
            p1,
            p2
        );
        Some(scorer)
    }

    /// Side that has reached the winning score, if any
    pub fn winner(&self) -> Option<Side> {
        [Side::Left, Side::Right]
            .into_iter()
            .find(|side| self.player(*side).score() >= self.winning_score)
    }

    /// React to a raw platform event
    pub fn process_event(&mut self, event: &PlatformEvent) {
        match event {
            PlatformEvent::FocusLost => {
                if self.phase() == GamePhase::Playing {
                    self.fire(Trigger::Pause);
                    log::info!("Auto-paused (focus lost)");
                }
            }
            PlatformEvent::Quit | PlatformEvent::Other => {}
        }
    }
}
