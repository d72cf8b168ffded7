//! Headless platform
//!
//! Draws into a [`RecordingSurface`] and drives both paddles with a simple
//! autopilot that reads the previous frame's draw calls, the same way a
//! player reads the screen. Reaction noise comes from a seeded PCG so runs
//! are reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::app::{Platform, PlatformEvent};
use crate::game::{Action, ActionSet};
use crate::render::{RecordingSurface, Surface};
use crate::settings::Settings;
use crate::sim::Side;

/// Paddle stops chasing within this distance of its target (units)
const DEADZONE: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prompt {
    Start,
    Paused,
}

/// Where the autopilot saw things last frame
#[derive(Debug, Clone, Copy, Default)]
struct Sighting {
    ball: Option<Vec2>,
    paddles: [Option<Vec2>; 2],
}

impl Sighting {
    /// Classify last frame's regions: the smallest is the ball, tall ones are
    /// paddles, split left/right by the field centre
    fn read(surface: &RecordingSurface) -> Self {
        let mut sighting = Self::default();
        let center_x = surface.window_size().0 as f32 / 2.0;

        let mut smallest = f32::INFINITY;
        for (pos, size, _) in surface.regions() {
            let center = pos + size / 2.0;
            if size.y > size.x * 2.0 {
                let side = if center.x < center_x { Side::Left } else { Side::Right };
                sighting.paddles[side.index()] = Some(center);
            } else if size.x * size.y < smallest {
                smallest = size.x * size.y;
                sighting.ball = Some(center);
            }
        }
        sighting
    }
}

/// Platform with no window: recorded frames and autopilot input
#[derive(Debug)]
pub struct HeadlessPlatform {
    surface: RecordingSurface,
    rng: Pcg32,
    frame: u64,
    max_frames: Option<u64>,
    confirm_delay_frames: u32,
    quit_sent: bool,
    last_ball: Option<Vec2>,
    /// Horizontal travel of the ball between the last two sightings
    last_ball_dx: f32,
    /// Per-paddle aim offset, re-rolled whenever the ball turns around
    aim_error: [f32; 2],
    aim_spread: f32,
}

impl HeadlessPlatform {
    pub fn new(settings: &Settings) -> Self {
        log::debug!("Headless autopilot seeded with {}", settings.autopilot_seed);
        Self {
            surface: RecordingSurface::new(settings.window_width, settings.window_height),
            rng: Pcg32::seed_from_u64(settings.autopilot_seed),
            frame: 0,
            max_frames: settings.max_frames,
            confirm_delay_frames: settings.confirm_delay_frames,
            quit_sent: false,
            last_ball: None,
            last_ball_dx: 0.0,
            aim_error: [0.0; 2],
            aim_spread: settings.paddle_height * 0.75,
        }
    }

    pub fn recording(&self) -> &RecordingSurface {
        &self.surface
    }

    fn reroll_aim(&mut self) {
        for aim in &mut self.aim_error {
            *aim = self.rng.random_range(-self.aim_spread..=self.aim_spread);
        }
    }

    fn steer(&mut self, sighting: &Sighting, actions: &mut ActionSet) {
        let Some(ball) = sighting.ball else {
            return;
        };

        if let Some(last) = self.last_ball {
            let dx = ball.x - last.x;
            if dx != 0.0 {
                if self.last_ball_dx != 0.0 && dx.signum() != self.last_ball_dx.signum() {
                    self.reroll_aim();
                }
                self.last_ball_dx = dx;
            }
        }
        self.last_ball = Some(ball);

        for side in [Side::Left, Side::Right] {
            let Some(paddle) = sighting.paddles[side.index()] else {
                continue;
            };
            let target = ball.y + self.aim_error[side.index()];
            let (up, down) = Action::paddle_controls(side);
            if target < paddle.y - DEADZONE {
                actions.set(up, true);
            } else if target > paddle.y + DEADZONE {
                actions.set(down, true);
            }
        }
    }
}

impl Platform for HeadlessPlatform {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        match self.max_frames {
            Some(max) if self.frame >= max && !self.quit_sent => {
                self.quit_sent = true;
                log::info!("Frame cap {} reached", max);
                Some(PlatformEvent::Quit)
            }
            _ => None,
        }
    }

    fn refresh_actions(&mut self) -> ActionSet {
        self.frame += 1;
        let mut actions = ActionSet::new();

        let prompt = self.surface.texts().find_map(|(text, _)| match text {
            "Press Enter" => Some(Prompt::Start),
            "Paused" => Some(Prompt::Paused),
            _ => None,
        });
        match prompt {
            Some(Prompt::Start) => {
                if self.frame > u64::from(self.confirm_delay_frames) {
                    actions.set(Action::Confirm, true);
                }
            }
            Some(Prompt::Paused) => actions.set(Action::Confirm, true),
            None => {
                let sighting = Sighting::read(&self.surface);
                self.steer(&sighting, &mut actions);
            }
        }
        actions
    }

    fn surface(&mut self) -> &mut dyn Surface {
        &mut self.surface
    }
}
