//! Frame loop
//!
//! One iteration: drain platform events, refresh the action vector, run the
//! current phase's handler against the surface, present, then sleep off
//! whatever is left of the frame budget.

use std::time::{Duration, Instant};

use crate::clamp_delta;
use crate::game::{ActionSet, Flow, FrameContext, GameSession, HandlerTable};
use crate::render::Surface;
use crate::settings::Settings;

/// Raw events coming from the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// OS-level quit (window closed). Not the same as `Action::Quit`.
    Quit,
    /// Window lost focus or was hidden
    FocusLost,
    Other,
}

/// Input/output host the loop runs against
pub trait Platform {
    /// Next pending event, without blocking
    fn poll_event(&mut self) -> Option<PlatformEvent>;
    /// Current held actions, called once per frame after events are drained
    fn refresh_actions(&mut self) -> ActionSet;
    fn surface(&mut self) -> &mut dyn Surface;
}

/// Time source for frame pacing
pub trait Clock {
    /// Monotonic time since an arbitrary origin
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Loop state
#[derive(Debug, Clone)]
pub struct App {
    running: bool,
    frame_budget: Duration,
    max_delta: f32,
    frames: u64,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            running: false,
            frame_budget: Duration::from_secs_f32(settings.frame_budget_ms.max(0.0) / 1000.0),
            max_delta: settings.max_delta,
            frames: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run until the session terminates or the platform quits.
    /// Returns the number of frames run.
    pub fn run(
        &mut self,
        session: &mut GameSession,
        handlers: HandlerTable,
        platform: &mut dyn Platform,
        clock: &mut dyn Clock,
    ) -> u64 {
        log::info!("Frame loop starting (budget {:?})", self.frame_budget);
        self.running = true;
        let started = self.frames;
        let mut last_frame = clock.now();

        while self.running {
            let frame_start = clock.now();
            let raw_dt = frame_start
                .checked_sub(last_frame)
                .unwrap_or_default()
                .as_secs_f32();
            last_frame = frame_start;

            self.run_frame(session, &handlers, platform, clamp_delta(raw_dt, self.max_delta));

            let elapsed = clock.now().saturating_sub(frame_start);
            let remaining = self.frame_budget.saturating_sub(elapsed);
            if !remaining.is_zero() {
                clock.sleep(remaining);
            }
        }

        let ran = self.frames - started;
        log::info!("Frame loop stopped after {} frames in {:?}", ran, session.phase());
        ran
    }

    /// Process a single frame with an already-clamped delta
    pub fn run_frame(
        &mut self,
        session: &mut GameSession,
        handlers: &HandlerTable,
        platform: &mut dyn Platform,
        dt: f32,
    ) -> Flow {
        while let Some(event) = platform.poll_event() {
            match event {
                PlatformEvent::Quit => {
                    log::info!("Quit requested by platform");
                    self.running = false;
                }
                other => session.process_event(&other),
            }
        }

        let actions = platform.refresh_actions();
        let surface = platform.surface();
        surface.clear();
        let mut ctx = FrameContext {
            dt,
            actions,
            surface,
        };
        let flow = handlers.dispatch(session, &mut ctx);
        ctx.surface.present();

        if flow == Flow::Stop {
            self.running = false;
        }
        self.frames += 1;
        if self.frames % 600 == 0 {
            let (p1, p2) = session.scores();
            log::trace!("Frame {}: {:?}, score {} - {}", self.frames, session.phase(), p1, p2);
        }
        flow
    }
}
