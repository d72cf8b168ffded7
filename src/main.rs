//! Paddle Pong entry point
//!
//! Runs a headless game with both paddles on autopilot. An optional first
//! argument names a JSON settings file.

use anyhow::{Context, Result};

use paddle_pong::headless::HeadlessPlatform;
use paddle_pong::{App, GameSession, HandlerTable, Platform, Settings, Surface, SystemClock};

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        return Settings::default();
    };
    match Settings::load_from(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings from {}: {}, using defaults", path, e);
            Settings::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Paddle Pong (headless) starting...");

    let settings = load_settings();
    settings.validate().context("invalid settings")?;

    let mut platform = HeadlessPlatform::new(&settings);
    let window_size = platform.surface().window_size();
    let mut session =
        GameSession::new(&settings, window_size).context("failed to set up game session")?;
    let handlers = HandlerTable::standard().context("incomplete frame handler table")?;

    let mut app = App::new(&settings);
    let mut clock = SystemClock::new();
    let frames = app.run(&mut session, handlers, &mut platform, &mut clock);

    let (p1, p2) = session.scores();
    log::info!(
        "Finished after {} frames in {:?}: Player 1 {} - {} Player 2",
        frames,
        session.phase(),
        p1,
        p2
    );
    Ok(())
}
