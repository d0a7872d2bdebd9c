//! Terminal Snake runner (default binary).
//!
//! The scheduler advances the game every `SNAKE_STEP_MS`, steering with the last
//! arrow key pressed, and silently starts a new game whenever one ends. Quit with
//! `q` or Ctrl-C.

use std::fs::File;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::info;

use tui_snake::engine::TickScheduler;
use tui_snake::input::InputLatch;
use tui_snake::term::{FrameBuffer, TermSessionFactory, TerminalRenderer};
use tui_snake::{GameConfig, TerminalFrames};

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to `SNAKE_LOG_PATH` only; the terminal belongs to the game.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(
        "starting: board {}x{}, cell {}, step {}ms, frame {}ms, seed {}",
        config.dims.width,
        config.dims.height,
        config.dims.cell_size,
        config.step_length_ms,
        config.frame_interval_ms,
        seed
    );

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    let latch = InputLatch::new();
    let mut scheduler = TickScheduler::new(
        TermSessionFactory::new(seed),
        &mut fb,
        config.dims,
        latch.clone(),
    )
    .with_step_length(config.step_length_ms)
    .with_restart_observer(|notice| {
        info!(
            target: "game",
            "game {} over after {} steps",
            notice.ended_generation, notice.session_steps
        );
    });
    term.present(&fb)?;

    let mut frames = TerminalFrames::new(latch, Duration::from_millis(config.frame_interval_ms));
    let handled = scheduler.drive(&mut fb, &mut frames, |fb, outcome| -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((fb.width(), fb.height()));
        if (w, h) != (fb.width(), fb.height()) {
            // Redrawn at the new size by the next advance.
            fb.resize(w, h);
            term.invalidate();
        }
        if outcome.advanced() {
            term.present(fb)?;
        }
        Ok(())
    })?;

    info!(
        "exiting after {} frames, {} steps, {} games",
        handled,
        scheduler.steps(),
        scheduler.generation()
    );
    Ok(())
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1);
    nanos.max(1)
}
