//! Terminal runner (default binary).
//!
//! Owns the frame loop: it polls crossterm for key events, advances the
//! gravity clock, feeds both into the session and redraws. Game-over policy
//! (restart or quit) lives here, not in the engine.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::core::{GameConfig, GameSession, GravityClock};
use blockfall::input::{handle_key_event, should_quit, should_restart};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS, TICK_MS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the piece sequence. A random seed is used when omitted.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Milliseconds per gravity step.
    #[arg(long, default_value_t = DROP_INTERVAL_MS)]
    drop_interval_ms: u32,
    /// Board width in cells.
    #[arg(long, default_value_t = BOARD_WIDTH, value_parser = clap::value_parser!(u8).range(4..))]
    width: u8,
    /// Board height in cells.
    #[arg(long, default_value_t = BOARD_HEIGHT, value_parser = clap::value_parser!(u8).range(4..))]
    height: u8,
    /// Write logs to this file. Nothing is logged when omitted.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = GameConfig {
        width: args.width,
        height: args.height,
        drop_interval_ms: args.drop_interval_ms,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, args.seed);

    // Always try to restore terminal state.
    let _ = term.exit();

    let final_score = result?;
    println!("Score: {final_score}");
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn new_session(config: GameConfig, seed: Option<u64>) -> GameSession {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, width = config.width, height = config.height, "new session");
    GameSession::new(config, seed)
}

/// Returns the score of the last session.
fn run(term: &mut TerminalRenderer, config: GameConfig, seed: Option<u64>) -> Result<u32> {
    let mut session = new_session(config, seed);
    let mut clock = GravityClock::new(config.drop_interval_ms);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(session.score());
                    }
                    if session.is_game_over() {
                        if should_restart(key) {
                            // Same seed only when one was pinned on the command line.
                            session = new_session(config, seed);
                            clock.reset();
                        }
                    } else if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let fired = clock.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);
            session.tick(fired);
        }
    }
}
