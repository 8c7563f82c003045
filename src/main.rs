//! Terminal runner (default binary).
//!
//! Owns the wall clock: polls crossterm for keys until the next frame is due,
//! forwards intents to the core, feeds real elapsed time into `tick`, and
//! redraws. Game events become log lines and, with `--bell`,
//! a terminal bell.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use starfall::core::{GameConfig, GameSnapshot, GameState};
use starfall::input::{handle_key_event, should_quit};
use starfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use starfall::types::{GameEvent, DEFAULT_COLS, DEFAULT_ROWS, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "starfall", version, about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Piece RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs to this file (filter via RUST_LOG, default "info")
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Ring the terminal bell on line clears and game over
    #[arg(long)]
    bell: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = GameConfig::new(args.cols, args.rows).context("invalid grid size")?;
    let seed = args.seed.unwrap_or_else(time_seed);
    info!("seed {}", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, GameState::with_config(config, seed), args.bell);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The terminal is in raw/alternate-screen mode, so logs only go to a file.
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut game: GameState, bell: bool) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let events = game.apply_action(action);
                        cue(term, &events, bell)?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            let events = game.tick(ms);
            cue(term, &events, bell)?;
        }
    }
}

/// Presentation-side reaction to core events.
fn cue(term: &mut TerminalRenderer, events: &[GameEvent], bell: bool) -> Result<()> {
    for event in events {
        info!("event: {:?}", event);
        if bell && matches!(event, GameEvent::LinesCleared(_) | GameEvent::GameOver) {
            term.bell()?;
        }
    }
    Ok(())
}
