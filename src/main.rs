use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bug_crossing::compute::{handle_input, init_state, play_again, tick};
use bug_crossing::display::{self, Viewport};
use bug_crossing::entities::{GameEvent, GameState};
use bug_crossing::input::direction_for;
use bug_crossing::terminal::TerminalGuard;
use bug_crossing::{logging, GameConfig};

#[derive(Parser, Debug)]
#[command(about = "Cross the bug lanes to reach the water", version)]
struct Args {
    /// TOML file overriding the default tuning.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Seed for enemy lanes and speeds.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the effective config as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  Each frame drains pending key presses,
/// advances the world by the real time elapsed since the previous frame and
/// redraws.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let frame_budget = Duration::from_millis(state.config.frame_ms);
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                KeyCode::Char('r') | KeyCode::Char('R') if !state.player.is_playing() => {
                    *state = play_again(state);
                }
                _ => {
                    if let Some(direction) = direction_for(code) {
                        *state = handle_input(state, direction);
                    }
                }
            }
        }

        // ── Advance the world ────────────────────────────────────────────────
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f64();
        last = now;
        let (next, events) = tick(state, dt, rng);
        *state = next;
        if events.contains(&GameEvent::GameOver) {
            info!("no hearts left after {} frames", state.frame);
        }

        let (cols, rows) = terminal::size()?;
        display::render(out, state, Viewport::new(cols, rows))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    logging::init(args.log_file.as_deref()).context("opening log file")?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("starting with {:?}", config);

    let mut term = TerminalGuard::new(BufWriter::new(stdout()));
    term.enter()?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let mut state = init_state(config, &mut rng);
    let result = game_loop(term.writer(), &mut state, &rx, &mut rng);

    // Restore the terminal before anything is reported
    drop(term);

    info!("exiting on frame {}", state.frame);
    result.context("game loop failed")
}
