//! invaders: play one headless round with the scripted pilot.
//!
//! Usage: invaders [--realtime] [CONFIG.json]
//!
//! Prints the round summary as JSON on stdout. `RUST_LOG` controls logging.

use std::path::PathBuf;
use std::process;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use invaders_app::game_loop::{spawn_game_loop, Pacing};
use invaders_app::pilot;
use invaders_app::state::{AppState, GameLoopCommand, SummaryPresenter};
use invaders_core::config::RoundConfig;
use invaders_core::events::RoundSummary;

/// How often the pilot looks at the playfield.
const PILOT_INTERVAL: Duration = Duration::from_millis(2);

fn main() {
    env_logger::init();

    let mut pacing = Pacing::Unpaced;
    let mut config_path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => pacing = Pacing::RealTime,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(2);
            }
            path => config_path = Some(PathBuf::from(path)),
        }
    }

    let config = match config_path {
        Some(path) => match RoundConfig::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => RoundConfig::default(),
    };

    match play(config, pacing) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: invaders [--realtime] [CONFIG.json]");
}

/// Run one round to completion with the scripted pilot.
fn play(config: RoundConfig, pacing: Pacing) -> std::io::Result<RoundSummary> {
    let state = AppState::new();
    let (presenter, summaries) = SummaryPresenter::new();
    let (tx, handle) = spawn_game_loop(
        config,
        pacing,
        presenter,
        Arc::clone(&state.latest_snapshot),
    )?;
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(tx);
    }

    let summary = loop {
        match summaries.recv_timeout(PILOT_INTERVAL) {
            Ok(summary) => break summary,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                return Err(std::io::Error::other("game loop exited before the round ended"));
            }
        }
        if let Some(snapshot) = state.snapshot() {
            for command in pilot::steer(&snapshot) {
                state.send(command);
            }
        }
    };

    state.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        return Err(std::io::Error::other("game loop panicked"));
    }
    Ok(summary)
}
