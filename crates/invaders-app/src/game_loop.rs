//! Game loop thread: runs the simulation engine at its tick rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via an `mpsc` channel; the latest snapshot is stored in
//! shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use invaders_core::config::RoundConfig;
use invaders_core::constants::DT;
use invaders_core::state::RoundSnapshot;
use invaders_sim::SimulationEngine;

use crate::host::Host;
use crate::sensor::{tilt_sensor, TiltHandle};
use crate::state::{GameLoopCommand, SummaryPresenter};

/// How the loop spaces its ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep so ticks track wall-clock time.
    RealTime,
    /// Tick as fast as possible.
    Unpaced,
}

/// Spawn the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: RoundConfig,
    pacing: Pacing,
    presenter: SummaryPresenter,
    latest_snapshot: Arc<Mutex<Option<RoundSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("invaders-game-loop".into())
        .spawn(move || {
            run_game_loop(config, pacing, presenter, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    config: RoundConfig,
    pacing: Pacing,
    presenter: SummaryPresenter,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<RoundSnapshot>>,
) {
    let (sensor, tilt) = tilt_sensor();
    let mut engine = SimulationEngine::new(config)
        .with_sensor(sensor)
        .with_round_over_handler(presenter);
    let mut host = Host::new(&engine);
    engine.start_round();

    let tick_duration = Duration::try_from_secs_f64(engine.config().tick_dt)
        .unwrap_or_else(|_| Duration::from_secs_f64(DT));
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Shutdown) => return,
                Ok(command) => apply(command, &mut engine, &mut host, &tilt),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick, then let the collaborators react
        let snapshot = engine.tick();
        let dt = engine.config().tick_dt;
        host.after_tick(&mut engine, &snapshot, dt);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        if pacing == Pacing::RealTime {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind; reset instead of catching up.
                next_tick_time = now;
            }
        }
    }
}

fn apply(
    command: GameLoopCommand,
    engine: &mut SimulationEngine,
    host: &mut Host,
    tilt: &TiltHandle,
) {
    match command {
        GameLoopCommand::Tap(count) => engine.tap_producer().tap(count),
        GameLoopCommand::Tilt(sample) => tilt.set(sample),
        GameLoopCommand::AdjustCadence(secs) => {
            if !engine.adjust_invader_cadence(secs) {
                log::debug!("ignored cadence {secs}");
            }
        }
        GameLoopCommand::Restart => {
            engine.reset();
            host.reset();
            engine.start_round();
        }
        GameLoopCommand::Shutdown => {}
    }
}
