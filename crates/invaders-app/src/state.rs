//! State shared between the host's threads and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use invaders_core::events::RoundSummary;
use invaders_core::state::RoundSnapshot;
use invaders_sim::collaborators::RoundOverHandler;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A tap gesture with its tap count.
    Tap(u32),
    /// New lateral acceleration sample (g).
    Tilt(f32),
    /// Change the formation's time-per-step.
    AdjustCadence(f64),
    /// Tear down the current round and start a new one.
    Restart,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// - `command_tx` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `latest_snapshot` is shared with the game loop thread
pub struct AppState {
    /// `None` until the game loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<RoundSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the game loop. Returns `false` if the loop is
    /// not running.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(guard) = self.command_tx.lock() else {
            return false;
        };
        guard.as_ref().is_some_and(|tx| tx.send(command).is_ok())
    }

    /// Copy of the most recent snapshot.
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}

/// Round-over presentation: forwards the final summary over a channel.
pub struct SummaryPresenter {
    tx: mpsc::Sender<RoundSummary>,
}

impl SummaryPresenter {
    pub fn new() -> (Self, mpsc::Receiver<RoundSummary>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl RoundOverHandler for SummaryPresenter {
    fn round_over(&mut self, summary: &RoundSummary) {
        if self.tx.send(*summary).is_err() {
            log::warn!("round-over presenter has no listener");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::enums::RoundOutcome;
    use invaders_core::types::SimTime;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.snapshot().is_none());
        assert!(!state.send(GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_send_forwards_when_connected() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        assert!(state.send(GameLoopCommand::Tap(1)));
        assert_eq!(rx.try_recv(), Ok(GameLoopCommand::Tap(1)));
    }

    #[test]
    fn test_presenter_forwards_summary() {
        let (mut presenter, rx) = SummaryPresenter::new();
        let summary = RoundSummary {
            outcome: RoundOutcome::Breach,
            score: 400,
            ship_health: 0.332,
            time: SimTime::default(),
        };
        presenter.round_over(&summary);
        assert_eq!(rx.try_recv(), Ok(summary));
    }
}
