//! Movement cadence: how often the formation takes a step.

/// Time-per-step for the formation and when it last moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cadence {
    time_per_move: f64,
    last_move_at: f64,
}

impl Cadence {
    pub fn new(time_per_move: f64) -> Self {
        Self {
            time_per_move,
            last_move_at: 0.0,
        }
    }

    pub fn time_per_move(&self) -> f64 {
        self.time_per_move
    }

    /// Whether a movement tick is due at simulation time `now`.
    pub fn is_due(&self, now: f64) -> bool {
        now - self.last_move_at >= self.time_per_move
    }

    /// Record that the formation moved at `now`.
    pub fn mark_moved(&mut self, now: f64) {
        self.last_move_at = now;
    }

    /// Switch to a new time-per-step.
    ///
    /// Returns the factor by which animation playback rates must be
    /// multiplied (`old / new`) to keep each invader's animation phase, or
    /// `None` if either cadence is not strictly positive. A rejected
    /// request leaves the cadence unchanged.
    pub fn rescale(&mut self, time_per_move: f64) -> Option<f32> {
        if self.time_per_move <= 0.0 || !(time_per_move > 0.0) {
            log::debug!(
                "rejected cadence rescale {} -> {}",
                self.time_per_move,
                time_per_move
            );
            return None;
        }
        let ratio = (self.time_per_move / time_per_move) as f32;
        self.time_per_move = time_per_move;
        Some(ratio)
    }
}
