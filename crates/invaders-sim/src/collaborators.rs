//! Seams for the collaborators the engine polls or hands off to.
//!
//! Renderer, animator, audio and physics requests go out as
//! `FrameEvent`s in each snapshot; these two are the ones the engine
//! calls directly.

use invaders_core::events::RoundSummary;

/// Source of lateral acceleration samples (in g).
pub trait MotionSensor: Send {
    /// Most recent sample, or `None` if the sensor has not reported.
    fn latest_sample(&self) -> Option<f32>;

    /// Stop producing samples. Called once when the round ends.
    fn stop(&mut self) {}

    /// Resume after `stop`, forgetting any earlier sample. Called on reset.
    fn restart(&mut self) {}
}

/// Sensor that never reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMotion;

impl MotionSensor for NoMotion {
    fn latest_sample(&self) -> Option<f32> {
        None
    }
}

/// Receives control when the round ends. Called exactly once per round.
pub trait RoundOverHandler: Send {
    fn round_over(&mut self, summary: &RoundSummary);
}

/// Handler that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreRoundOver;

impl RoundOverHandler for IgnoreRoundOver {
    fn round_over(&mut self, _summary: &RoundSummary) {}
}
