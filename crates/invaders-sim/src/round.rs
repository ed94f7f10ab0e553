//! Round state owned by the engine: score and ship health.
//!
//! Stored in `SimulationEngine`, NOT as ECS components, and only mutated by
//! collision resolution.

/// Running score and ship health for one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundState {
    pub score: u32,
    /// In `[0, 1]`, never increases during a round.
    pub ship_health: f32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            score: 0,
            ship_health: 1.0,
        }
    }
}

impl RoundState {
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Apply a hit and return the remaining health, floored at 0.
    pub fn damage_ship(&mut self, amount: f32) -> f32 {
        self.ship_health = (self.ship_health - amount.max(0.0)).clamp(0.0, 1.0);
        self.ship_health
    }
}
