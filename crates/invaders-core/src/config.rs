//! Round configuration.
//!
//! Every field has a default from `constants`, so a partial JSON document
//! only needs to name the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::Playfield;

/// Errors raised while loading or validating a [`RoundConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tick_dt must be in (0, 1], got {0}")]
    TickOutOfRange(f64),
    #[error("time_per_move must be positive and finite, got {0}")]
    NonPositiveCadence(f64),
    #[error("playfield must have positive finite size, got {width}x{height}")]
    DegeneratePlayfield { width: f32, height: f32 },
    #[error("formation_step must be positive and finite, got {0}")]
    FormationStep(f32),
    #[error("breach_height must be finite, got {0}")]
    BreachHeight(f32),
    #[error("health_per_hit must be in (0, 1], got {0}")]
    HealthPerHit(f32),
    #[error("motion_deadzone must be positive and finite, got {0}")]
    MotionDeadzone(f32),
    #[error("motion_force_scale must be finite, got {0}")]
    MotionForceScale(f32),
    #[error("{field} must be positive and finite, got {value}")]
    BulletFlight { field: &'static str, value: f64 },
    #[error("formation grid must have at least one row and column")]
    EmptyGrid,
    #[error("a {rows}x{columns} formation does not fit the playfield")]
    GridTooLarge { rows: usize, columns: usize },
}

fn positive_finite(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

/// Tunable parameters for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// RNG seed. Same seed and inputs = same round.
    pub seed: u64,
    /// Seconds advanced per active tick.
    pub tick_dt: f64,
    pub playfield: Playfield,
    /// Initial formation cadence (seconds per movement tick).
    pub time_per_move: f64,
    /// Formation step distance on either axis.
    pub formation_step: f32,
    /// Breach threshold for invader bottom edges.
    pub breach_height: f32,
    pub health_per_hit: f32,
    pub points_per_invader: u32,
    pub motion_deadzone: f32,
    pub motion_force_scale: f32,
    pub player_bullet_secs: f64,
    pub enemy_bullet_secs: f64,
    pub rows: usize,
    pub columns: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_dt: DT,
            playfield: Playfield::default(),
            time_per_move: TIME_PER_MOVE,
            formation_step: FORMATION_STEP,
            breach_height: MIN_INVADER_BOTTOM_HEIGHT,
            health_per_hit: SHIP_HEALTH_PER_HIT,
            points_per_invader: POINTS_PER_INVADER,
            motion_deadzone: MOTION_DEADZONE,
            motion_force_scale: MOTION_FORCE_SCALE,
            player_bullet_secs: PLAYER_BULLET_FLIGHT_SECS,
            enemy_bullet_secs: ENEMY_BULLET_FLIGHT_SECS,
            rows: INVADER_ROWS,
            columns: INVADER_COLUMNS,
        }
    }
}

impl RoundConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RoundConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(positive_finite(self.tick_dt) && self.tick_dt <= MAX_TICK_DT) {
            return Err(ConfigError::TickOutOfRange(self.tick_dt));
        }
        if !positive_finite(self.time_per_move) {
            return Err(ConfigError::NonPositiveCadence(self.time_per_move));
        }
        let Playfield { width, height } = self.playfield;
        if !(positive_finite(width as f64) && positive_finite(height as f64)) {
            return Err(ConfigError::DegeneratePlayfield { width, height });
        }
        if !positive_finite(self.formation_step as f64) {
            return Err(ConfigError::FormationStep(self.formation_step));
        }
        if !self.breach_height.is_finite() {
            return Err(ConfigError::BreachHeight(self.breach_height));
        }
        if !(self.health_per_hit > 0.0 && self.health_per_hit <= 1.0) {
            return Err(ConfigError::HealthPerHit(self.health_per_hit));
        }
        if !positive_finite(self.motion_deadzone as f64) {
            return Err(ConfigError::MotionDeadzone(self.motion_deadzone));
        }
        if !self.motion_force_scale.is_finite() {
            return Err(ConfigError::MotionForceScale(self.motion_force_scale));
        }
        for (field, value) in [
            ("player_bullet_secs", self.player_bullet_secs),
            ("enemy_bullet_secs", self.enemy_bullet_secs),
        ] {
            if !positive_finite(value) {
                return Err(ConfigError::BulletFlight { field, value });
            }
        }
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.invader_count().is_none() || !self.grid_fits() {
            return Err(ConfigError::GridTooLarge {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Invaders in the starting formation, or `None` on overflow.
    pub fn invader_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Whether the starting grid (anchored at one third of the width and
    /// half the height) stays clear of the side edges and below the top.
    fn grid_fits(&self) -> bool {
        let width = self.playfield.width as f64;
        let height = self.playfield.height as f64;
        let column_pitch = (INVADER_SIZE.x + INVADER_GRID_SPACING) as f64;
        let row_pitch = (INVADER_SIZE.y * 2.0) as f64;

        let right = width / 3.0
            + (self.columns - 1) as f64 * column_pitch
            + INVADER_SIZE.x as f64 / 2.0;
        let top = height / 2.0
            + (self.rows - 1) as f64 * row_pitch
            + INVADER_SIZE.y as f64 / 2.0;
        right < width - EDGE_MARGIN as f64 && top <= height
    }
}
