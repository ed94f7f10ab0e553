//! Input events consumed by the simulation and frame events it emits.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityId, SimTime};

/// A tap gesture. Only single taps fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapEvent {
    pub tap_count: u32,
}

impl TapEvent {
    pub fn single() -> Self {
        Self { tap_count: 1 }
    }

    pub fn fires(&self) -> bool {
        self.tap_count == 1
    }
}

/// Two entities reported touching by the collision detector.
///
/// The pair is unordered; `seq` is the arrival order stamped by the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub a: EntityId,
    pub b: EntityId,
    pub seq: u64,
}

/// Final state handed to the round-over collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub outcome: RoundOutcome,
    pub score: u32,
    pub ship_health: f32,
    pub time: SimTime,
}

/// Requests for the renderer, animator, audio and physics collaborators,
/// collected during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameEvent {
    /// Create a visual for a new entity.
    Spawned {
        id: EntityId,
        role: Role,
        position: Vec2,
    },
    /// Remove an entity's visual.
    Despawned { id: EntityId },
    /// Animate a bullet to `destination` over `duration_secs`, then retire it.
    BulletLaunched {
        id: EntityId,
        destination: Vec2,
        duration_secs: f64,
    },
    /// Play a sound.
    Cue { cue: AudioCue },
    /// Ship alpha changed.
    ShipIntensity { id: EntityId, intensity: f32 },
    /// Apply a lateral force to the ship body.
    ShipForce { id: EntityId, force: Vec2 },
    /// Formation cadence rescaled; invader animation rates were multiplied by `ratio`.
    CadenceChanged { time_per_move: f64, ratio: f32 },
    /// The round is over.
    RoundOver { summary: RoundSummary },
}
