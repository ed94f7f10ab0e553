//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What an entity is. Collision filtering and resolution key off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Ship,
    Invader,
    PlayerBullet,
    EnemyBullet,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Ship,
        Role::Invader,
        Role::PlayerBullet,
        Role::EnemyBullet,
    ];
}

/// Visual variant of an invader. Rows cycle A, B, C from the bottom up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvaderKind {
    #[default]
    A,
    B,
    C,
}

impl InvaderKind {
    /// Variant used for a given grid row.
    pub fn for_row(row: usize) -> Self {
        match row % 3 {
            0 => InvaderKind::A,
            1 => InvaderKind::B,
            _ => InvaderKind::C,
        }
    }
}

/// Shared movement state of the invader formation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormationDirection {
    #[default]
    MovingRight,
    MovingLeft,
    /// Step down this tick, then move left.
    SteppingDownThenLeft,
    /// Step down this tick, then move right.
    SteppingDownThenRight,
    Idle,
}

/// Round lifecycle (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Constructed, nothing spawned yet.
    #[default]
    Ready,
    Active,
    /// Terminal condition met; no further simulation.
    Ending,
}

/// Why a round ended, in termination-predicate order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    InvadersCleared,
    Breach,
    ShipDestroyed,
}

/// Named audio cues for the fire-and-forget sound collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    ShipBullet,
    InvaderBullet,
    ShipHit,
    InvaderHit,
}

impl AudioCue {
    /// Sound file name the audio collaborator plays for this cue.
    pub fn file_name(self) -> &'static str {
        match self {
            AudioCue::ShipBullet => "ShipBullet.wav",
            AudioCue::InvaderBullet => "InvaderBullet.wav",
            AudioCue::ShipHit => "ShipHit.wav",
            AudioCue::InvaderHit => "InvaderHit.wav",
        }
    }
}
