//! Round state snapshot: the complete visible state after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::FrameEvent;
use crate::types::{Bounds, EntityId, Position, SimTime};

/// Complete round state returned from every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub time: SimTime,
    pub phase: RoundPhase,
    pub score: u32,
    pub ship_health: f32,
    pub formation: FormationView,
    pub ship: Option<ShipView>,
    pub invaders: Vec<InvaderView>,
    pub player_bullet: Option<EntityView>,
    pub enemy_bullet: Option<EntityView>,
    /// Collaborator requests produced during this tick.
    pub events: Vec<FrameEvent>,
}

/// Shared formation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FormationView {
    pub direction: FormationDirection,
    pub time_per_move: f64,
    pub live_invaders: u32,
}

/// Generic entity view (bullets).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub role: Role,
    pub position: Position,
    pub bounds: Bounds,
}

/// The player's ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub id: EntityId,
    pub position: Position,
    pub bounds: Bounds,
    pub intensity: f32,
}

/// One invader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvaderView {
    pub id: EntityId,
    pub kind: InvaderKind,
    pub position: Position,
    pub bounds: Bounds,
    pub animation_rate: f32,
}
