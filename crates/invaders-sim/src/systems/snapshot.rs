//! Snapshot system: reads the registry and builds a RoundSnapshot.
//!
//! This system is read-only; it never modifies the registry.

use invaders_core::components::{AnimationRate, Intensity};
use invaders_core::enums::{FormationDirection, InvaderKind, Role, RoundPhase};
use invaders_core::events::FrameEvent;
use invaders_core::state::*;
use invaders_core::types::{Position, SimTime};

use crate::registry::EntityRegistry;
use crate::round::RoundState;

/// Build a complete RoundSnapshot from the current registry state.
pub fn build_snapshot(
    registry: &EntityRegistry,
    time: &SimTime,
    phase: RoundPhase,
    round: &RoundState,
    direction: FormationDirection,
    time_per_move: f64,
    events: Vec<FrameEvent>,
) -> RoundSnapshot {
    let invaders = build_invaders(registry);

    RoundSnapshot {
        time: *time,
        phase,
        score: round.score,
        ship_health: round.ship_health,
        formation: FormationView {
            direction,
            time_per_move,
            live_invaders: invaders.len() as u32,
        },
        ship: build_ship(registry),
        invaders,
        player_bullet: build_bullet(registry, Role::PlayerBullet),
        enemy_bullet: build_bullet(registry, Role::EnemyBullet),
        events,
    }
}

fn build_invaders(registry: &EntityRegistry) -> Vec<InvaderView> {
    registry
        .all_by_role(Role::Invader)
        .into_iter()
        .filter_map(|id| {
            Some(InvaderView {
                id,
                kind: registry.get::<InvaderKind>(id).unwrap_or_default(),
                position: Position(registry.position(id)?),
                bounds: registry.bounds(id)?,
                animation_rate: registry.get::<AnimationRate>(id).unwrap_or_default().0,
            })
        })
        .collect()
}

fn build_ship(registry: &EntityRegistry) -> Option<ShipView> {
    let id = registry.first_by_role(Role::Ship)?;
    Some(ShipView {
        id,
        position: Position(registry.position(id)?),
        bounds: registry.bounds(id)?,
        intensity: registry.get::<Intensity>(id).unwrap_or_default().0,
    })
}

fn build_bullet(registry: &EntityRegistry, role: Role) -> Option<EntityView> {
    let id = registry.first_by_role(role)?;
    Some(EntityView {
        id,
        role,
        position: Position(registry.position(id)?),
        bounds: registry.bounds(id)?,
    })
}
