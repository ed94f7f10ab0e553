//! Entity spawn factories for setting up a round.

use invaders_core::config::RoundConfig;
use invaders_core::enums::Role;
use invaders_core::events::FrameEvent;
use invaders_core::types::EntityId;

use invaders_formation::layout::{invader_grid, ship_start};

use crate::registry::EntityRegistry;

/// Spawn the starting formation and the ship. Returns the ship.
pub fn setup_round(
    registry: &mut EntityRegistry,
    config: &RoundConfig,
    events: &mut Vec<FrameEvent>,
) -> EntityId {
    spawn_formation(registry, config, events);
    spawn_ship(registry, config, events)
}

/// Spawn the invader grid.
pub fn spawn_formation(
    registry: &mut EntityRegistry,
    config: &RoundConfig,
    events: &mut Vec<FrameEvent>,
) -> Vec<EntityId> {
    invader_grid(&config.playfield, config.rows, config.columns)
        .into_iter()
        .map(|slot| {
            let id = registry.spawn_invader(slot.kind, slot.position);
            events.push(FrameEvent::Spawned {
                id,
                role: Role::Invader,
                position: slot.position,
            });
            id
        })
        .collect()
}

/// Spawn the player's ship at the bottom centre.
pub fn spawn_ship(
    registry: &mut EntityRegistry,
    config: &RoundConfig,
    events: &mut Vec<FrameEvent>,
) -> EntityId {
    crate::systems::spawn(registry, Role::Ship, ship_start(&config.playfield), events)
}
