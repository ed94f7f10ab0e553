//! Systems that operate on the registry each tick.
//!
//! Systems are plain functions over the registry and the engine state they
//! are handed. They do not own state.

pub mod contacts;
pub mod firing;
pub mod formation;
pub mod motion;
pub mod snapshot;
pub mod termination;

use glam::Vec2;

use invaders_core::enums::Role;
use invaders_core::events::FrameEvent;
use invaders_core::types::EntityId;

use crate::registry::EntityRegistry;

/// Spawn an entity and request its visual.
pub(crate) fn spawn(
    registry: &mut EntityRegistry,
    role: Role,
    position: Vec2,
    events: &mut Vec<FrameEvent>,
) -> EntityId {
    let id = registry.spawn(role, position);
    events.push(FrameEvent::Spawned { id, role, position });
    id
}

/// Remove an entity and its visual. No-op for removed ids.
pub(crate) fn despawn(registry: &mut EntityRegistry, id: EntityId, events: &mut Vec<FrameEvent>) {
    if registry.remove(id) {
        events.push(FrameEvent::Despawned { id });
    }
}
