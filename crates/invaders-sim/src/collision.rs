//! Collision resolution policy: what a reported contact does to the round.
//!
//! Contacts are classified by the unordered pair of roles. Only two pairs
//! mean anything; everything else is ignored.

use invaders_core::components::Intensity;
use invaders_core::config::RoundConfig;
use invaders_core::enums::{AudioCue, Role};
use invaders_core::events::{ContactEvent, FrameEvent};
use invaders_core::types::EntityId;

use crate::registry::EntityRegistry;
use crate::round::RoundState;
use crate::systems::despawn;

/// Role-pair classification of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    ShipHit { ship: EntityId, bullet: EntityId },
    InvaderHit { invader: EntityId, bullet: EntityId },
    Unrecognized,
}

/// Classify two (id, role) pairs regardless of order.
pub fn classify(a: (EntityId, Role), b: (EntityId, Role)) -> ContactKind {
    if a.0 == b.0 {
        return ContactKind::Unrecognized;
    }
    match (a.1, b.1) {
        (Role::Ship, Role::EnemyBullet) => ContactKind::ShipHit {
            ship: a.0,
            bullet: b.0,
        },
        (Role::EnemyBullet, Role::Ship) => ContactKind::ShipHit {
            ship: b.0,
            bullet: a.0,
        },
        (Role::Invader, Role::PlayerBullet) => ContactKind::InvaderHit {
            invader: a.0,
            bullet: b.0,
        },
        (Role::PlayerBullet, Role::Invader) => ContactKind::InvaderHit {
            invader: b.0,
            bullet: a.0,
        },
        _ => ContactKind::Unrecognized,
    }
}

/// What resolving a contact did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    ShipHit { destroyed: bool },
    InvaderDestroyed,
    /// Unrecognized role pair.
    Ignored,
    /// One side was already removed.
    Stale,
}

/// Apply one contact to the registry and round state.
pub fn resolve(
    contact: &ContactEvent,
    registry: &mut EntityRegistry,
    round: &mut RoundState,
    config: &RoundConfig,
    events: &mut Vec<FrameEvent>,
) -> ContactOutcome {
    let (Some(role_a), Some(role_b)) = (registry.role(contact.a), registry.role(contact.b)) else {
        log::trace!("dropping stale contact #{}", contact.seq);
        return ContactOutcome::Stale;
    };

    match classify((contact.a, role_a), (contact.b, role_b)) {
        ContactKind::ShipHit { ship, bullet } => {
            events.push(FrameEvent::Cue {
                cue: AudioCue::ShipHit,
            });
            let health = round.damage_ship(config.health_per_hit);

            if health <= 0.0 {
                despawn(registry, ship, events);
                despawn(registry, bullet, events);
                log::debug!("ship destroyed by contact #{}", contact.seq);
                ContactOutcome::ShipHit { destroyed: true }
            } else {
                registry.insert(ship, Intensity(health));
                events.push(FrameEvent::ShipIntensity {
                    id: ship,
                    intensity: health,
                });
                despawn(registry, bullet, events);
                ContactOutcome::ShipHit { destroyed: false }
            }
        }
        ContactKind::InvaderHit { invader, bullet } => {
            events.push(FrameEvent::Cue {
                cue: AudioCue::InvaderHit,
            });
            despawn(registry, invader, events);
            despawn(registry, bullet, events);
            round.award(config.points_per_invader);
            ContactOutcome::InvaderDestroyed
        }
        ContactKind::Unrecognized => {
            log::trace!(
                "ignoring contact #{} between {:?} and {:?}",
                contact.seq,
                role_a,
                role_b
            );
            ContactOutcome::Ignored
        }
    }
}
