//! Termination check: a pure predicate over the registry.

use invaders_core::enums::{Role, RoundOutcome};

use crate::registry::EntityRegistry;

/// Why the round should end, if it should. Checked in order: no invaders
/// left, an invader's bottom edge at or below `breach_height`, ship gone.
pub fn check(registry: &EntityRegistry, breach_height: f32) -> Option<RoundOutcome> {
    let invaders = registry.all_by_role(Role::Invader);
    if invaders.is_empty() {
        return Some(RoundOutcome::InvadersCleared);
    }
    let breached = invaders
        .iter()
        .filter_map(|&id| registry.bounds(id))
        .any(|b| b.min_y() <= breach_height);
    if breached {
        return Some(RoundOutcome::Breach);
    }
    if !registry.any_by_role(Role::Ship) {
        return Some(RoundOutcome::ShipDestroyed);
    }
    None
}
