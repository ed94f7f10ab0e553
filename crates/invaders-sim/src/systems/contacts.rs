//! Contact system: drains the contact queue into collision resolution.

use invaders_core::config::RoundConfig;
use invaders_core::events::FrameEvent;

use crate::collision::{resolve, ContactOutcome};
use crate::queues::ContactQueue;
use crate::registry::EntityRegistry;
use crate::round::RoundState;

/// Resolve every contact queued before this call, in arrival order.
/// Contacts reported while this batch resolves wait for the next tick.
pub fn run(
    queue: &ContactQueue,
    registry: &mut EntityRegistry,
    round: &mut RoundState,
    config: &RoundConfig,
    events: &mut Vec<FrameEvent>,
) -> Vec<ContactOutcome> {
    queue
        .drain()
        .iter()
        .map(|contact| resolve(contact, registry, round, config, events))
        .collect()
}
