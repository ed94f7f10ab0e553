//! Formation system: moves the invader grid on its cadence.
//!
//! Calls the formation FSM from invaders-formation to pick the direction,
//! then translates every invader by the same step.

use invaders_core::components::AnimationRate;
use invaders_core::config::RoundConfig;
use invaders_core::enums::{FormationDirection, Role};
use invaders_core::events::FrameEvent;

use invaders_formation::cadence::Cadence;
use invaders_formation::fsm::evaluate;

use crate::registry::EntityRegistry;

/// Run one movement tick if the cadence says one is due at `now`.
/// Returns `true` if the formation moved.
pub fn run(
    registry: &mut EntityRegistry,
    direction: &mut FormationDirection,
    cadence: &mut Cadence,
    config: &RoundConfig,
    now: f64,
) -> bool {
    if !cadence.is_due(now) {
        return false;
    }

    let invaders = registry.all_by_role(Role::Invader);
    if invaders.is_empty() {
        return false;
    }

    let step = {
        let edges = invaders.iter().filter_map(|&id| registry.bounds(id));
        evaluate(*direction, edges, &config.playfield, config.formation_step)
    };
    if step.direction_changed {
        log::debug!("formation {:?} -> {:?}", direction, step.direction);
    }

    registry.translate(&invaders, step.delta);
    *direction = step.direction;
    cadence.mark_moved(now);
    true
}

/// Change the movement cadence, keeping every invader's animation phase by
/// scaling its playback rate. Returns `false` if the request was rejected.
pub fn rescale(
    registry: &mut EntityRegistry,
    cadence: &mut Cadence,
    time_per_move: f64,
    events: &mut Vec<FrameEvent>,
) -> bool {
    let Some(ratio) = cadence.rescale(time_per_move) else {
        return false;
    };
    for id in registry.all_by_role(Role::Invader) {
        registry.with_mut::<AnimationRate>(id, |rate| rate.0 *= ratio);
    }
    events.push(FrameEvent::CadenceChanged {
        time_per_move,
        ratio,
    });
    log::debug!("formation cadence now {time_per_move}s (x{ratio})");
    true
}
