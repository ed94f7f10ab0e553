//! Motion input system: turns the latest tilt sample into a ship force.

use glam::Vec2;

use invaders_core::config::RoundConfig;
use invaders_core::enums::Role;
use invaders_core::events::FrameEvent;

use crate::collaborators::MotionSensor;
use crate::registry::EntityRegistry;

/// Poll the sensor and request a lateral push on the ship when the sample
/// is outside the deadzone.
pub fn run(
    sensor: &dyn MotionSensor,
    registry: &EntityRegistry,
    config: &RoundConfig,
    events: &mut Vec<FrameEvent>,
) {
    let Some(ship) = registry.first_by_role(Role::Ship) else {
        return;
    };
    let Some(sample) = sensor.latest_sample() else {
        return;
    };
    if sample.abs() > config.motion_deadzone {
        events.push(FrameEvent::ShipForce {
            id: ship,
            force: Vec2::new(config.motion_force_scale * sample, 0.0),
        });
    }
}
