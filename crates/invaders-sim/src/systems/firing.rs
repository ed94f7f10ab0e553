//! Firing system: player taps and invader return fire.
//!
//! At most one bullet per side is ever in flight.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::components::Trajectory;
use invaders_core::config::RoundConfig;
use invaders_core::constants::{BULLET_SIZE, INVADER_SIZE, SHIP_SIZE};
use invaders_core::enums::{AudioCue, Role};
use invaders_core::events::{FrameEvent, TapEvent};
use invaders_core::types::EntityId;

use crate::registry::EntityRegistry;
use crate::systems::spawn;

/// Handle a frame's taps in order. Each single tap tries to fire; taps
/// while a player bullet is live are consumed without effect.
pub fn run_taps(
    taps: &[TapEvent],
    registry: &mut EntityRegistry,
    config: &RoundConfig,
    events: &mut Vec<FrameEvent>,
) {
    for _ in taps.iter().filter(|t| t.fires()) {
        fire_player_bullet(registry, config, events);
    }
}

/// Fire from the ship's nose toward the top edge. Returns the new bullet,
/// or `None` if a player bullet is already live or the ship is gone.
pub fn fire_player_bullet(
    registry: &mut EntityRegistry,
    config: &RoundConfig,
    events: &mut Vec<FrameEvent>,
) -> Option<EntityId> {
    if registry.any_by_role(Role::PlayerBullet) {
        return None;
    }
    let ship = registry.first_by_role(Role::Ship)?;
    let ship_pos = registry.position(ship)?;

    let start = Vec2::new(ship_pos.x, ship_pos.y + SHIP_SIZE.y - BULLET_SIZE.y / 2.0);
    let destination = Vec2::new(
        ship_pos.x,
        config.playfield.height + BULLET_SIZE.y / 2.0,
    );

    let bullet = launch(
        registry,
        Role::PlayerBullet,
        start,
        Trajectory {
            destination,
            duration_secs: config.player_bullet_secs,
        },
        AudioCue::ShipBullet,
        events,
    );
    log::debug!("player fired from x={:.1}", ship_pos.x);
    Some(bullet)
}

/// If no enemy bullet is live, a uniformly chosen invader fires toward the
/// bottom edge.
pub fn run_invader_fire(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    config: &RoundConfig,
    events: &mut Vec<FrameEvent>,
) -> Option<EntityId> {
    if registry.any_by_role(Role::EnemyBullet) {
        return None;
    }
    let invaders = registry.all_by_role(Role::Invader);
    if invaders.is_empty() {
        return None;
    }
    let shooter = invaders[rng.gen_range(0..invaders.len())];
    let origin = registry.position(shooter)?;

    let start = Vec2::new(
        origin.x,
        origin.y - INVADER_SIZE.y / 2.0 + BULLET_SIZE.y / 2.0,
    );
    let destination = Vec2::new(origin.x, -(BULLET_SIZE.y / 2.0));

    Some(launch(
        registry,
        Role::EnemyBullet,
        start,
        Trajectory {
            destination,
            duration_secs: config.enemy_bullet_secs,
        },
        AudioCue::InvaderBullet,
        events,
    ))
}

fn launch(
    registry: &mut EntityRegistry,
    role: Role,
    start: Vec2,
    trajectory: Trajectory,
    cue: AudioCue,
    events: &mut Vec<FrameEvent>,
) -> EntityId {
    let bullet = spawn(registry, role, start, events);
    registry.insert(bullet, trajectory);
    events.push(FrameEvent::BulletLaunched {
        id: bullet,
        destination: trajectory.destination,
        duration_secs: trajectory.duration_secs,
    });
    events.push(FrameEvent::Cue { cue });
    bullet
}
