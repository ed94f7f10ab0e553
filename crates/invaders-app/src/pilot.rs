//! Scripted player for headless runs: tilts toward the nearest invader
//! column and taps when lined up.

use invaders_core::state::RoundSnapshot;

use crate::state::GameLoopCommand;

/// Horizontal distance at which the pilot considers itself lined up.
const AIM_TOLERANCE: f32 = 6.0;

/// Tilt sample (g) at full deflection.
const MAX_TILT: f32 = 0.6;

/// Commands for one look at the playfield.
pub fn steer(snapshot: &RoundSnapshot) -> Vec<GameLoopCommand> {
    let Some(ship) = snapshot.ship else {
        return Vec::new();
    };
    let ship_x = ship.position.x();

    let Some(target_x) = snapshot
        .invaders
        .iter()
        .map(|i| i.position.x())
        .min_by(|a, b| (a - ship_x).abs().total_cmp(&(b - ship_x).abs()))
    else {
        return vec![GameLoopCommand::Tilt(0.0)];
    };

    let dx = target_x - ship_x;
    if dx.abs() <= AIM_TOLERANCE {
        let mut commands = vec![GameLoopCommand::Tilt(0.0)];
        if snapshot.player_bullet.is_none() {
            commands.push(GameLoopCommand::Tap(1));
        }
        commands
    } else {
        let tilt = (dx / 40.0).clamp(-MAX_TILT, MAX_TILT);
        vec![GameLoopCommand::Tilt(tilt)]
    }
}
