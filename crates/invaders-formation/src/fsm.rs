//! Formation movement finite state machine.
//!
//! Pure functions that decide the formation's next direction from the
//! current one and the invaders' bounding edges, and the translation that
//! direction implies. One direction is shared by every invader.

use glam::Vec2;

use invaders_core::constants::EDGE_MARGIN;
use invaders_core::enums::FormationDirection;
use invaders_core::types::{Bounds, Playfield};

/// Result of one movement tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationStep {
    /// Direction after this tick's decision.
    pub direction: FormationDirection,
    /// Translation applied to every invader this tick.
    pub delta: Vec2,
    pub direction_changed: bool,
}

/// Decide the direction for this tick, then the translation for it.
///
/// `invaders` is scanned only as far as needed: the first invader found
/// past the relevant edge decides the turn.
pub fn evaluate<I>(
    current: FormationDirection,
    invaders: I,
    playfield: &Playfield,
    step: f32,
) -> FormationStep
where
    I: IntoIterator<Item = Bounds>,
{
    let direction = next_direction(current, invaders, playfield);
    FormationStep {
        direction,
        delta: step_delta(direction, step),
        direction_changed: direction != current,
    }
}

/// Direction transition for one movement tick.
pub fn next_direction<I>(
    current: FormationDirection,
    invaders: I,
    playfield: &Playfield,
) -> FormationDirection
where
    I: IntoIterator<Item = Bounds>,
{
    match current {
        FormationDirection::MovingRight => {
            let right_edge = playfield.width - EDGE_MARGIN;
            if invaders.into_iter().any(|b| b.max_x() >= right_edge) {
                FormationDirection::SteppingDownThenLeft
            } else {
                current
            }
        }
        FormationDirection::MovingLeft => {
            if invaders.into_iter().any(|b| b.min_x() <= EDGE_MARGIN) {
                FormationDirection::SteppingDownThenRight
            } else {
                current
            }
        }
        FormationDirection::SteppingDownThenLeft => FormationDirection::MovingLeft,
        FormationDirection::SteppingDownThenRight => FormationDirection::MovingRight,
        FormationDirection::Idle => FormationDirection::Idle,
    }
}

/// Translation for a direction. Step-downs are straight down.
pub fn step_delta(direction: FormationDirection, step: f32) -> Vec2 {
    match direction {
        FormationDirection::MovingRight => Vec2::new(step, 0.0),
        FormationDirection::MovingLeft => Vec2::new(-step, 0.0),
        FormationDirection::SteppingDownThenLeft | FormationDirection::SteppingDownThenRight => {
            Vec2::new(0.0, -step)
        }
        FormationDirection::Idle => Vec2::ZERO,
    }
}
