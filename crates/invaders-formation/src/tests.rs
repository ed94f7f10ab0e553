#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use glam::Vec2;

    use invaders_core::constants::*;
    use invaders_core::enums::{FormationDirection, InvaderKind};
    use invaders_core::types::{Bounds, Playfield};

    use crate::cadence::Cadence;
    use crate::fsm::{evaluate, next_direction, step_delta};
    use crate::layout::{invader_grid, ship_start};

    fn playfield() -> Playfield {
        Playfield {
            width: 320.0,
            height: 568.0,
        }
    }

    fn invader_at(x: f32, y: f32) -> Bounds {
        Bounds::from_center(Vec2::new(x, y), INVADER_SIZE)
    }

    // ---- Transitions ----

    #[test]
    fn test_moving_right_stays_away_from_edge() {
        let step = evaluate(
            FormationDirection::MovingRight,
            [invader_at(100.0, 300.0), invader_at(136.0, 300.0)],
            &playfield(),
            FORMATION_STEP,
        );
        assert_eq!(step.direction, FormationDirection::MovingRight);
        assert_eq!(step.delta, Vec2::new(10.0, 0.0));
        assert!(!step.direction_changed);
    }

    #[test]
    fn test_moving_right_turns_at_right_edge() {
        // max_x = 307 + 12 = 319 = width - 1
        let step = evaluate(
            FormationDirection::MovingRight,
            [invader_at(100.0, 300.0), invader_at(307.0, 300.0)],
            &playfield(),
            FORMATION_STEP,
        );
        assert_eq!(step.direction, FormationDirection::SteppingDownThenLeft);
        assert_eq!(step.delta, Vec2::new(0.0, -10.0), "step-down is straight down");
        assert!(step.direction_changed);
    }

    #[test]
    fn test_moving_right_just_short_of_edge() {
        let next = next_direction(
            FormationDirection::MovingRight,
            [invader_at(306.9, 300.0)],
            &playfield(),
        );
        assert_eq!(next, FormationDirection::MovingRight);
    }

    #[test]
    fn test_moving_left_turns_at_left_edge() {
        // min_x = 13 - 12 = 1
        let step = evaluate(
            FormationDirection::MovingLeft,
            [invader_at(200.0, 300.0), invader_at(13.0, 300.0)],
            &playfield(),
            FORMATION_STEP,
        );
        assert_eq!(step.direction, FormationDirection::SteppingDownThenRight);
        assert_eq!(step.delta, Vec2::new(0.0, -10.0));
    }

    #[test]
    fn test_moving_left_translates_left() {
        let step = evaluate(
            FormationDirection::MovingLeft,
            [invader_at(200.0, 300.0)],
            &playfield(),
            FORMATION_STEP,
        );
        assert_eq!(step.direction, FormationDirection::MovingLeft);
        assert_eq!(step.delta, Vec2::new(-10.0, 0.0));
    }

    #[test]
    fn test_step_down_then_horizontal_unconditionally() {
        // Even with an invader pinned against the edge, a step-down always
        // resolves to horizontal movement on the next tick.
        let pinned = [invader_at(307.0, 300.0)];
        assert_eq!(
            next_direction(FormationDirection::SteppingDownThenLeft, pinned, &playfield()),
            FormationDirection::MovingLeft
        );
        assert_eq!(
            next_direction(FormationDirection::SteppingDownThenRight, pinned, &playfield()),
            FormationDirection::MovingRight
        );
    }

    #[test]
    fn test_idle_never_moves() {
        let step = evaluate(
            FormationDirection::Idle,
            [invader_at(307.0, 300.0)],
            &playfield(),
            FORMATION_STEP,
        );
        assert_eq!(step.direction, FormationDirection::Idle);
        assert_eq!(step.delta, Vec2::ZERO);
        assert_eq!(step_delta(FormationDirection::Idle, 10.0), Vec2::ZERO);
    }

    #[test]
    fn test_empty_formation_keeps_direction() {
        let next = next_direction(
            FormationDirection::MovingRight,
            std::iter::empty(),
            &playfield(),
        );
        assert_eq!(next, FormationDirection::MovingRight);
    }

    #[test]
    fn test_boundary_scan_short_circuits() {
        let scanned = Cell::new(0usize);
        let invaders = [
            invader_at(307.0, 300.0),
            invader_at(100.0, 300.0),
            invader_at(120.0, 300.0),
        ];
        let next = next_direction(
            FormationDirection::MovingRight,
            invaders.iter().copied().inspect(|_| scanned.set(scanned.get() + 1)),
            &playfield(),
        );
        assert_eq!(next, FormationDirection::SteppingDownThenLeft);
        assert_eq!(scanned.get(), 1, "scan should stop at the first edge hit");
    }

    #[test]
    fn test_full_direction_cycle() {
        // Single invader bouncing between edges: the cycle never skips a
        // step-down after a boundary hit.
        let field = playfield();
        let mut x = 150.0;
        let mut y = 400.0;
        let mut direction = FormationDirection::MovingRight;
        let mut seen = vec![direction];

        for _ in 0..200 {
            let step = evaluate(direction, [invader_at(x, y)], &field, FORMATION_STEP);
            x += step.delta.x;
            y += step.delta.y;
            if step.direction != direction {
                seen.push(step.direction);
            }
            direction = step.direction;
            if seen.len() >= 5 {
                break;
            }
        }

        assert_eq!(
            seen,
            vec![
                FormationDirection::MovingRight,
                FormationDirection::SteppingDownThenLeft,
                FormationDirection::MovingLeft,
                FormationDirection::SteppingDownThenRight,
                FormationDirection::MovingRight,
            ]
        );
        assert_eq!(y, 380.0, "two boundary hits = two step-downs");
    }

    // ---- Cadence ----

    #[test]
    fn test_cadence_due_only_after_full_interval() {
        let mut cadence = Cadence::new(1.0);
        assert!(!cadence.is_due(0.5));
        assert!(cadence.is_due(1.0));
        cadence.mark_moved(1.0);
        assert!(!cadence.is_due(1.99));
        assert!(cadence.is_due(2.0));
    }

    #[test]
    fn test_cadence_rescale_returns_rate_ratio() {
        let mut cadence = Cadence::new(1.0);
        let ratio = cadence.rescale(0.5).unwrap();
        assert_eq!(ratio, 2.0);
        assert_eq!(cadence.time_per_move(), 0.5);

        let ratio = cadence.rescale(1.0).unwrap();
        assert_eq!(ratio, 0.5);
    }

    #[test]
    fn test_cadence_rescale_rejects_non_positive() {
        let mut cadence = Cadence::new(1.0);
        assert!(cadence.rescale(0.0).is_none());
        assert!(cadence.rescale(-1.0).is_none());
        assert!(cadence.rescale(f64::NAN).is_none());
        assert_eq!(cadence.time_per_move(), 1.0);

        let mut broken = Cadence::new(0.0);
        assert!(broken.rescale(1.0).is_none());
        assert_eq!(broken.time_per_move(), 0.0);
    }

    // ---- Layout ----

    #[test]
    fn test_grid_dimensions_and_kinds() {
        let slots = invader_grid(&playfield(), INVADER_ROWS, INVADER_COLUMNS);
        assert_eq!(slots.len(), 30);
        assert_eq!(slots[0].kind, InvaderKind::A);
        assert_eq!(slots[5].kind, InvaderKind::B);
        assert_eq!(slots[10].kind, InvaderKind::C);
        assert_eq!(slots[15].kind, InvaderKind::A);
    }

    #[test]
    fn test_grid_positions() {
        let field = playfield();
        let slots = invader_grid(&field, 2, 2);
        let origin = Vec2::new(field.width / 3.0, field.height / 2.0);
        assert_eq!(slots[0].position, origin);
        assert_eq!(slots[1].position, origin + Vec2::new(36.0, 0.0));
        assert_eq!(slots[2].position, origin + Vec2::new(0.0, 32.0));
    }

    #[test]
    fn test_grid_fits_playfield() {
        let field = playfield();
        for slot in invader_grid(&field, INVADER_ROWS, INVADER_COLUMNS) {
            let b = Bounds::from_center(slot.position, INVADER_SIZE);
            assert!(b.min_x() > EDGE_MARGIN && b.max_x() < field.width - EDGE_MARGIN);
            assert!(b.min_y() > MIN_INVADER_BOTTOM_HEIGHT && b.max_y() < field.height);
        }
    }

    #[test]
    fn test_ship_start() {
        assert_eq!(ship_start(&playfield()), Vec2::new(160.0, 8.0));
    }
}
