//! Initial placement of the invader grid and the ship.

use glam::Vec2;

use invaders_core::constants::*;
use invaders_core::enums::InvaderKind;
use invaders_core::types::Playfield;

/// One invader slot in the starting grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSlot {
    pub row: usize,
    pub column: usize,
    pub kind: InvaderKind,
    pub position: Vec2,
}

/// Starting grid: `rows` x `columns` invaders anchored at one third of the
/// width and half the height, rows two invader-heights apart.
pub fn invader_grid(playfield: &Playfield, rows: usize, columns: usize) -> Vec<GridSlot> {
    let origin = Vec2::new(playfield.width / 3.0, playfield.height / 2.0);
    let column_pitch = INVADER_SIZE.x + INVADER_GRID_SPACING;
    let row_pitch = INVADER_SIZE.y * 2.0;

    (0..rows)
        .flat_map(|row| {
            let kind = InvaderKind::for_row(row);
            let y = origin.y + row as f32 * row_pitch;
            (0..columns).map(move |column| GridSlot {
                row,
                column,
                kind,
                position: Vec2::new(origin.x + column as f32 * column_pitch, y),
            })
        })
        .collect()
}

/// Ship start: horizontally centred, resting on the bottom edge.
pub fn ship_start(playfield: &Playfield) -> Vec2 {
    Vec2::new(playfield.width / 2.0, SHIP_SIZE.y / 2.0)
}
