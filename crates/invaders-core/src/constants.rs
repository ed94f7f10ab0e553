//! Simulation constants and tuning parameters.

use glam::Vec2;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Longest accepted tick (seconds).
pub const MAX_TICK_DT: f64 = 1.0;

// --- Playfield ---

/// Default playfield width in points.
pub const PLAYFIELD_WIDTH: f32 = 320.0;

/// Default playfield height in points.
pub const PLAYFIELD_HEIGHT: f32 = 568.0;

/// Distance from a side edge at which the formation turns around.
pub const EDGE_MARGIN: f32 = 1.0;

// --- Entity sizes ---

pub const INVADER_SIZE: Vec2 = Vec2::new(24.0, 16.0);

pub const SHIP_SIZE: Vec2 = Vec2::new(30.0, 16.0);

pub const BULLET_SIZE: Vec2 = Vec2::new(4.0, 8.0);

// --- Formation ---

/// Invader grid rows.
pub const INVADER_ROWS: usize = 6;

/// Invader grid columns.
pub const INVADER_COLUMNS: usize = 5;

/// Gap between invaders in a row.
pub const INVADER_GRID_SPACING: f32 = 12.0;

/// Distance the formation moves per movement tick, on either axis.
pub const FORMATION_STEP: f32 = 10.0;

/// Seconds between formation movement ticks.
pub const TIME_PER_MOVE: f64 = 1.0;

/// An invader whose bottom edge is at or below this height has breached.
pub const MIN_INVADER_BOTTOM_HEIGHT: f32 = 32.0;

// --- Damage and scoring ---

/// Ship health lost per enemy bullet hit (three hits destroy the ship).
pub const SHIP_HEALTH_PER_HIT: f32 = 0.334;

/// Points awarded per destroyed invader.
pub const POINTS_PER_INVADER: u32 = 100;

// --- Motion input ---

/// Lateral acceleration (g) below which sensor samples are ignored.
pub const MOTION_DEADZONE: f32 = 0.2;

/// Force applied to the ship per g of lateral acceleration.
pub const MOTION_FORCE_SCALE: f32 = 40.0;

/// Ship physics body mass.
pub const SHIP_MASS: f32 = 0.2;

// --- Bullets ---

/// Flight time of a player bullet to the top edge (seconds).
pub const PLAYER_BULLET_FLIGHT_SECS: f64 = 1.0;

/// Flight time of an enemy bullet to the bottom edge (seconds).
pub const ENEMY_BULLET_FLIGHT_SECS: f64 = 2.0;

// --- Collision categories ---

pub const INVADER_CATEGORY: u32 = 0x1 << 0;

pub const PLAYER_BULLET_CATEGORY: u32 = 0x1 << 1;

pub const SHIP_CATEGORY: u32 = 0x1 << 2;

pub const EDGE_CATEGORY: u32 = 0x1 << 3;

pub const ENEMY_BULLET_CATEGORY: u32 = 0x1 << 4;
