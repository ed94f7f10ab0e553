//! Headless INVADERS host.
//!
//! Drives the simulation engine on its own thread and supplies the
//! collaborators a renderer would: bullet animation, ship physics, contact
//! detection, a tilt sensor, and round-over presentation.

pub mod game_loop;
pub mod host;
pub mod pilot;
pub mod sensor;
pub mod state;

pub use invaders_core as core;
