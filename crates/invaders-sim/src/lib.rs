//! Simulation engine for INVADERS.
//!
//! Owns the entity registry and round state, drains the input and contact
//! queues at a fixed point in each tick, and produces RoundSnapshots for
//! the host.

pub mod collaborators;
pub mod collision;
pub mod engine;
pub mod queues;
pub mod registry;
pub mod round;
pub mod systems;
pub mod world_setup;

pub use invaders_core as core;
pub use engine::SimulationEngine;
