//! Invader formation behaviour for INVADERS.
//!
//! Implements the shared movement state machine, the movement cadence,
//! and the initial grid layout. Operates on plain data; the ECS lives in
//! `invaders-sim`.

pub mod cadence;
pub mod fsm;
pub mod layout;

pub use invaders_core as core;

#[cfg(test)]
mod tests;
