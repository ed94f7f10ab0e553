//! ECS components for registry entities.
//!
//! Components are plain data structs.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Role;

/// Size of an entity's bounding box, centred on its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub size: Vec2,
}

impl Extent {
    pub fn for_role(role: Role) -> Self {
        let size = match role {
            Role::Ship => SHIP_SIZE,
            Role::Invader => INVADER_SIZE,
            Role::PlayerBullet | Role::EnemyBullet => BULLET_SIZE,
        };
        Self { size }
    }
}

/// Collision-filter configuration handed to the physics collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionFilter {
    /// Category bit this body belongs to.
    pub category: u32,
    /// Categories this body reports contacts against.
    pub contact_mask: u32,
    /// Categories this body physically collides with.
    pub collision_mask: u32,
}

impl CollisionFilter {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Invader => Self {
                category: INVADER_CATEGORY,
                contact_mask: 0,
                collision_mask: 0,
            },
            Role::PlayerBullet => Self {
                category: PLAYER_BULLET_CATEGORY,
                contact_mask: INVADER_CATEGORY,
                collision_mask: 0,
            },
            Role::Ship => Self {
                category: SHIP_CATEGORY,
                contact_mask: 0,
                collision_mask: EDGE_CATEGORY,
            },
            Role::EnemyBullet => Self {
                category: ENEMY_BULLET_CATEGORY,
                contact_mask: SHIP_CATEGORY,
                collision_mask: 0,
            },
        }
    }

    /// Whether a touch between the two bodies should be reported.
    pub fn reports_contact_with(&self, other: &CollisionFilter) -> bool {
        self.contact_mask & other.category != 0 || other.contact_mask & self.category != 0
    }
}

/// Per-invader animation playback rate (1.0 = one frame per cadence step).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationRate(pub f32);

impl Default for AnimationRate {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Ship visual intensity (alpha), tracks remaining health.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intensity(pub f32);

impl Default for Intensity {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Requested bullet flight path for the animation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub destination: Vec2,
    pub duration_secs: f64,
}

/// Monotonic spawn sequence; registry snapshots are ordered by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);
