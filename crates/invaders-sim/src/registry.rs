//! Entity registry: typed ownership of every live game object.
//!
//! Wraps the hecs world. Entities are addressed by [`EntityId`]; an id whose
//! entity was removed never resolves again, so every lookup on it returns
//! `None`/`false`. Role queries return snapshots ordered by spawn order, so
//! callers can mutate the registry while walking the result.

use glam::Vec2;
use hecs::{Component, Entity, EntityBuilder, World};

use invaders_core::components::*;
use invaders_core::enums::{InvaderKind, Role};
use invaders_core::types::{Bounds, EntityId, Position};

/// Owns all entity records for one round.
#[derive(Default)]
pub struct EntityRegistry {
    world: World,
    next_spawn: u64,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an entity with the extent and collision filter of its role.
    pub fn spawn(&mut self, role: Role, position: Vec2) -> EntityId {
        let mut builder = self.base_builder(role, position);
        match role {
            Role::Ship => {
                builder.add(Intensity::default());
            }
            Role::Invader => {
                builder.add(InvaderKind::default()).add(AnimationRate::default());
            }
            Role::PlayerBullet | Role::EnemyBullet => {}
        }
        to_id(self.world.spawn(builder.build()))
    }

    /// Spawn an invader of a specific visual variant.
    pub fn spawn_invader(&mut self, kind: InvaderKind, position: Vec2) -> EntityId {
        let mut builder = self.base_builder(Role::Invader, position);
        builder.add(kind).add(AnimationRate::default());
        to_id(self.world.spawn(builder.build()))
    }

    fn base_builder(&mut self, role: Role, position: Vec2) -> EntityBuilder {
        let order = SpawnOrder(self.next_spawn);
        self.next_spawn += 1;

        let mut builder = EntityBuilder::new();
        builder
            .add(role)
            .add(Position(position))
            .add(Extent::for_role(role))
            .add(CollisionFilter::for_role(role))
            .add(order);
        builder
    }

    /// Remove an entity. Returns `false` (and does nothing) if it was
    /// already gone.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match to_entity(id) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        to_entity(id).is_some_and(|entity| self.world.contains(entity))
    }

    /// Snapshot of live ids with `role`, in spawn order.
    pub fn all_by_role(&self, role: Role) -> Vec<EntityId> {
        let mut found: Vec<(SpawnOrder, Entity)> = self
            .world
            .query::<(&Role, &SpawnOrder)>()
            .iter()
            .filter(|(_, (r, _))| **r == role)
            .map(|(entity, (_, order))| (*order, entity))
            .collect();
        found.sort_unstable_by_key(|(order, _)| *order);
        found.into_iter().map(|(_, entity)| to_id(entity)).collect()
    }

    /// Oldest live entity with `role`.
    pub fn first_by_role(&self, role: Role) -> Option<EntityId> {
        self.world
            .query::<(&Role, &SpawnOrder)>()
            .iter()
            .filter(|(_, (r, _))| **r == role)
            .min_by_key(|(_, (_, order))| **order)
            .map(|(entity, _)| to_id(entity))
    }

    pub fn count_by_role(&self, role: Role) -> usize {
        self.world
            .query::<&Role>()
            .iter()
            .filter(|(_, r)| **r == role)
            .count()
    }

    pub fn any_by_role(&self, role: Role) -> bool {
        self.world.query::<&Role>().iter().any(|(_, r)| *r == role)
    }

    /// Total live entities of every role.
    pub fn live_count(&self) -> usize {
        self.world.len() as usize
    }

    pub fn role(&self, id: EntityId) -> Option<Role> {
        self.get::<Role>(id)
    }

    pub fn position(&self, id: EntityId) -> Option<Vec2> {
        self.get::<Position>(id).map(|p| p.0)
    }

    /// Bounding edges at the entity's current position.
    pub fn bounds(&self, id: EntityId) -> Option<Bounds> {
        let entity = to_entity(id)?;
        let position = self.world.get::<&Position>(entity).ok()?;
        let extent = self.world.get::<&Extent>(entity).ok()?;
        Some(Bounds::from_center(position.0, extent.size))
    }

    /// Move an entity (used when a collaborator reports a moved body).
    pub fn set_position(&mut self, id: EntityId, position: Vec2) -> bool {
        self.with_mut::<Position>(id, |p| p.0 = position)
    }

    /// Translate every listed entity that is still alive.
    pub fn translate(&mut self, ids: &[EntityId], delta: Vec2) {
        for &id in ids {
            self.with_mut::<Position>(id, |p| p.0 += delta);
        }
    }

    /// Copy of a component, if the entity is alive and has one.
    pub fn get<C: Component + Copy>(&self, id: EntityId) -> Option<C> {
        let entity = to_entity(id)?;
        self.world.get::<&C>(entity).ok().map(|c| *c)
    }

    /// Attach or replace a component. Returns `false` for removed ids.
    pub fn insert<C: Component>(&mut self, id: EntityId, component: C) -> bool {
        match to_entity(id) {
            Some(entity) => self.world.insert_one(entity, component).is_ok(),
            None => false,
        }
    }

    /// Mutate a component in place. Returns `false` if the entity or
    /// component is missing.
    pub fn with_mut<C: Component>(&mut self, id: EntityId, f: impl FnOnce(&mut C)) -> bool {
        let Some(entity) = to_entity(id) else {
            return false;
        };
        match self.world.get::<&mut C>(entity) {
            Ok(mut component) => {
                f(&mut *component);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove everything (round teardown).
    ///
    /// Ids from the finished round never resolve again.
    pub fn clear(&mut self) {
        let all: Vec<Entity> = self.world.iter().map(|e| e.entity()).collect();
        for entity in all {
            let _ = self.world.despawn(entity);
        }
    }
}

fn to_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

fn to_entity(id: EntityId) -> Option<Entity> {
    Entity::from_bits(id.0)
}
