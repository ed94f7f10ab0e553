//! Stand-ins for the renderer-side collaborators: bullet animator, ship
//! physics, and the overlap detector that reports contacts.
//!
//! The host reads the frame events out of each snapshot, moves bodies the
//! engine does not move itself, and feeds the results back through
//! `sync_position`, `retire_entity` and the contact queue.

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use invaders_core::components::CollisionFilter;
use invaders_core::constants::{SHIP_MASS, SHIP_SIZE};
use invaders_core::enums::Role;
use invaders_core::events::FrameEvent;
use invaders_core::state::RoundSnapshot;
use invaders_core::types::{Bounds, EntityId};
use invaders_sim::queues::ContactProducer;
use invaders_sim::SimulationEngine;

/// Fraction of ship velocity lost per second.
const SHIP_LINEAR_DAMPING: f32 = 0.1;

/// A bullet moving along its launch trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Flight {
    start: Vec2,
    destination: Vec2,
    duration_secs: f64,
    elapsed_secs: f64,
}

impl Flight {
    fn position(&self) -> Vec2 {
        let t = (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0) as f32;
        self.start.lerp(self.destination, t)
    }

    fn finished(&self) -> bool {
        self.elapsed_secs >= self.duration_secs
    }
}

/// Ship rigid body. Collides only with the playfield edges.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ShipBody {
    id: EntityId,
    position: Vec2,
    velocity: Vec2,
    /// Force accumulated this frame.
    force: Vec2,
}

/// Host-side collaborators for one engine.
pub struct Host {
    contacts: ContactProducer,
    flights: HashMap<EntityId, Flight>,
    ship: Option<ShipBody>,
    /// Pairs currently overlapping; a pair is reported once per touch.
    touching: HashSet<(EntityId, EntityId)>,
}

impl Host {
    pub fn new(engine: &SimulationEngine) -> Self {
        Self {
            contacts: engine.contact_producer(),
            flights: HashMap::new(),
            ship: None,
            touching: HashSet::new(),
        }
    }

    /// Forget everything from the previous round.
    pub fn reset(&mut self) {
        self.flights.clear();
        self.ship = None;
        self.touching.clear();
    }

    /// React to one snapshot, then advance animation and physics by `dt`.
    pub fn after_tick(&mut self, engine: &mut SimulationEngine, snapshot: &RoundSnapshot, dt: f64) {
        for event in &snapshot.events {
            self.handle_event(engine, event);
        }
        self.animate(engine, dt);
        self.integrate_ship(engine, dt as f32);
        self.detect_contacts(engine);
    }

    fn handle_event(&mut self, engine: &SimulationEngine, event: &FrameEvent) {
        match *event {
            FrameEvent::Spawned {
                id,
                role: Role::Ship,
                position,
            } => {
                self.ship = Some(ShipBody {
                    id,
                    position,
                    velocity: Vec2::ZERO,
                    force: Vec2::ZERO,
                });
            }
            FrameEvent::BulletLaunched {
                id,
                destination,
                duration_secs,
            } => {
                let Some(start) = engine.registry().position(id) else {
                    return;
                };
                self.flights.insert(
                    id,
                    Flight {
                        start,
                        destination,
                        duration_secs,
                        elapsed_secs: 0.0,
                    },
                );
            }
            FrameEvent::ShipForce { id, force } => {
                if let Some(ship) = self.ship.as_mut().filter(|s| s.id == id) {
                    ship.force += force;
                }
            }
            FrameEvent::Despawned { id } => {
                self.flights.remove(&id);
                if self.ship.is_some_and(|s| s.id == id) {
                    self.ship = None;
                }
            }
            FrameEvent::Cue { cue } => log::trace!("play {}", cue.file_name()),
            FrameEvent::RoundOver { .. } => self.reset(),
            _ => {}
        }
    }

    fn animate(&mut self, engine: &mut SimulationEngine, dt: f64) {
        let mut done = Vec::new();
        for (&id, flight) in self.flights.iter_mut() {
            flight.elapsed_secs += dt;
            engine.sync_position(id, flight.position());
            if flight.finished() {
                done.push(id);
            }
        }
        for id in done {
            self.flights.remove(&id);
            engine.retire_entity(id);
        }
    }

    fn integrate_ship(&mut self, engine: &mut SimulationEngine, dt: f32) {
        let Some(ship) = self.ship.as_mut() else {
            return;
        };
        let width = engine.config().playfield.width;

        ship.velocity += ship.force / SHIP_MASS * dt;
        ship.velocity *= (1.0 - SHIP_LINEAR_DAMPING * dt).max(0.0);
        ship.force = Vec2::ZERO;
        ship.position.x += ship.velocity.x * dt;

        let half = SHIP_SIZE.x / 2.0;
        let clamped = ship.position.x.clamp(half, width - half);
        if clamped != ship.position.x {
            ship.position.x = clamped;
            ship.velocity.x = 0.0;
        }
        engine.sync_position(ship.id, ship.position);
    }

    fn detect_contacts(&mut self, engine: &SimulationEngine) {
        let registry = engine.registry();
        let bodies: Vec<(EntityId, Bounds, CollisionFilter)> = Role::ALL
            .iter()
            .flat_map(|&role| registry.all_by_role(role))
            .filter_map(|id| {
                Some((id, registry.bounds(id)?, registry.get::<CollisionFilter>(id)?))
            })
            .collect();

        let mut now_touching = HashSet::new();
        for (i, (a, bounds_a, filter_a)) in bodies.iter().enumerate() {
            for (b, bounds_b, filter_b) in &bodies[i + 1..] {
                if !filter_a.reports_contact_with(filter_b) || !bounds_a.overlaps(bounds_b) {
                    continue;
                }
                let pair = (*a.min(b), *a.max(b));
                if !self.touching.contains(&pair) {
                    self.contacts.report(*a, *b);
                }
                now_touching.insert(pair);
            }
        }
        self.touching = now_touching;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::config::RoundConfig;
    use invaders_core::events::TapEvent;

    fn running() -> (SimulationEngine, Host) {
        let mut engine = SimulationEngine::new(RoundConfig::default());
        engine.start_round();
        let host = Host::new(&engine);
        (engine, host)
    }

    fn step(engine: &mut SimulationEngine, host: &mut Host) -> RoundSnapshot {
        let snapshot = engine.tick();
        let dt = engine.config().tick_dt;
        host.after_tick(engine, &snapshot, dt);
        snapshot
    }

    #[test]
    fn test_flight_interpolates_and_finishes() {
        let mut flight = Flight {
            start: Vec2::new(0.0, 0.0),
            destination: Vec2::new(0.0, 100.0),
            duration_secs: 2.0,
            elapsed_secs: 0.0,
        };
        flight.elapsed_secs = 1.0;
        assert_eq!(flight.position(), Vec2::new(0.0, 50.0));
        assert!(!flight.finished());
        flight.elapsed_secs = 3.0;
        assert_eq!(flight.position(), Vec2::new(0.0, 100.0));
        assert!(flight.finished());
    }

    #[test]
    fn test_player_bullet_climbs_and_retires() {
        let (mut engine, mut host) = running();
        engine.queue_tap(TapEvent::single());
        let snap = step(&mut engine, &mut host);
        let bullet = snap.player_bullet.expect("fired").id;
        let start_y = snap.player_bullet.unwrap().position.0.y;

        step(&mut engine, &mut host);
        let y = engine.registry().position(bullet).map(|p| p.y);
        assert!(y.is_some_and(|y| y > start_y));

        // One second of flight plus slack; the shot either hits or retires.
        for _ in 0..70 {
            step(&mut engine, &mut host);
        }
        assert!(!engine.registry().is_alive(bullet));
    }

    #[test]
    fn test_ship_force_moves_ship_and_stays_in_bounds() {
        let (mut engine, mut host) = running();
        step(&mut engine, &mut host);
        let ship = engine.registry().first_by_role(Role::Ship).unwrap();

        for _ in 0..600 {
            engine.tick();
            let snapshot = RoundSnapshot {
                events: vec![FrameEvent::ShipForce {
                    id: ship,
                    force: Vec2::new(40.0, 0.0),
                }],
                ..Default::default()
            };
            host.after_tick(&mut engine, &snapshot, 1.0 / 60.0);
        }
        let x = engine.registry().position(ship).unwrap().x;
        assert_eq!(x, 320.0 - SHIP_SIZE.x / 2.0);
    }

    #[test]
    fn test_overlap_reports_filtered_contact_once() {
        let (mut engine, mut host) = running();
        step(&mut engine, &mut host);
        let ship = engine.registry().first_by_role(Role::Ship).unwrap();
        let bullet = engine.registry().first_by_role(Role::EnemyBullet).unwrap();
        let ship_pos = engine.registry().position(ship).unwrap();

        // Park the bullet on the ship; the animator would move it, so stop it.
        host.flights.clear();
        engine.sync_position(bullet, ship_pos);
        host.detect_contacts(&engine);
        host.detect_contacts(&engine);

        let snap = engine.tick();
        assert!((snap.ship_health - 0.666).abs() < 1e-5);
        assert!(!engine.registry().is_alive(bullet));
    }

    #[test]
    fn test_invaders_do_not_report_each_other() {
        let (mut engine, mut host) = running();
        step(&mut engine, &mut host);
        let invaders = engine.registry().all_by_role(Role::Invader);
        let pos = engine.registry().position(invaders[0]).unwrap();
        engine.sync_position(invaders[1], pos);

        host.detect_contacts(&engine);
        let snap = engine.tick();
        assert_eq!(snap.invaders.len(), 30);
        assert_eq!(snap.score, 0);
    }
}
