//! Simulation engine: the round controller.
//!
//! `SimulationEngine` owns the entity registry and all round state, drains
//! the tap and contact queues, runs every system in a fixed order, and
//! produces `RoundSnapshot`s. Completely headless, enabling deterministic
//! testing.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use invaders_core::config::RoundConfig;
use invaders_core::enums::{FormationDirection, Role, RoundOutcome, RoundPhase};
use invaders_core::events::{FrameEvent, RoundSummary, TapEvent};
use invaders_core::state::RoundSnapshot;
use invaders_core::types::{EntityId, SimTime};

use invaders_formation::cadence::Cadence;

use crate::collaborators::{IgnoreRoundOver, MotionSensor, NoMotion, RoundOverHandler};
use crate::queues::{ContactProducer, ContactQueue, TapProducer, TapQueue};
use crate::registry::EntityRegistry;
use crate::round::RoundState;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the registry and all round state.
pub struct SimulationEngine {
    config: RoundConfig,
    registry: EntityRegistry,
    time: SimTime,
    phase: RoundPhase,
    rng: ChaCha8Rng,
    round: RoundState,
    direction: FormationDirection,
    cadence: Cadence,
    taps: TapQueue,
    contacts: ContactQueue,
    sensor: Box<dyn MotionSensor>,
    round_over: Box<dyn RoundOverHandler>,
    /// Set once, when the round-end action runs.
    summary: Option<RoundSummary>,
    frame_events: Vec<FrameEvent>,
}

impl SimulationEngine {
    /// Create an engine for one round. An invalid config is replaced by the
    /// defaults.
    pub fn new(config: RoundConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("invalid round config ({err}); using defaults");
                RoundConfig::default()
            }
        };

        Self {
            registry: EntityRegistry::new(),
            time: SimTime::default(),
            phase: RoundPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            round: RoundState::default(),
            direction: FormationDirection::default(),
            cadence: Cadence::new(config.time_per_move),
            taps: TapQueue::new(),
            contacts: ContactQueue::new(),
            sensor: Box::new(NoMotion),
            round_over: Box::new(IgnoreRoundOver),
            summary: None,
            frame_events: Vec::new(),
            config,
        }
    }

    /// Use `sensor` for tilt input.
    pub fn with_sensor(mut self, sensor: impl MotionSensor + 'static) -> Self {
        self.sensor = Box::new(sensor);
        self
    }

    /// Hand control to `handler` when the round ends.
    pub fn with_round_over_handler(mut self, handler: impl RoundOverHandler + 'static) -> Self {
        self.round_over = Box::new(handler);
        self
    }

    /// Spawn the formation and ship and start simulating. Ignored unless
    /// the engine is `Ready`.
    pub fn start_round(&mut self) {
        if self.phase != RoundPhase::Ready {
            return;
        }
        world_setup::setup_round(&mut self.registry, &self.config, &mut self.frame_events);
        self.phase = RoundPhase::Active;
        log::info!(
            "round started: {} invaders, seed {}",
            self.registry.count_by_role(Role::Invader),
            self.config.seed
        );
    }

    /// Tear the round down and return to `Ready`. Pending taps and contacts
    /// are discarded; existing producer handles stay connected. The RNG is
    /// reseeded from the config and the sensor restarted, so the next round
    /// replays exactly like the first.
    pub fn reset(&mut self) {
        log::debug!("round reset, {} entities removed", self.registry.live_count());
        self.registry.clear();
        self.taps.clear();
        self.contacts.clear();
        self.time = SimTime::default();
        self.phase = RoundPhase::Ready;
        self.round = RoundState::default();
        self.direction = FormationDirection::default();
        self.cadence = Cadence::new(self.config.time_per_move);
        self.summary = None;
        self.frame_events.clear();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.sensor.restart();
    }

    /// Producer handle for tap gestures. Usable from any thread.
    pub fn tap_producer(&self) -> TapProducer {
        self.taps.producer()
    }

    /// Producer handle for reported contacts. Usable from any thread.
    pub fn contact_producer(&self) -> ContactProducer {
        self.contacts.producer()
    }

    /// Queue a tap for the next tick.
    pub fn queue_tap(&self, tap: TapEvent) {
        self.taps.producer().push(tap);
    }

    /// Queue a contact for the next tick.
    pub fn report_contact(&self, a: EntityId, b: EntityId) {
        self.contacts.producer().report(a, b);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> RoundSnapshot {
        if self.phase == RoundPhase::Active {
            self.step();
        }

        let events = std::mem::take(&mut self.frame_events);
        systems::snapshot::build_snapshot(
            &self.registry,
            &self.time,
            self.phase,
            &self.round,
            self.direction,
            self.cadence.time_per_move(),
            events,
        )
    }

    /// One active tick. The order matters: later steps see the removals
    /// and health changes of earlier ones.
    fn step(&mut self) {
        // 1. Termination
        if self.check_termination() {
            return;
        }
        // 2. Contacts
        let outcomes = systems::contacts::run(
            &self.contacts,
            &mut self.registry,
            &mut self.round,
            &self.config,
            &mut self.frame_events,
        );
        if !outcomes.is_empty() {
            log::trace!("resolved {} contacts: {:?}", outcomes.len(), outcomes);
        }
        // 3. Taps
        let taps = self.taps.drain();
        systems::firing::run_taps(&taps, &mut self.registry, &self.config, &mut self.frame_events);
        // 4. Tilt
        systems::motion::run(
            self.sensor.as_ref(),
            &self.registry,
            &self.config,
            &mut self.frame_events,
        );
        // 5. Formation
        systems::formation::run(
            &mut self.registry,
            &mut self.direction,
            &mut self.cadence,
            &self.config,
            self.time.elapsed_secs,
        );
        // 6. Invader fire
        systems::firing::run_invader_fire(
            &mut self.registry,
            &mut self.rng,
            &self.config,
            &mut self.frame_events,
        );

        self.time.advance(self.config.tick_dt);
    }

    /// Evaluate the termination predicate and, the first time it holds, run
    /// the end-of-round action. Returns whether the round is over. Calling
    /// it again after the round ended changes nothing.
    pub fn check_termination(&mut self) -> bool {
        if self.summary.is_some() {
            return true;
        }
        if self.phase != RoundPhase::Active {
            return false;
        }
        match systems::termination::check(&self.registry, self.config.breach_height) {
            Some(outcome) => {
                self.end_round(outcome);
                true
            }
            None => false,
        }
    }

    /// The termination predicate alone, without side effects.
    pub fn is_round_over(&self) -> bool {
        systems::termination::check(&self.registry, self.config.breach_height).is_some()
    }

    fn end_round(&mut self, outcome: RoundOutcome) {
        if self.summary.is_some() {
            return;
        }
        self.phase = RoundPhase::Ending;
        self.sensor.stop();

        let summary = RoundSummary {
            outcome,
            score: self.round.score,
            ship_health: self.round.ship_health,
            time: self.time,
        };
        self.summary = Some(summary);
        self.frame_events.push(FrameEvent::RoundOver { summary });
        log::info!(
            "round over: {:?}, score {}, health {:.3}",
            outcome,
            summary.score,
            summary.ship_health
        );
        self.round_over.round_over(&summary);
    }

    /// Speed-up hook: change the formation cadence. Rejected (returns
    /// `false`) for non-positive values and once the round is ending.
    pub fn adjust_invader_cadence(&mut self, time_per_move: f64) -> bool {
        if self.phase == RoundPhase::Ending {
            return false;
        }
        systems::formation::rescale(
            &mut self.registry,
            &mut self.cadence,
            time_per_move,
            &mut self.frame_events,
        )
    }

    /// A collaborator moved a body (ship physics, bullet animation).
    /// Ignored once the round is ending.
    pub fn sync_position(&mut self, id: EntityId, position: Vec2) -> bool {
        if self.phase == RoundPhase::Ending {
            return false;
        }
        self.registry.set_position(id, position)
    }

    /// A collaborator finished with an entity (bullet reached its
    /// destination). Idempotent, and ignored once the round is ending.
    pub fn retire_entity(&mut self, id: EntityId) {
        if self.phase == RoundPhase::Ending {
            return;
        }
        systems::despawn(&mut self.registry, id, &mut self.frame_events);
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn ship_health(&self) -> f32 {
        self.round.ship_health
    }

    pub fn formation_direction(&self) -> FormationDirection {
        self.direction
    }

    /// Current formation time-per-step.
    pub fn time_per_move(&self) -> f64 {
        self.cadence.time_per_move()
    }

    /// Final summary, once the round has ended.
    pub fn summary(&self) -> Option<RoundSummary> {
        self.summary
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Read-only access to the registry.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }
}
