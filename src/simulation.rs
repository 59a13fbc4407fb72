//! The simulation controller.
//!
//! [`Simulation`] owns everything that changes while the pit runs: the live
//! body list, the committed snapshot, the clock state and the seeded RNG. It
//! is the whole external interface of the core. A host drives it by calling
//! [`Simulation::advance`] once per frame (or [`Simulation::tick`] directly)
//! and reads [`Simulation::bodies`] back for drawing.
//!
//! Every mutation goes through `&mut self`, so a tick can never interleave
//! with an add, edit or removal.

use std::time::Duration;

use bevy::log::{debug, info, warn};
use bevy::prelude::{Resource, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::body::{Body, BodyId, BodyParams};
use crate::clock::{ClockState, TickPacer};
use crate::collision;
use crate::config::SimConfig;
use crate::error::{validate_kick_strength, SimError, SimResult};
use crate::integrator;
use crate::snapshot::SnapshotStore;
use crate::trail::TrailSettings;

/// Which bodies a [`Simulation::perturb`] call kicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerturbTarget {
    All,
    Body(BodyId),
}

/// A self-contained ballpit. Several can coexist; nothing is global.
#[derive(Resource)]
pub struct Simulation {
    config: SimConfig,
    trail: TrailSettings,
    bodies: Vec<Body>,
    snapshot: SnapshotStore,
    state: ClockState,
    pacer: TickPacer,
    rng: StdRng,
    next_id: u64,
    tick_count: u64,
}

impl Simulation {
    /// An empty, idle simulation.
    ///
    /// The RNG is seeded from `config.seed`, or from entropy if unset.
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            trail: config.trail_settings(),
            pacer: TickPacer::new(config.tick_rate),
            config,
            bodies: Vec::new(),
            snapshot: SnapshotStore::new(),
            state: ClockState::Idle,
            rng,
            next_id: 0,
            tick_count: 0,
        }
    }

    // ── Bodies ────────────────────────────────────────────────────────────────

    /// Append a body and commit the new configuration.
    pub fn add_body(&mut self, params: BodyParams) -> BodyId {
        let id = self.push_body(&params);
        debug!("added body {} at {:?}", id, params.position);
        self.commit();
        id
    }

    /// Add one body with random parameters inside the spawn ranges.
    pub fn spawn_random(&mut self) -> BodyId {
        let params = BodyParams::random(&mut self.rng, self.config.bounds);
        self.add_body(params)
    }

    /// Replace every body with `count` random ones.
    pub fn randomize(&mut self, count: usize) {
        self.bodies.clear();
        for _ in 0..count {
            let params = BodyParams::random(&mut self.rng, self.config.bounds);
            self.push_body(&params);
        }
        info!("randomized pit with {} bodies", count);
        self.commit();
    }

    /// Overwrite a body's physical parameters in place, keeping its trail.
    pub fn update_body(&mut self, id: BodyId, params: BodyParams) -> SimResult<()> {
        let body = self
            .bodies
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(SimError::UnknownBody { id })?;
        body.apply(&params);
        debug!("updated body {}", id);
        self.commit();
        Ok(())
    }

    /// Remove a body, returning it. Later bodies keep their relative order.
    pub fn remove_body(&mut self, id: BodyId) -> SimResult<Body> {
        let index = self.index_of(id).ok_or(SimError::UnknownBody { id })?;
        let body = self.bodies.remove(index);
        debug!("removed body {}", id);
        self.commit();
        Ok(body)
    }

    /// Remove every body.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.commit();
    }

    /// Add a random velocity in `[-max_delta, max_delta]` to each component
    /// of the targeted bodies' velocities.
    ///
    /// `|max_delta|` must be finite and at most
    /// [`crate::constants::MAX_KICK_STRENGTH`].
    pub fn perturb(&mut self, target: PerturbTarget, max_delta: f32) -> SimResult<()> {
        let max_delta = max_delta.abs();
        validate_kick_strength("max_delta", max_delta)?;
        match target {
            PerturbTarget::All => {
                for body in self.bodies.iter_mut() {
                    body.velocity += random_kick(&mut self.rng, max_delta);
                }
            }
            PerturbTarget::Body(id) => {
                let body = self
                    .bodies
                    .iter_mut()
                    .find(|b| b.id == id)
                    .ok_or(SimError::UnknownBody { id })?;
                body.velocity += random_kick(&mut self.rng, max_delta);
            }
        }
        Ok(())
    }

    /// Shake every body with the configured strength.
    pub fn shake(&mut self) {
        let strength = self.config.shake_strength;
        if let Err(e) = self.perturb(PerturbTarget::All, strength) {
            warn!("shake skipped: {e}");
        }
    }

    /// Store the current bodies as the configuration reset returns to.
    pub fn commit(&mut self) {
        self.snapshot.commit(&self.bodies);
    }

    // ── Clock ─────────────────────────────────────────────────────────────────

    /// Commit the current bodies, wipe trails and start ticking.
    pub fn start(&mut self) {
        self.commit();
        for body in self.bodies.iter_mut() {
            body.trail.clear();
        }
        self.pacer.cancel();
        self.tick_count = 0;
        self.state = ClockState::Running;
        info!("simulation started with {} bodies", self.bodies.len());
    }

    /// Freeze a running simulation. No-op unless running.
    pub fn pause(&mut self) {
        if self.state == ClockState::Running {
            self.state = ClockState::Paused;
            self.pacer.cancel();
            info!("simulation paused at tick {}", self.tick_count);
        }
    }

    /// Continue a paused simulation. No-op unless paused.
    pub fn resume(&mut self) {
        if self.state == ClockState::Paused {
            self.state = ClockState::Running;
            info!("simulation resumed at tick {}", self.tick_count);
        }
    }

    /// Pause when running, resume when paused, otherwise nothing.
    pub fn toggle_pause(&mut self) {
        match self.state {
            ClockState::Running => self.pause(),
            ClockState::Paused => self.resume(),
            ClockState::Idle => {}
        }
    }

    /// Go idle and bring back the last committed configuration.
    pub fn reset(&mut self) {
        self.state = ClockState::Idle;
        self.pacer.cancel();
        self.bodies = self.snapshot.restore();
        self.tick_count = 0;
        info!("simulation reset to {} committed bodies", self.bodies.len());
    }

    /// Run one tick if running, then return the bodies for drawing.
    pub fn tick(&mut self) -> &[Body] {
        if self.state.is_running() {
            self.step();
        }
        &self.bodies
    }

    /// Run however many ticks `elapsed` host time is worth at the configured
    /// tick rate, then return the bodies for drawing.
    pub fn advance(&mut self, elapsed: Duration) -> &[Body] {
        if self.state.is_running() {
            let due = self.pacer.ticks_for(elapsed);
            for _ in 0..due {
                self.step();
            }
        }
        &self.bodies
    }

    /// One tick: move every body, then resolve collisions on the moved
    /// positions.
    fn step(&mut self) {
        let gravity = self.config.gravity;
        let bounds = self.config.bounds;
        for body in self.bodies.iter_mut() {
            integrator::advance(body, gravity, bounds, &self.trail);
        }
        collision::resolve_all(&mut self.bodies, &mut self.rng, self.config.color_blend);
        for body in self.bodies.iter_mut() {
            integrator::confine(body, bounds);
        }
        self.tick_count += 1;
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// The topmost (last drawn) body covering `point`, if any.
    pub fn body_at(&self, point: Vec2) -> Option<BodyId> {
        self.bodies
            .iter()
            .rev()
            .find(|b| b.position.distance(point) <= b.radius)
            .map(|b| b.id)
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &SnapshotStore {
        &self.snapshot
    }

    /// Total kinetic energy `Σ ½ m |v|²` of the live bodies.
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    fn push_body(&mut self, params: &BodyParams) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::from_params(id, params));
        id
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }
}

fn random_kick(rng: &mut impl Rng, max_delta: f32) -> Vec2 {
    if max_delta == 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        rng.gen_range(-max_delta..=max_delta),
        rng.gen_range(-max_delta..=max_delta),
    )
}
