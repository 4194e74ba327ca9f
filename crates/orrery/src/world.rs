use serde::Serialize;
use tracing::{debug, info, warn};

use crate::body::{Body, BodyId};
use crate::collisions::ContactEvent;
use crate::config::WorldConfig;
use crate::error::{Error, Result};
use crate::forces::ForceModel;
use crate::vector::Vec3;

/// What happened during one tick
#[derive(Debug, Clone, Default, Serialize)]
pub struct StepReport {
    /// Tick count after the step
    pub tick: u64,
    /// Contacts resolved this tick, in evaluation order
    pub collisions: Vec<ContactEvent>,
    /// Bodies whose position or velocity is no longer finite
    pub degenerate: Vec<BodyId>,
}

/// The owner of every body and the driver that advances them
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    config: WorldConfig,
    /// Completed ticks
    tick: u64,
    /// Next id handed out by `add_body`
    next_id: u32,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates an empty world with the default configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::world::World;
    ///
    /// let world = World::new();
    /// assert_eq!(world.body_count(), 0);
    /// assert_eq!(world.tick(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            config: WorldConfig::default(),
            tick: 0,
            next_id: 0,
        }
    }

    /// Creates an empty world, rejecting unusable configuration
    pub fn with_config(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Adds a new body under the next free id
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::world::World;
    /// use orrery::vector::Vec3;
    ///
    /// let mut world = World::new();
    /// let id = world.add_body(4.0e9, 10.0, Vec3::zeros(), Vec3::zeros()).unwrap();
    ///
    /// assert_eq!(world.body(id).unwrap().mass(), 4.0e9);
    /// assert!(world.add_body(-1.0, 10.0, Vec3::zeros(), Vec3::zeros()).is_err());
    /// ```
    pub fn add_body(&mut self, mass: f64, radius: f64, position: Vec3, velocity: Vec3) -> Result<BodyId> {
        let body = Body::new(BodyId(self.next_id), mass, radius, position, velocity)?;
        self.insert_body(body)
    }

    /// Inserts a body with a caller-assigned id
    ///
    /// Fails with [`Error::DuplicateBody`] if the id is already present.
    pub fn insert_body(&mut self, body: Body) -> Result<BodyId> {
        let id = body.id();
        if self.body(id).is_some() {
            warn!(id = id.0, "rejected duplicate body");
            return Err(Error::DuplicateBody(id));
        }

        self.next_id = self.next_id.max(id.0.saturating_add(1));
        self.bodies.push(body);
        Ok(id)
    }

    /// Removes a body between ticks
    ///
    /// The id is also dropped from every remaining touching set, so a body
    /// later inserted under the same id starts out of contact.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.bodies.iter().position(|b| b.id() == id)?;
        let removed = self.bodies.remove(idx);
        for body in &mut self.bodies {
            body.end_contact(id);
        }
        Some(removed)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id() == id)
    }

    /// All bodies in evaluation order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance every body by one tick
    ///
    /// Never fails: coincident bodies or overflowing forces leave non-finite
    /// state behind, which is listed in the report for the caller to handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::world::World;
    /// use orrery::vector::Vec3;
    ///
    /// let mut world = World::new();
    /// let id = world.add_body(1.0, 1.0, Vec3::zeros(), Vec3::new(0.0, 2.0, 0.0)).unwrap();
    ///
    /// let report = world.step();
    /// assert_eq!(report.tick, 1);
    /// assert_eq!(world.body(id).unwrap().position, Vec3::new(0.0, 2.0, 0.0));
    /// ```
    pub fn step(&mut self) -> StepReport {
        let gravity = self.config.gravity();
        let integrator = self.config.pair_evaluation.integrator();

        let collisions = integrator.step(&mut self.bodies, &gravity, self.config.time_step);
        self.tick += 1;

        let degenerate = self.degenerate_bodies();
        if !degenerate.is_empty() {
            warn!(tick = self.tick, ids = ?degenerate, "bodies left with non-finite state");
        }

        debug!(
            tick = self.tick,
            bodies = self.bodies.len(),
            collisions = collisions.len(),
            "tick complete"
        );

        StepReport {
            tick: self.tick,
            collisions,
            degenerate,
        }
    }

    /// Advance `ticks` ticks, returning the report of the last one
    pub fn run(&mut self, ticks: u64) -> StepReport {
        let mut report = StepReport {
            tick: self.tick,
            ..StepReport::default()
        };
        for _ in 0..ticks {
            report = self.step();
        }
        report
    }

    /// Doubles a body's mass, returning the new value
    pub fn double_mass(&mut self, id: BodyId) -> Result<f64> {
        let body = self.body_mut(id).ok_or(Error::UnknownBody(id))?;
        let before = body.mass();
        body.double_mass()?;

        info!(id = id.0, from = before, to = body.mass(), "mass doubled");
        Ok(body.mass())
    }

    /// The nearest other body and its centre distance
    pub fn closest_to(&self, id: BodyId) -> Result<Option<(BodyId, f64)>> {
        let body = self.body(id).ok_or(Error::UnknownBody(id))?;

        Ok(self
            .bodies
            .iter()
            .filter(|other| other.id() != id)
            .map(|other| (other.id(), body.distance_to(other)))
            .min_by(|a, b| a.1.total_cmp(&b.1)))
    }

    pub fn degenerate_bodies(&self) -> Vec<BodyId> {
        self.bodies
            .iter()
            .filter(|b| b.is_degenerate())
            .map(|b| b.id())
            .collect()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass()).sum()
    }

    pub fn total_momentum(&self) -> Vec3 {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vec3::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    pub fn potential_energy(&self) -> f64 {
        self.config.gravity().potential_energy(&self.bodies)
    }
}
