//! Serializable configuration
//!
//! [`WorldConfig`] holds the engine's tunables; its defaults reproduce the
//! reference numerics exactly (SI gravitational constant, no softening, unit
//! time step, ordered pair evaluation). [`ScenarioConfig`] adds an explicit
//! list of bodies so a whole starting state can be loaded from JSON:
//!
//! ```json
//! {
//!   "world": { "pair_evaluation": "buffered" },
//!   "bodies": [
//!     { "mass": 4.0e9, "radius": 10.0, "position": [0.0, 0.0, 0.0] },
//!     { "mass": 200.0, "radius": 1.0, "position": [500.0, 0.0, 0.0],
//!       "velocity": [0.0, 0.01, 0.0] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::body::{Body, BodyId};
use crate::error::{Error, Result};
use crate::forces::{G, NewtonianGravity};
use crate::integrator::{BufferedPairwise, Integrator, OrderedPairwise};
use crate::vector::Vec3;
use crate::world::World;

/// How a tick visits pairs of bodies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairEvaluation {
    /// Every ordered pair in turn, mutating in place
    #[default]
    Ordered,
    /// Every body against a start-of-tick snapshot, applied together
    Buffered,
}

impl PairEvaluation {
    pub fn integrator(self) -> &'static dyn Integrator {
        match self {
            Self::Ordered => &OrderedPairwise,
            Self::Buffered => &BufferedPairwise,
        }
    }
}

/// Engine tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Gravitational constant
    pub gravitational_constant: f64,
    /// Softening length; zero leaves coincident bodies unguarded
    pub softening: f64,
    /// Tick length; every drift and velocity change is scaled by it
    pub time_step: f64,
    pub pair_evaluation: PairEvaluation,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            softening: 0.0,
            time_step: 1.0,
            pair_evaluation: PairEvaluation::Ordered,
        }
    }
}

impl WorldConfig {
    /// Check every value is usable
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::config::WorldConfig;
    ///
    /// assert!(WorldConfig::default().validate().is_ok());
    ///
    /// let bad = WorldConfig { time_step: 0.0, ..WorldConfig::default() };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !self.gravitational_constant.is_finite() || self.gravitational_constant < 0.0 {
            return Err(Error::invalid_config(format!(
                "gravitational_constant must be finite and non-negative, got {}",
                self.gravitational_constant
            )));
        }
        if !self.softening.is_finite() || self.softening < 0.0 {
            return Err(Error::invalid_config(format!(
                "softening must be finite and non-negative, got {}",
                self.softening
            )));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(Error::invalid_config(format!(
                "time_step must be finite and positive, got {}",
                self.time_step
            )));
        }
        Ok(())
    }

    pub fn gravity(&self) -> NewtonianGravity {
        NewtonianGravity::with_params(self.gravitational_constant, self.softening)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Initial state of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Caller-assigned id; omitted ids are allocated by the world
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub mass: f64,
    #[serde(default)]
    pub radius: f64,
    pub position: Vec3,
    #[serde(default = "zero_vector")]
    pub velocity: Vec3,
}

fn zero_vector() -> Vec3 {
    Vec3::zeros()
}

/// A world configuration plus its starting bodies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.world.validate()?;
        Ok(scenario)
    }

    /// Build the world, validating every body
    ///
    /// Bodies with explicit ids are inserted first so that allocated ids
    /// never collide with them.
    pub fn into_world(self) -> Result<World> {
        let mut world = World::with_config(self.world)?;
        let mut allocated = Vec::new();

        for body in self.bodies {
            match body.id {
                Some(id) => {
                    let body =
                        Body::new(BodyId(id), body.mass, body.radius, body.position, body.velocity)?;
                    world.insert_body(body)?;
                }
                None => allocated.push(body),
            }
        }
        for body in allocated {
            world.add_body(body.mass, body.radius, body.position, body.velocity)?;
        }

        info!(bodies = world.body_count(), "scenario loaded");
        Ok(world)
    }
}
