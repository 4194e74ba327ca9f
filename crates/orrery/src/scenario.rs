//! Starting states
//!
//! Seeded generation uses `ChaChaRng` so a given seed always produces the
//! same world.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::WorldConfig;
use crate::error::{Error, Result};
use crate::vector::Vec3;
use crate::world::World;

/// Shape of a uniformly random field of bodies
///
/// Radius is proportional to mass, reaching `max_radius` at `mass_max`.
/// Masses are drawn from `[mass_min, mass_max)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomFieldParams {
    pub count: usize,
    pub mass_min: f64,
    pub mass_max: f64,
    pub max_radius: f64,
    /// Each velocity component is drawn from `[-velocity_spread, velocity_spread)`
    pub velocity_spread: f64,
    /// Each position component is drawn from `[-position_spread, position_spread)`
    pub position_spread: f64,
}

impl Default for RandomFieldParams {
    fn default() -> Self {
        Self {
            count: 100,
            mass_min: 1.0e4,
            mass_max: 4.0e5,
            max_radius: 20.0,
            velocity_spread: 0.002,
            position_spread: 2000.0,
        }
    }
}

impl RandomFieldParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.mass_min > 0.0
            && self.mass_min <= self.mass_max
            && (self.mass_max - self.mass_min).is_finite())
        {
            return Err(Error::invalid_config(format!(
                "mass range must satisfy 0 < min <= max, got {}..{}",
                self.mass_min, self.mass_max
            )));
        }
        for (name, value) in [
            ("max_radius", self.max_radius),
            ("velocity_spread", self.velocity_spread),
            ("position_spread", self.position_spread),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        // Sampling spans twice the spread
        for (name, value) in [
            ("velocity_spread", self.velocity_spread),
            ("position_spread", self.position_spread),
        ] {
            if !(2.0 * value).is_finite() {
                return Err(Error::invalid_config(format!("{name} is too large, got {value}")));
            }
        }
        Ok(())
    }
}

/// Uniformly random bodies in a cube around the origin
///
/// # Examples
///
/// ```
/// use orrery::scenario::{RandomFieldParams, random_field};
/// use orrery::config::WorldConfig;
///
/// let params = RandomFieldParams { count: 10, ..RandomFieldParams::default() };
/// let world = random_field(&params, WorldConfig::default(), 42).unwrap();
/// assert_eq!(world.body_count(), 10);
/// ```
pub fn random_field(params: &RandomFieldParams, config: WorldConfig, seed: u64) -> Result<World> {
    params.validate()?;

    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut world = World::with_config(config)?;

    for _ in 0..params.count {
        let mass = sample(&mut rng, params.mass_min, params.mass_max);
        let radius = mass / params.mass_max * params.max_radius;
        let velocity = random_vector(&mut rng, params.velocity_spread);
        let position = random_vector(&mut rng, params.position_spread);

        world.add_body(mass, radius, position, velocity)?;
    }

    info!(count = params.count, seed, "random field generated");
    Ok(world)
}

fn random_vector(rng: &mut ChaChaRng, spread: f64) -> Vec3 {
    Vec3::new(
        sample(rng, -spread, spread),
        sample(rng, -spread, spread),
        sample(rng, -spread, spread),
    )
}

/// Half-open `[low, high)`, or `low` for an empty range
fn sample(rng: &mut ChaChaRng, low: f64, high: f64) -> f64 {
    if low < high {
        rng.random_range(low..high)
    } else {
        low
    }
}

/// Earth and Moon with masses scaled down by 1e12
///
/// Both move along +x, the Moon slightly faster, 384,472 m apart on z.
pub fn earth_moon() -> Result<World> {
    let mut world = World::new();

    world.add_body(
        6.0e12,
        6731.0,
        Vec3::new(0.0, 0.0, 12_000.0),
        Vec3::new(5.0, 0.0, 0.0),
    )?;
    world.add_body(
        7.0e10,
        1737.4,
        Vec3::new(0.0, 0.0, 12_000.0 + 384_472.0),
        Vec3::new(7.0, 0.0, 0.0),
    )?;

    Ok(world)
}
