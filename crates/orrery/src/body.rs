use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vector::{Vec3, Vec3Ext, round_to_places};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub u32);

/// A massive sphere moving under mutual gravitation
///
/// Identity is the [`BodyId`]: two bodies compare equal exactly when their ids
/// do, whatever the rest of their state.
#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    mass: f64,   // kg
    radius: f64, // m, contact testing only
    pub position: Vec3,
    pub velocity: Vec3, // m per tick
    touching: HashSet<BodyId>,
}

impl Body {
    /// Creates a body, rejecting non-positive mass and negative radius
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::body::{Body, BodyId};
    /// use orrery::vector::Vec3;
    ///
    /// let body = Body::new(BodyId(1), 4.0e9, 10.0, Vec3::zeros(), Vec3::zeros()).unwrap();
    /// assert_eq!(body.mass(), 4.0e9);
    ///
    /// assert!(Body::new(BodyId(2), 0.0, 10.0, Vec3::zeros(), Vec3::zeros()).is_err());
    /// ```
    pub fn new(id: BodyId, mass: f64, radius: f64, position: Vec3, velocity: Vec3) -> Result<Self> {
        check_mass(mass)?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::InvalidRadius { radius });
        }

        Ok(Self {
            id,
            mass,
            radius,
            position,
            velocity,
            touching: HashSet::new(),
        })
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Replaces the mass; the next tick reads the new value
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        check_mass(mass)?;
        self.mass = mass;
        Ok(())
    }

    /// Doubles the mass, as the interactive front end does on tap
    pub fn double_mass(&mut self) -> Result<()> {
        self.set_mass(self.mass * 2.0)
    }

    /// Ids of the bodies this one is currently in contact with
    pub fn touching(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.touching.iter().copied()
    }

    pub fn is_touching(&self, other: BodyId) -> bool {
        self.touching.contains(&other)
    }

    /// Records contact with `other`; returns false if it was already recorded
    pub(crate) fn begin_contact(&mut self, other: BodyId) -> bool {
        self.touching.insert(other)
    }

    pub(crate) fn end_contact(&mut self, other: BodyId) {
        self.touching.remove(&other);
    }

    pub fn momentum(&self) -> Vec3 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.distance_to(&other.position)
    }

    /// Centres are within the sum of the two radii
    pub fn is_in_contact_with(&self, other: &Body) -> bool {
        self.distance_to(other) <= self.radius + other.radius
    }

    /// Position or velocity has gone non-finite (e.g. after a coincident-centre tick)
    pub fn is_degenerate(&self) -> bool {
        !(self.position.is_finite_vector() && self.velocity.is_finite_vector())
    }

    /// One-line readout of mass, radius, speed and distance from the origin
    pub fn summary(&self) -> String {
        format!(
            "body #{} mass={} radius={} speed={} m/tick distance={} m",
            self.id.0,
            self.mass,
            self.radius,
            round_to_places(self.speed(), 2),
            self.position.magnitude().round(),
        )
    }
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Body {}

impl Hash for Body {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn check_mass(mass: f64) -> Result<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidMass { mass })
    }
}
