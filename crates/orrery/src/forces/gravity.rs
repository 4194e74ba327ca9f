//! Newtonian point-mass gravity

use crate::body::Body;
use crate::forces::{ForceModel, G};
use crate::vector::Vec3;

/// Inverse-square attraction `F = G m_a m_b / d²`
///
/// There is no guard against close approach. Bodies with coincident centres
/// are always in contact, so the world never asks for their gravity, but with
/// zero softening a near-zero separation can overflow the acceleration. The
/// resulting non-finite state propagates and the world reports it as
/// degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    /// Gravitational constant
    pub g: f64,
    /// Optional softening length added in quadrature to the separation
    pub softening: f64,
}

impl NewtonianGravity {
    /// Creates gravity with the SI constant and no softening
    pub fn new() -> Self {
        Self {
            g: G,
            softening: 0.0,
        }
    }

    /// Creates gravity with a custom constant and softening length
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::forces::NewtonianGravity;
    ///
    /// // Unit-G toy system, 0.5 m softening to tame close passes
    /// let gravity = NewtonianGravity::with_params(1.0, 0.5);
    /// assert_eq!(gravity.g, 1.0);
    /// ```
    pub fn with_params(g: f64, softening: f64) -> Self {
        Self { g, softening }
    }

    /// Force magnitude between two masses at separation `distance`
    pub fn force_magnitude(&self, mass_a: f64, mass_b: f64, distance: f64) -> f64 {
        let r2 = distance * distance + self.softening * self.softening;
        self.g * mass_a * mass_b / r2
    }
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for NewtonianGravity {
    fn pair_force_magnitude(&self, a: &Body, b: &Body) -> f64 {
        self.force_magnitude(a.mass(), b.mass(), a.distance_to(b))
    }

    fn pair_acceleration(&self, a: &Body, b: &Body) -> Vec3 {
        let dr = b.position - a.position;
        let r2 = dr.magnitude_squared() + self.softening * self.softening;
        dr * (self.g * b.mass() / (r2 * r2.sqrt()))
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        let eps2 = self.softening * self.softening;

        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..].iter().map(move |b| {
                    let r = (a.position - b.position).magnitude_squared() + eps2;
                    -self.g * a.mass() * b.mass() / r.sqrt()
                })
            })
            .sum()
    }
}
