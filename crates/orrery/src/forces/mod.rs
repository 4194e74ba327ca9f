//! Force models for body interactions
//!
//! This module provides the `ForceModel` trait and the Newtonian gravity
//! model the engine uses between every pair of bodies.

use crate::body::Body;
use crate::vector::Vec3;

pub mod gravity;


pub use gravity::NewtonianGravity;

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.67e-11;

/// A pairwise attraction between bodies
///
/// # Examples
///
/// ```
/// use orrery::body::{Body, BodyId};
/// use orrery::forces::{ForceModel, NewtonianGravity, G};
/// use orrery::vector::Vec3;
///
/// let a = Body::new(BodyId(0), 4.0e9, 1.0, Vec3::zeros(), Vec3::zeros()).unwrap();
/// let b = Body::new(BodyId(1), 200.0, 1.0, Vec3::new(10.0, 0.0, 0.0), Vec3::zeros()).unwrap();
///
/// let gravity = NewtonianGravity::new();
/// let f = gravity.pair_force_magnitude(&a, &b);
/// assert!((f - G * 4.0e9 * 200.0 / 100.0).abs() < 1e-12);
/// ```
pub trait ForceModel: Send + Sync {
    /// Magnitude of the force between `a` and `b`
    fn pair_force_magnitude(&self, a: &Body, b: &Body) -> f64;

    /// Acceleration of `a` caused by `b`
    ///
    /// Points from `a` toward `b` for an attractive force.
    fn pair_acceleration(&self, a: &Body, b: &Body) -> Vec3;

    /// Potential energy of a set of bodies, each pair counted once
    ///
    /// Default implementation returns 0.0.
    fn potential_energy(&self, _bodies: &[Body]) -> f64 {
        0.0
    }
}
