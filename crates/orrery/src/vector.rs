//! Three-component vector math
//!
//! Arithmetic, dot product and magnitude come straight from nalgebra's
//! `Vector3<f64>`. [`Vec3Ext`] adds the operations nalgebra either lacks or
//! leaves unguarded: distance, projection and angle, the latter two returning
//! an error instead of dividing by a zero magnitude.

use nalgebra::Vector3;
use thiserror::Error;

/// Double-precision 3D vector used for positions and velocities
pub type Vec3 = Vector3<f64>;

/// Invalid vector operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// The operation needs a non-zero-magnitude argument.
    #[error("operation requires a vector with non-zero magnitude")]
    ZeroMagnitude,
}

/// Extra operations on [`Vec3`]
///
/// # Examples
///
/// ```
/// use orrery::vector::{Vec3, Vec3Ext};
///
/// let a = Vec3::new(3.0, 4.0, 0.0);
/// let x = Vec3::new(1.0, 0.0, 0.0);
///
/// assert_eq!(a.distance_to(&Vec3::zeros()), 5.0);
/// assert_eq!(a.project_onto(&x).unwrap(), Vec3::new(3.0, 0.0, 0.0));
/// assert!(a.project_onto(&Vec3::zeros()).is_err());
/// ```
pub trait Vec3Ext {
    /// Euclidean distance between two points
    fn distance_to(&self, other: &Vec3) -> f64;

    /// Projection of `self` onto `onto`
    ///
    /// Fails with [`VectorError::ZeroMagnitude`] if `onto` is the zero vector.
    fn project_onto(&self, onto: &Vec3) -> Result<Vec3, VectorError>;

    /// Angle in radians between `self` and `other`, in `[0, π]`
    ///
    /// Fails with [`VectorError::ZeroMagnitude`] if either vector is zero.
    fn angle_between(&self, other: &Vec3) -> Result<f64, VectorError>;

    /// Unit vector pointing from `self` to `target`, or `None` if they coincide
    fn unit_towards(&self, target: &Vec3) -> Option<Vec3>;

    /// True when every component is finite
    fn is_finite_vector(&self) -> bool;
}

impl Vec3Ext for Vec3 {
    fn distance_to(&self, other: &Vec3) -> f64 {
        (other - self).magnitude()
    }

    fn project_onto(&self, onto: &Vec3) -> Result<Vec3, VectorError> {
        let mag2 = onto.magnitude_squared();
        if mag2 == 0.0 {
            return Err(VectorError::ZeroMagnitude);
        }
        Ok(onto * (self.dot(onto) / mag2))
    }

    fn angle_between(&self, other: &Vec3) -> Result<f64, VectorError> {
        let mag = self.magnitude() * other.magnitude();
        if mag == 0.0 {
            return Err(VectorError::ZeroMagnitude);
        }
        // Rounding can push the cosine of parallel vectors just past ±1.
        let cos = (self.dot(other) / mag).clamp(-1.0, 1.0);
        Ok(cos.acos())
    }

    fn unit_towards(&self, target: &Vec3) -> Option<Vec3> {
        (target - self).try_normalize(0.0)
    }

    fn is_finite_vector(&self) -> bool {
        self.iter().all(|c| c.is_finite())
    }
}

/// Round `value` to `places` decimal places
///
/// ```
/// use orrery::vector::round_to_places;
///
/// assert_eq!(round_to_places(3.14159, 2), 3.14);
/// ```
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let divisor = 10.0_f64.powi(places);
    (value * divisor).round() / divisor
}
