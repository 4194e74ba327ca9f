//! The per-pair interaction step
//!
//! One call evaluates body `a` against body `b` and runs exactly one of two
//! branches:
//!
//! - **Free motion** when the bodies are apart: `a` drifts by its current
//!   velocity, then its velocity picks up the gravitational acceleration
//!   toward `b` computed from the pre-drift positions. Only `a` changes.
//! - **Collision** when they overlap and `a` has not yet recorded the
//!   contact: velocities are exchanged with the elastic formula and both
//!   bodies drift by their new velocities.
//!
//! Repeated calls fold into `a`'s running state, so the order in which a tick
//! visits partners matters.

use tracing::debug;

use crate::body::Body;
use crate::collisions::{ContactEvent, elastic_exchange, in_contact};
use crate::forces::ForceModel;

/// Which branch an interaction took
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Bodies apart; gravity integrated on `a`
    Free {
        /// Force magnitude between the pair
        force: f64,
    },
    /// New contact resolved; both bodies changed
    Collision(ContactEvent),
    /// Overlapping, but `a` already recorded this contact; nothing changed
    AlreadyTouching,
}

/// Evaluate body `a` against body `b`, mutating them in place
///
/// `dt` scales every drift and velocity change; the engine's native step is 1.
///
/// # Panics
///
/// Panics if `a == b` or either index is out of bounds.
///
/// # Examples
///
/// ```
/// use orrery::body::{Body, BodyId};
/// use orrery::forces::NewtonianGravity;
/// use orrery::interaction::{Interaction, interact};
/// use orrery::vector::Vec3;
///
/// let mut bodies = vec![
///     Body::new(BodyId(0), 4.0e9, 1.0, Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0)).unwrap(),
///     Body::new(BodyId(1), 200.0, 1.0, Vec3::new(0.0, 100.0, 0.0), Vec3::zeros()).unwrap(),
/// ];
///
/// let outcome = interact(&mut bodies, 0, 1, &NewtonianGravity::new(), 1.0);
/// assert!(matches!(outcome, Interaction::Free { .. }));
/// assert_eq!(bodies[0].position.x, 1.0);
/// ```
pub fn interact(
    bodies: &mut [Body],
    a: usize,
    b: usize,
    force: &dyn ForceModel,
    dt: f64,
) -> Interaction {
    let (body_a, body_b) = pair_mut(bodies, a, b);

    match in_contact(body_a, body_b) {
        None => {
            let magnitude = force.pair_force_magnitude(body_a, body_b);
            let acceleration = force.pair_acceleration(body_a, body_b);

            body_a.position += body_a.velocity * dt;
            body_a.velocity += acceleration * dt;
            body_a.end_contact(body_b.id());

            Interaction::Free { force: magnitude }
        }
        Some(event) => {
            if !body_a.begin_contact(body_b.id()) {
                return Interaction::AlreadyTouching;
            }

            let (velocity_a, velocity_b) = elastic_exchange(
                body_a.mass(),
                body_a.velocity,
                body_b.mass(),
                body_b.velocity,
            );

            body_a.velocity = velocity_a;
            body_b.velocity = velocity_b;
            body_a.position += velocity_a * dt;
            body_b.position += velocity_b * dt;

            debug!(
                a = event.body_a.0,
                b = event.body_b.0,
                separation = event.separation,
                "contact resolved"
            );

            Interaction::Collision(event)
        }
    }
}

/// Disjoint mutable borrows of two bodies by index
fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> (&mut Body, &mut Body) {
    assert_ne!(a, b, "a body cannot interact with itself");

    if a < b {
        let (head, tail) = bodies.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
