//! Tick drivers
//!
//! An integrator advances a set of bodies by one tick. Two strategies are
//! provided:
//!
//! - [`OrderedPairwise`] walks every ordered pair `(a, b)` in collection order
//!   and runs [`interact`] on it, mutating state as it goes. A physical pair is
//!   therefore evaluated twice per tick, once from each side, and a body with
//!   several partners drifts once per free partner. This is the engine's
//!   reference behaviour.
//! - [`BufferedPairwise`] computes every body's change from a read-only
//!   snapshot, then applies all changes at once. Each body drifts exactly once
//!   per tick and the coupling is not counted twice.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::body::{Body, BodyId};
use crate::collisions::{ContactEvent, elastic_exchange, in_contact};
use crate::forces::ForceModel;
use crate::interaction::{Interaction, interact};
use crate::vector::Vec3;

/// A strategy for advancing bodies by one tick
pub trait Integrator: Send + Sync {
    /// Advance `bodies` by one tick of length `dt`
    ///
    /// Returns every contact that was resolved during the tick.
    fn step(&self, bodies: &mut [Body], force: &dyn ForceModel, dt: f64) -> Vec<ContactEvent>;
}

/// Sequential in-place evaluation of every ordered pair
///
/// # Examples
///
/// ```
/// use orrery::body::{Body, BodyId};
/// use orrery::forces::NewtonianGravity;
/// use orrery::integrator::{Integrator, OrderedPairwise};
/// use orrery::vector::Vec3;
///
/// let mut bodies = vec![
///     Body::new(BodyId(0), 4.0e9, 1.0, Vec3::zeros(), Vec3::zeros()).unwrap(),
///     Body::new(BodyId(1), 200.0, 1.0, Vec3::new(100.0, 0.0, 0.0), Vec3::zeros()).unwrap(),
/// ];
///
/// let contacts = OrderedPairwise.step(&mut bodies, &NewtonianGravity::new(), 1.0);
/// assert!(contacts.is_empty());
/// assert!(bodies[1].velocity.x < 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedPairwise;

impl Integrator for OrderedPairwise {
    fn step(&self, bodies: &mut [Body], force: &dyn ForceModel, dt: f64) -> Vec<ContactEvent> {
        // With no partners there are no pairs to drive the drift.
        if let [lone] = &mut *bodies {
            lone.position += lone.velocity * dt;
            return Vec::new();
        }

        let n = bodies.len();
        let mut contacts = Vec::new();

        for a in 0..n {
            for b in (0..n).filter(|&b| b != a) {
                if let Interaction::Collision(event) = interact(bodies, a, b, force, dt) {
                    contacts.push(event);
                }
            }
        }

        contacts
    }
}

/// Double-buffered evaluation against the start-of-tick state
///
/// Each body sums the gravitational acceleration of every partner it is not
/// touching and takes its own side of the elastic exchange with every partner
/// it newly touches, all from the snapshot. Bodies without a new contact
/// drift by their start-of-tick velocity; bodies with one drift by their new
/// velocity.
///
/// With the `parallel` feature the read-only pass runs on the rayon pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferedPairwise;

/// Pending change for one body
#[derive(Debug)]
struct BodyDelta {
    position: Vec3,
    velocity: Vec3,
    began: Vec<ContactEvent>,
    ended: Vec<BodyId>,
}

impl BufferedPairwise {
    fn delta(bodies: &[Body], idx: usize, force: &dyn ForceModel, dt: f64) -> BodyDelta {
        let body = &bodies[idx];
        let mut acceleration = Vec3::zeros();
        let mut exchange = Vec3::zeros();
        let mut began = Vec::new();
        let mut ended = Vec::new();

        for other in bodies.iter().filter(|other| other.id() != body.id()) {
            match in_contact(body, other) {
                Some(event) => {
                    if !body.is_touching(other.id()) {
                        let (new_velocity, _) =
                            elastic_exchange(body.mass(), body.velocity, other.mass(), other.velocity);
                        exchange += new_velocity - body.velocity;
                        began.push(event);
                    }
                }
                None => {
                    acceleration += force.pair_acceleration(body, other);
                    if body.is_touching(other.id()) {
                        ended.push(other.id());
                    }
                }
            }
        }

        let velocity = body.velocity + acceleration * dt + exchange;
        let drift = if began.is_empty() { body.velocity } else { velocity };

        BodyDelta {
            position: body.position + drift * dt,
            velocity,
            began,
            ended,
        }
    }
}

impl Integrator for BufferedPairwise {
    fn step(&self, bodies: &mut [Body], force: &dyn ForceModel, dt: f64) -> Vec<ContactEvent> {
        let snapshot: &[Body] = bodies;

        #[cfg(feature = "parallel")]
        let deltas: Vec<BodyDelta> = (0..snapshot.len())
            .into_par_iter()
            .map(|i| Self::delta(snapshot, i, force, dt))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let deltas: Vec<BodyDelta> = (0..snapshot.len())
            .map(|i| Self::delta(snapshot, i, force, dt))
            .collect();

        let mut contacts = Vec::new();

        for (body, delta) in bodies.iter_mut().zip(deltas) {
            body.position = delta.position;
            body.velocity = delta.velocity;
            for id in delta.ended {
                body.end_contact(id);
            }
            for event in delta.began {
                body.begin_contact(event.body_b);
                contacts.push(event);
            }
        }

        contacts
    }
}
