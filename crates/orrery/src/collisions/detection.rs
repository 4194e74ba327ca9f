//! Contact detection
//!
//! The engine tests contact inline while it walks the pairs of a tick; the
//! functions here expose the same test to callers that want a snapshot of
//! every overlapping pair.

use serde::Serialize;

use crate::body::{Body, BodyId};

/// A pair of bodies found in contact
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactEvent {
    /// Body that initiated the evaluation
    pub body_a: BodyId,
    /// The other body
    pub body_b: BodyId,
    /// Centre separation at detection time
    pub separation: f64,
    /// Sum of radii that the separation did not exceed
    pub contact_radius: f64,
}

/// Separation at or below which two bodies are in contact
pub fn contact_threshold(a: &Body, b: &Body) -> f64 {
    a.radius() + b.radius()
}

/// Check a single pair, producing an event if they touch
///
/// # Examples
///
/// ```
/// use orrery::body::{Body, BodyId};
/// use orrery::collisions::in_contact;
/// use orrery::vector::Vec3;
///
/// let a = Body::new(BodyId(0), 1.0, 2.0, Vec3::zeros(), Vec3::zeros()).unwrap();
/// let b = Body::new(BodyId(1), 1.0, 2.0, Vec3::new(3.0, 0.0, 0.0), Vec3::zeros()).unwrap();
///
/// let event = in_contact(&a, &b).unwrap();
/// assert_eq!(event.separation, 3.0);
/// assert_eq!(event.contact_radius, 4.0);
/// ```
pub fn in_contact(a: &Body, b: &Body) -> Option<ContactEvent> {
    let separation = a.distance_to(b);
    let contact_radius = contact_threshold(a, b);

    (separation <= contact_radius).then(|| ContactEvent {
        body_a: a.id(),
        body_b: b.id(),
        separation,
        contact_radius,
    })
}

/// Every overlapping pair, each unordered pair reported once
///
/// Exhaustive O(N²) scan.
pub fn detect_contacts(bodies: &[Body]) -> Vec<ContactEvent> {
    let n = bodies.len();

    (0..n)
        .flat_map(|i| ((i + 1)..n).filter_map(move |j| in_contact(&bodies[i], &bodies[j])))
        .collect()
}
