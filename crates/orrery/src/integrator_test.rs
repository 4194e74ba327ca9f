use approx::assert_relative_eq;

use crate::body::{Body, BodyId};
use crate::collisions::elastic_exchange;
use crate::forces::{ForceModel, NewtonianGravity};
use crate::integrator::{BufferedPairwise, Integrator, OrderedPairwise};
use crate::vector::Vec3;

fn body(id: u32, mass: f64, radius: f64, position: Vec3, velocity: Vec3) -> Body {
    Body::new(BodyId(id), mass, radius, position, velocity).unwrap()
}

/// Three bodies far apart, each moving
fn spread_triplet() -> Vec<Body> {
    vec![
        body(0, 1.0e10, 1.0, Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0)),
        body(1, 1.0e10, 1.0, Vec3::new(1000.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
        body(2, 1.0e10, 1.0, Vec3::new(0.0, 1000.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
    ]
}

fn overlapping_pair() -> Vec<Body> {
    vec![
        body(0, 4.0e9, 10.0, Vec3::zeros(), Vec3::zeros()),
        body(1, 200.0, 10.0, Vec3::new(5.0, 0.0, 0.0), Vec3::new(-8.0, -8.0, 5.0)),
    ]
}

#[test]
fn test_ordered_lone_body_drifts_once() {
    let mut bodies = vec![body(0, 1.0, 1.0, Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.5, -2.0, 0.0))];

    let contacts = OrderedPairwise.step(&mut bodies, &NewtonianGravity::new(), 1.0);

    assert!(contacts.is_empty());
    assert_eq!(bodies[0].position, Vec3::new(1.5, -1.0, 1.0));
    assert_eq!(bodies[0].velocity, Vec3::new(0.5, -2.0, 0.0));
}

#[test]
fn test_ordered_empty_is_noop() {
    let mut bodies: Vec<Body> = Vec::new();
    assert!(OrderedPairwise.step(&mut bodies, &NewtonianGravity::new(), 1.0).is_empty());
}

#[test]
fn test_ordered_drifts_once_per_free_partner() {
    let mut bodies = spread_triplet();
    let gravity = NewtonianGravity::new();
    let accel_from_1 = gravity.pair_acceleration(&bodies[0], &bodies[1]);

    OrderedPairwise.step(&mut bodies, &gravity, 1.0);

    // Body 0 is first, so its partners have not moved yet. It drifts by its
    // initial velocity for partner 1, then by the updated velocity for partner 2.
    let expected = Vec3::new(1.0, 0.0, 0.0) + (Vec3::new(1.0, 0.0, 0.0) + accel_from_1);
    assert_relative_eq!(bodies[0].position, expected, max_relative = 1e-12);
}

#[test]
fn test_ordered_collision_is_evaluated_from_both_sides() {
    let mut bodies = overlapping_pair();

    let contacts = OrderedPairwise.step(&mut bodies, &NewtonianGravity::new(), 1.0);

    let pairs: Vec<(BodyId, BodyId)> = contacts.iter().map(|e| (e.body_a, e.body_b)).collect();
    assert_eq!(pairs, vec![(BodyId(0), BodyId(1)), (BodyId(1), BodyId(0))]);
    assert!(bodies[0].is_touching(BodyId(1)));
    assert!(bodies[1].is_touching(BodyId(0)));
}

#[test]
fn test_buffered_drifts_once_with_start_velocity() {
    let mut bodies = spread_triplet();
    let starts: Vec<(Vec3, Vec3)> = bodies.iter().map(|b| (b.position, b.velocity)).collect();

    BufferedPairwise.step(&mut bodies, &NewtonianGravity::new(), 1.0);

    for (body, (position, velocity)) in bodies.iter().zip(starts) {
        assert_eq!(body.position, position + velocity);
    }
}

#[test]
fn test_buffered_sums_accelerations_from_snapshot() {
    let mut bodies = spread_triplet();
    let gravity = NewtonianGravity::new();
    let expected = bodies[0].velocity
        + gravity.pair_acceleration(&bodies[0], &bodies[1])
        + gravity.pair_acceleration(&bodies[0], &bodies[2]);

    BufferedPairwise.step(&mut bodies, &gravity, 1.0);

    assert_relative_eq!(bodies[0].velocity, expected, max_relative = 1e-12);
}

#[test]
fn test_buffered_conserves_momentum_in_free_motion() {
    let mut bodies = vec![
        body(0, 4.0e9, 1.0, Vec3::zeros(), Vec3::new(0.0, 0.1, 0.0)),
        body(1, 200.0, 1.0, Vec3::new(1000.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -3.0)),
    ];
    let momentum = |bodies: &[Body]| bodies.iter().fold(Vec3::zeros(), |acc, b| acc + b.momentum());
    let before = momentum(&bodies);

    BufferedPairwise.step(&mut bodies, &NewtonianGravity::new(), 1.0);

    assert_relative_eq!(momentum(&bodies), before, epsilon = 1e-9, max_relative = 1e-12);
}

#[test]
fn test_buffered_collision_resolves_once_per_side() {
    let mut bodies = overlapping_pair();
    let (expected_a, expected_b) =
        elastic_exchange(4.0e9, Vec3::zeros(), 200.0, Vec3::new(-8.0, -8.0, 5.0));

    let contacts = BufferedPairwise.step(&mut bodies, &NewtonianGravity::new(), 1.0);

    assert_eq!(contacts.len(), 2);
    assert_relative_eq!(bodies[0].velocity, expected_a, max_relative = 1e-12);
    assert_relative_eq!(bodies[1].velocity, expected_b, max_relative = 1e-12);
    assert_relative_eq!(bodies[0].position, expected_a, max_relative = 1e-12);
    assert_relative_eq!(
        bodies[1].position,
        Vec3::new(5.0, 0.0, 0.0) + expected_b,
        max_relative = 1e-12
    );
    assert!(bodies[0].is_touching(BodyId(1)));
    assert!(bodies[1].is_touching(BodyId(0)));
}

#[test]
fn test_buffered_contact_ends_when_apart() {
    let mut bodies = overlapping_pair();
    let gravity = NewtonianGravity::new();
    BufferedPairwise.step(&mut bodies, &gravity, 1.0);

    bodies[1].position = Vec3::new(500.0, 0.0, 0.0);
    let contacts = BufferedPairwise.step(&mut bodies, &gravity, 1.0);

    assert!(contacts.is_empty());
    assert!(!bodies[0].is_touching(BodyId(1)));
    assert!(!bodies[1].is_touching(BodyId(0)));
}
