use crate::body::{Body, BodyId};
use crate::collisions::detection::*;
use crate::vector::Vec3;

fn body(id: u32, radius: f64, x: f64) -> Body {
    Body::new(BodyId(id), 1.0, radius, Vec3::new(x, 0.0, 0.0), Vec3::zeros()).unwrap()
}

#[test]
fn test_contact_threshold_is_sum_of_radii() {
    let a = body(0, 1.5, 0.0);
    let b = body(1, 2.5, 100.0);
    assert_eq!(contact_threshold(&a, &b), 4.0);
}

#[test]
fn test_in_contact_boundary_is_inclusive() {
    let a = body(0, 1.0, 0.0);
    let exact = body(1, 1.0, 2.0);
    let apart = body(2, 1.0, 2.000001);

    assert!(in_contact(&a, &exact).is_some());
    assert!(in_contact(&a, &apart).is_none());
}

#[test]
fn test_in_contact_event_fields() {
    let a = body(4, 3.0, 0.0);
    let b = body(9, 1.0, 2.0);

    let event = in_contact(&a, &b).unwrap();
    assert_eq!(event.body_a, BodyId(4));
    assert_eq!(event.body_b, BodyId(9));
    assert_eq!(event.separation, 2.0);
    assert_eq!(event.contact_radius, 4.0);
}

#[test]
fn test_point_masses_touch_only_when_coincident() {
    let a = body(0, 0.0, 0.0);
    let b = body(1, 0.0, 0.0);
    let c = body(2, 0.0, 1e-9);

    assert!(in_contact(&a, &b).is_some());
    assert!(in_contact(&a, &c).is_none());
}

#[test]
fn test_detect_contacts_reports_each_pair_once() {
    let bodies = vec![
        body(0, 1.0, 0.0),
        body(1, 1.0, 1.5),  // overlaps 0 and 2
        body(2, 1.0, 3.0),  // overlaps 1
        body(3, 1.0, 50.0), // alone
    ];

    let events = detect_contacts(&bodies);
    let pairs: Vec<(u32, u32)> = events.iter().map(|e| (e.body_a.0, e.body_b.0)).collect();

    assert_eq!(pairs, vec![(0, 1), (1, 2)]);
}

#[test]
fn test_detect_contacts_empty() {
    assert!(detect_contacts(&[]).is_empty());
    assert!(detect_contacts(&[body(0, 1.0, 0.0)]).is_empty());
}
