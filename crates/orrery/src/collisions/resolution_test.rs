use approx::assert_relative_eq;

use crate::collisions::resolution::*;
use crate::vector::Vec3;

#[test]
fn test_heavy_body_at_rest() {
    let m1 = 4.0e9;
    let v1 = Vec3::zeros();
    let m2 = 200.0;
    let v2 = Vec3::new(-8.0, -8.0, 5.0);

    let (v1_new, v2_new) = elastic_exchange(m1, v1, m2, v2);

    let total = m1 + m2;
    let expected_v1 = v2 * (2.0 * m2 / total);
    let expected_v2 = v2 * ((m2 - m1) / total);

    assert_relative_eq!(v1_new, expected_v1, max_relative = 1e-12);
    assert_relative_eq!(v2_new, expected_v2, max_relative = 1e-12);

    // The light body bounces back almost unchanged in speed
    assert_relative_eq!(v2_new, Vec3::new(8.0, 8.0, -5.0), max_relative = 1e-6);
    // The heavy one barely moves: 2*200/(4e9+200) * (-8, -8, 5)
    assert_relative_eq!(v1_new.x, -8.0 * 400.0 / total, max_relative = 1e-12);
}

#[test]
fn test_equal_masses_swap_velocities() {
    let va = Vec3::new(3.0, -1.0, 2.0);
    let vb = Vec3::new(-0.5, 4.0, 0.0);

    let (va_new, vb_new) = elastic_exchange(7.0, va, 7.0, vb);

    assert_relative_eq!(va_new, vb);
    assert_relative_eq!(vb_new, va);
}

#[test]
fn test_momentum_conserved() {
    let (ma, mb) = (3.0, 11.0);
    let va = Vec3::new(1.0, 2.0, -3.0);
    let vb = Vec3::new(-4.0, 0.5, 6.0);

    let (va_new, vb_new) = elastic_exchange(ma, va, mb, vb);

    assert_relative_eq!(va * ma + vb * mb, va_new * ma + vb_new * mb, max_relative = 1e-12);
}

#[test]
fn test_kinetic_energy_conserved() {
    let (ma, mb) = (2.0, 5.0);
    let va = Vec3::new(1.0, 0.0, 2.0);
    let vb = Vec3::new(0.0, -3.0, 1.0);

    let (va_new, vb_new) = elastic_exchange(ma, va, mb, vb);

    let ke = |m: f64, v: Vec3| 0.5 * m * v.magnitude_squared();
    assert_relative_eq!(
        ke(ma, va) + ke(mb, vb),
        ke(ma, va_new) + ke(mb, vb_new),
        max_relative = 1e-12
    );
}

#[test]
fn test_exchange_is_symmetric_in_argument_order() {
    let va = Vec3::new(1.0, 2.0, 3.0);
    let vb = Vec3::new(-1.0, 0.0, 4.0);

    let (a1, b1) = elastic_exchange(2.0, va, 9.0, vb);
    let (b2, a2) = elastic_exchange(9.0, vb, 2.0, va);

    assert_relative_eq!(a1, a2);
    assert_relative_eq!(b1, b2);
}
