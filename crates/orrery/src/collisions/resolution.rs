//! Elastic collision resolution

use crate::vector::Vec3;

/// Post-collision velocities of two bodies
///
/// Applies the head-on elastic formula
///
/// ```text
/// v_a' = ((m_a - m_b) / (m_a + m_b)) v_a + (2 m_b / (m_a + m_b)) v_b
/// v_b' = ((m_b - m_a) / (m_a + m_b)) v_b + (2 m_a / (m_a + m_b)) v_a
/// ```
///
/// to the whole velocity vectors. Velocities are not projected onto the line
/// of centres first, so glancing contacts exchange tangential motion too.
/// Momentum is conserved either way.
///
/// # Examples
///
/// ```
/// use orrery::collisions::elastic_exchange;
/// use orrery::vector::Vec3;
///
/// // Equal masses swap velocities
/// let (va, vb) = elastic_exchange(1.0, Vec3::new(1.0, 0.0, 0.0), 1.0, Vec3::zeros());
/// assert_eq!(va, Vec3::zeros());
/// assert_eq!(vb, Vec3::new(1.0, 0.0, 0.0));
/// ```
pub fn elastic_exchange(mass_a: f64, velocity_a: Vec3, mass_b: f64, velocity_b: Vec3) -> (Vec3, Vec3) {
    let total = mass_a + mass_b;

    let new_a = velocity_a * ((mass_a - mass_b) / total) + velocity_b * (2.0 * mass_b / total);
    let new_b = velocity_b * ((mass_b - mass_a) / total) + velocity_a * (2.0 * mass_a / total);

    (new_a, new_b)
}
