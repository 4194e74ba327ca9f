//! Contact detection and elastic collision resolution
//!
//! Contact is physical overlap: centres no farther apart than the sum of the
//! radii. Resolution exchanges velocities with the one-dimensional elastic
//! formula applied to the full 3D vectors.

pub mod detection;
pub mod resolution;

#[cfg(test)]
mod detection_test;
#[cfg(test)]
mod resolution_test;

pub use detection::{ContactEvent, contact_threshold, detect_contacts, in_contact};
pub use resolution::elastic_exchange;
