//! Tick-driven Newtonian body dynamics
//!
//! A [`World`](world::World) owns a set of massive spheres. Each call to
//! [`World::step`](world::World::step) lets every body interact with every
//! other: bodies that are apart attract under inverse-square gravity and are
//! advanced with explicit Euler, bodies that overlap exchange velocities
//! elastically. Per-body touching sets record which contacts have already
//! been resolved so that a lasting overlap is handled once.
//!
//! ```
//! use orrery::vector::Vec3;
//! use orrery::world::World;
//!
//! let mut world = World::new();
//! let sun = world.add_body(4.0e9, 10.0, Vec3::zeros(), Vec3::zeros()).unwrap();
//! let rock = world.add_body(200.0, 1.0, Vec3::new(1000.0, 0.0, 0.0), Vec3::zeros()).unwrap();
//!
//! world.step();
//! assert!(world.body(rock).unwrap().velocity.x < 0.0);
//! assert!(world.body(sun).unwrap().velocity.x > 0.0);
//! ```

pub mod body;
pub mod collisions;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod interaction;
pub mod scenario;
pub mod vector;
pub mod world;

pub use error::{Error, Result};

#[cfg(test)]
mod integrator_test;
