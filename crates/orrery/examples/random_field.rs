//! Random field of bodies
//!
//! Generates the default hundred-body field from a fixed seed, runs it for a
//! while and reports contacts, energy and any bodies that blew up.
//!
//! Run with: cargo run --package orrery --example random_field

use orrery::config::WorldConfig;
use orrery::scenario::{RandomFieldParams, random_field};

const TICKS: u64 = 600;

fn main() -> orrery::Result<()> {
    println!("Random Field: {TICKS} ticks\n");
    println!("{}", "=".repeat(60));

    let params = RandomFieldParams::default();
    let mut world = random_field(&params, WorldConfig::default(), 2022)?;

    println!("Bodies: {}", world.body_count());
    println!("Total mass: {:.3e} kg", world.total_mass());
    println!("Initial kinetic energy: {:.3e} J", world.kinetic_energy());
    println!("Initial potential energy: {:.3e} J", world.potential_energy());

    let mut contacts = 0;
    for _ in 0..TICKS {
        let report = world.step();
        contacts += report.collisions.len();

        if !report.degenerate.is_empty() {
            println!("Tick {}: degenerate bodies {:?}", report.tick, report.degenerate);
            break;
        }
    }

    println!("\nAfter {} ticks:", world.tick());
    println!("  Contacts resolved: {contacts}");
    println!("  Kinetic energy: {:.3e} J", world.kinetic_energy());
    println!("  Potential energy: {:.3e} J", world.potential_energy());

    let fastest = world
        .bodies()
        .iter()
        .max_by(|a, b| a.speed().total_cmp(&b.speed()));
    if let Some(body) = fastest {
        println!("  Fastest: {}", body.summary());
    }

    Ok(())
}
