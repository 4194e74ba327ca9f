//! Scaled Earth and Moon
//!
//! Both bodies start moving along +x; gravity slowly pulls them together
//! along z. Demonstrates mass mutation between ticks.
//!
//! Run with: cargo run --package orrery --example earth_moon

use orrery::scenario::earth_moon;

fn main() -> orrery::Result<()> {
    println!("Earth-Moon\n");
    println!("{}", "=".repeat(60));

    let mut world = earth_moon()?;
    let earth = world.bodies()[0].id();
    let moon = world.bodies()[1].id();

    for body in world.bodies() {
        println!("{}", body.summary());
    }

    world.run(1_000);
    let separation = |world: &orrery::world::World| -> Option<f64> {
        Some(world.body(earth)?.distance_to(world.body(moon)?))
    };
    println!("\nAfter {} ticks: separation {:?} m", world.tick(), separation(&world));

    // What a tap on the Earth does in the interactive front end
    let mass = world.double_mass(earth)?;
    println!("Earth mass doubled to {mass:.3e} kg");

    world.run(1_000);
    println!("After {} ticks: separation {:?} m", world.tick(), separation(&world));

    if let Some((id, distance)) = world.closest_to(moon)? {
        println!("Closest to the Moon: body #{} at {distance:.1} m", id.0);
    }

    Ok(())
}
