//! Head-on collision between a heavy body and a light one
//!
//! Shows the touching set being filled on contact and cleared once the
//! bodies separate, under both pair evaluation strategies.
//!
//! Run with: cargo run --package orrery --example collision_demo

use orrery::config::{PairEvaluation, WorldConfig};
use orrery::vector::Vec3;
use orrery::world::World;

fn run(pair_evaluation: PairEvaluation) -> orrery::Result<()> {
    println!("\nPair evaluation: {pair_evaluation:?}");
    println!("{}", "-".repeat(60));

    let config = WorldConfig {
        pair_evaluation,
        ..WorldConfig::default()
    };
    let mut world = World::with_config(config)?;

    let heavy = world.add_body(4.0e9, 10.0, Vec3::zeros(), Vec3::zeros())?;
    let light = world.add_body(200.0, 2.0, Vec3::new(40.0, 40.0, -25.0), Vec3::new(-8.0, -8.0, 5.0))?;

    let initial_momentum = world.total_momentum();

    for _ in 0..12 {
        let report = world.step();
        let (Some(heavy_body), Some(light_body)) = (world.body(heavy), world.body(light)) else {
            break;
        };

        println!(
            "tick {:>2}  separation {:>8.3}  touching {:<5}  contacts {}  light v = ({:.3}, {:.3}, {:.3})",
            report.tick,
            heavy_body.distance_to(light_body),
            heavy_body.is_touching(light),
            report.collisions.len(),
            light_body.velocity.x,
            light_body.velocity.y,
            light_body.velocity.z,
        );
    }

    let drift = (world.total_momentum() - initial_momentum).magnitude();
    println!("Momentum drift: {drift:.3e} kg m/tick");
    Ok(())
}

fn main() -> orrery::Result<()> {
    println!("Collision Demo");
    println!("{}", "=".repeat(60));

    run(PairEvaluation::Ordered)?;
    run(PairEvaluation::Buffered)?;

    Ok(())
}
