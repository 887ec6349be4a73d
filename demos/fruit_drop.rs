// demos/fruit_drop.rs

use glam::{Mat3, Vec3};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use melon_physics::bodies::Pose;
use melon_physics::catalog::derive_catalog;
use melon_physics::simulation::Simulation;
use melon_physics::utils::{PhysicsConstants, PhysicsError};

const FRUIT: usize = 24;
const FRAMES: usize = 240;

fn main() -> Result<(), PhysicsError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let catalog = derive_catalog()?;
    let mut sim = Simulation::new(catalog, PhysicsConstants::default())?;
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..FRUIT {
        let type_id = rng.random_range(0..sim.catalog().len());
        let position = Vec3::new(
            rng.random_range(-0.9..0.9),
            rng.random_range(-0.9..0.9),
            rng.random_range(0.5..2.0),
        );
        let orientation = Mat3::from_rotation_z(rng.random_range(0.0..std::f32::consts::TAU))
            * Mat3::from_rotation_x(rng.random_range(-0.5..0.5));
        sim.spawn(type_id, Pose::new(position, orientation))?;
    }

    let mut transforms = Vec::new();
    for frame in 0..FRAMES {
        sim.advance_frame()?;

        let view = sim.render_view();
        if view.needs_reupload {
            view.write_instance_transforms(&mut transforms);
            info!("Frame {}: uploaded {} instance transforms", frame, transforms.len());
            sim.mark_uploaded();
        }
    }

    info!("After {:.2}s of simulated time:", sim.elapsed());
    for (index, instance) in sim.render_view().instances().enumerate() {
        let label = sim.catalog().get(instance.type_id).map_or("?", |t| t.label.as_str());
        info!(
            "  #{:>2} {:<6} at ({:+.3}, {:+.3}, {:.4})",
            index, label, instance.position.x, instance.position.y, instance.position.z
        );
    }
    Ok(())
}
