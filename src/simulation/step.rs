// src/simulation/step.rs

use crate::bodies::{BodyDynamics, RigidBody};
use crate::catalog::BodyCatalog;
use crate::constraints::{solve_positions, solve_velocities};
use crate::integrators::{apply_gravity, integrate_pose};
use crate::interactions::Plane;
use crate::utils::{PhysicsConstants, PhysicsError};

/// Per-substep contact counts, mostly for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Bodies that received a velocity impulse.
    pub impulses: usize,
    /// Bodies that were projected out of the floor.
    pub corrections: usize,
}

/// Advances every body by one substep of length `dt`.
///
/// Phases run in a fixed order over the whole array:
/// 1. gravity into linear velocity,
/// 2. contact velocity solve against the floor,
/// 3. position and orientation integration (with renormalisation),
/// 4. position projection out of the floor, from a fresh contact test.
///
/// The arrays are mutated in place. Everything is validated up front, so an
/// error leaves both arrays exactly as they were.
///
/// # Errors
/// Returns an error if `dt` is not positive and finite, the arrays differ in
/// length, or a body references a type the catalog does not contain.
///
/// # Example
/// ```
/// use glam::Vec3;
/// use melon_physics::bodies::{BodyDynamics, Pose, RigidBody};
/// use melon_physics::catalog::BodyCatalog;
/// use melon_physics::simulation::step;
/// use melon_physics::utils::PhysicsConstants;
///
/// let catalog = BodyCatalog::fruit().unwrap();
/// let constants = PhysicsConstants::default();
/// let mut bodies = [RigidBody::new(0, Pose::at(Vec3::new(0.0, 0.0, 1.0)))];
/// let mut dynamics = [BodyDynamics::default()];
///
/// step(&mut bodies, &mut dynamics, &catalog, &constants, constants.substep_dt()).unwrap();
/// assert!(dynamics[0].linear_velocity.z < 0.0);
/// ```
pub fn step(
    bodies: &mut [RigidBody],
    dynamics: &mut [BodyDynamics],
    catalog: &BodyCatalog,
    constants: &PhysicsConstants,
    dt: f32,
) -> Result<StepReport, PhysicsError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(PhysicsError::InvalidTimeStep(dt));
    }
    if bodies.len() != dynamics.len() {
        return Err(PhysicsError::MismatchedArrays { bodies: bodies.len(), dynamics: dynamics.len() });
    }
    for body in bodies.iter() {
        catalog.lookup(body.type_id)?;
    }

    let floor = Plane::floor(constants);
    let gravity = constants.gravity_vector();

    for (body, dynamics) in bodies.iter().zip(dynamics.iter_mut()) {
        apply_gravity(dynamics, catalog.lookup(body.type_id)?, gravity, dt);
    }

    let impulses = solve_velocities(bodies, dynamics, catalog, &floor, constants.min_effective_mass)?;

    for (body, dynamics) in bodies.iter_mut().zip(dynamics.iter()) {
        integrate_pose(body, dynamics, dt);
    }

    let corrections = solve_positions(bodies, catalog, &floor, constants.position_slop)?;

    Ok(StepReport { impulses, corrections })
}
