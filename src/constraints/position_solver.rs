// src/constraints/position_solver.rs

use crate::bodies::RigidBody;
use crate::catalog::BodyCatalog;
use crate::interactions::{collide_ellipsoid_plane, ContactManifold, Plane};
use crate::utils::PhysicsError;

/// Projects a penetrating body straight back out of the plane.
///
/// The full depth is removed in one go, with no softening and no change to
/// velocity. Penetrations shallower than `slop` are left for the velocity
/// solver to settle.
///
/// # Returns
/// `true` if the body was moved.
///
/// # Example
/// ```
/// use glam::Vec3;
/// use melon_physics::bodies::{Pose, RigidBody};
/// use melon_physics::constraints::correct_position;
/// use melon_physics::interactions::{collide_ellipsoid_plane, Plane};
///
/// let mut body = RigidBody::new(0, Pose::at(Vec3::new(0.0, 0.0, 0.05)));
/// let manifold = collide_ellipsoid_plane(&body, Vec3::splat(0.1), &Plane::new(Vec3::ZERO, Vec3::Z));
/// assert!(correct_position(&mut body, &manifold, 1e-3));
/// assert!((body.position.z - 0.1).abs() < 1e-6);
/// ```
#[inline]
pub fn correct_position(body: &mut RigidBody, manifold: &ContactManifold, slop: f32) -> bool {
    if !manifold.is_touching() || -manifold.penetration_depth < slop {
        return false;
    }
    // depth <= 0 and normal_b_to_a points into the plane, so this lifts the body out
    body.position += manifold.penetration_depth * manifold.normal_b_to_a;
    true
}

/// Re-detects every body against `plane` from its latest pose and applies
/// [`correct_position`].
///
/// # Returns
/// The number of bodies moved.
pub fn solve_positions(
    bodies: &mut [RigidBody],
    catalog: &BodyCatalog,
    plane: &Plane,
    slop: f32,
) -> Result<usize, PhysicsError> {
    for body in bodies.iter() {
        catalog.lookup(body.type_id)?;
    }

    let mut corrected = 0;
    for body in bodies.iter_mut() {
        let radii = catalog.lookup(body.type_id)?.radii;
        let manifold = collide_ellipsoid_plane(body, radii, plane);
        if correct_position(body, &manifold, slop) {
            corrected += 1;
        }
    }
    Ok(corrected)
}
