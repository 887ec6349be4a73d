// src/constraints/velocity_solver.rs

use log::{trace, warn};
use crate::bodies::{BodyDynamics, RigidBody};
use crate::catalog::{BodyCatalog, BodyType};
use crate::interactions::{collide_ellipsoid_plane, ContactManifold, Plane};
use crate::utils::{to_world_inertia, PhysicsError};

/// Outcome of resolving one contact's normal velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactImpulse {
    /// The body is not touching the plane.
    Separated,
    /// An impulse of the given magnitude was applied along the plane normal.
    Applied(f32),
    /// The effective mass along the normal was too small to divide by.
    Degenerate,
}

/// Removes all velocity along the contact normal at the contact point.
///
/// The impulse is `j = v_n / k`, with `k` the effective inverse mass along
/// the normal:
/// ```text
/// k = m^-1 + n . ((I_world^-1 (r x n)) x r)
/// ```
/// It is not clamped and carries no restitution, so the contact is perfectly
/// inelastic and may pull as well as push. Both the linear and the angular
/// velocity are updated.
///
/// # Arguments
/// * `body` - Pose of the body; supplies the orientation for the inertia tensor.
/// * `dynamics` - Velocities to update in place.
/// * `body_type` - Mass properties of the body.
/// * `manifold` - Contact against the plane for the body's current pose.
/// * `min_effective_mass` - `k` at or below which no impulse is applied.
///
/// # Returns
/// What happened at this contact.
pub fn resolve_contact_velocity(
    body: &RigidBody,
    dynamics: &mut BodyDynamics,
    body_type: &BodyType,
    manifold: &ContactManifold,
    min_effective_mass: f32,
) -> ContactImpulse {
    if !manifold.is_touching() {
        return ContactImpulse::Separated;
    }

    let inverse_inertia = to_world_inertia(body.orientation, body_type.inverse_inertia);
    let n = -manifold.normal_b_to_a;
    let r = manifold.contact_point_rel_a;
    let r_cross_n = r.cross(n);

    let effective_mass = body_type.inverse_mass + n.dot((inverse_inertia * r_cross_n).cross(r));
    if !(effective_mass > min_effective_mass) || !effective_mass.is_finite() {
        warn!(
            "Skipping contact impulse: effective inverse mass {} along normal {} is degenerate",
            effective_mass, n
        );
        return ContactImpulse::Degenerate;
    }

    let normal_velocity = dynamics.point_velocity(r).dot(n);
    let impulse = normal_velocity / effective_mass;

    dynamics.linear_velocity -= body_type.inverse_mass * impulse * n;
    dynamics.angular_velocity -= inverse_inertia * (impulse * r_cross_n);

    trace!(
        "Contact at depth {:.6}: v_n={:.6}, k={:.3}, impulse={:.6}",
        manifold.penetration_depth, normal_velocity, effective_mass, impulse
    );
    ContactImpulse::Applied(impulse)
}

/// Runs [`resolve_contact_velocity`] for every body against `plane`,
/// detecting contacts from the current poses.
///
/// # Returns
/// The number of bodies that received an impulse.
///
/// # Errors
/// Returns an error if the arrays differ in length or a body references a
/// type the catalog does not contain. Both are checked before any velocity
/// is touched.
pub fn solve_velocities(
    bodies: &[RigidBody],
    dynamics: &mut [BodyDynamics],
    catalog: &BodyCatalog,
    plane: &Plane,
    min_effective_mass: f32,
) -> Result<usize, PhysicsError> {
    if bodies.len() != dynamics.len() {
        return Err(PhysicsError::MismatchedArrays { bodies: bodies.len(), dynamics: dynamics.len() });
    }
    for body in bodies {
        catalog.lookup(body.type_id)?;
    }

    let mut applied = 0;
    for (body, dynamics) in bodies.iter().zip(dynamics.iter_mut()) {
        let body_type = catalog.lookup(body.type_id)?;
        let manifold = collide_ellipsoid_plane(body, body_type.radii, plane);
        if let ContactImpulse::Applied(_) =
            resolve_contact_velocity(body, dynamics, body_type, &manifold, min_effective_mass)
        {
            applied += 1;
        }
    }
    Ok(applied)
}
