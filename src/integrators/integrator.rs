// src/integrators/integrator.rs

use glam::Vec3;
use crate::bodies::{BodyDynamics, RigidBody};
use crate::catalog::BodyType;
use crate::integrators::renormalise;
use crate::utils::skew;

/// Adds one step of gravity to a body's linear velocity.
///
/// Infinitely heavy bodies (zero inverse mass) are left alone.
#[inline]
pub fn apply_gravity(dynamics: &mut BodyDynamics, body_type: &BodyType, gravity: Vec3, dt: f32) {
    if body_type.inverse_mass != 0.0 {
        dynamics.linear_velocity += dt * gravity;
    }
}

/// Advances position and orientation with the (already solved) velocities.
///
/// Position is explicit in the new velocity, which together with
/// [`apply_gravity`] running first gives semi-implicit Euler. Orientation
/// takes one first-order step `R + dt * W * R` along the angular velocity
/// screw `W`, which leaves the rotation manifold, so the result is always
/// passed through [`renormalise`] before it is stored.
///
/// # Example
/// ```
/// use glam::{Mat3, Vec3};
/// use melon_physics::bodies::{BodyDynamics, Pose, RigidBody};
/// use melon_physics::integrators::integrate_pose;
///
/// let mut body = RigidBody::new(0, Pose::at(Vec3::ZERO));
/// let dynamics = BodyDynamics::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
/// integrate_pose(&mut body, &dynamics, 0.5);
/// assert_eq!(body.position, Vec3::new(0.5, 0.0, 0.0));
/// assert_eq!(body.orientation, Mat3::IDENTITY);
/// ```
#[inline]
pub fn integrate_pose(body: &mut RigidBody, dynamics: &BodyDynamics, dt: f32) {
    body.position += dt * dynamics.linear_velocity;

    let screw = skew(dynamics.angular_velocity);
    let stepped = body.orientation + dt * (screw * body.orientation);
    body.orientation = renormalise(stepped);
}
