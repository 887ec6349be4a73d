// src/interactions/ellipsoid_plane.rs

use glam::{Mat3, Vec3};
use crate::bodies::RigidBody;
use crate::utils::PhysicsConstants;

/// An infinite static plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    /// Unit normal pointing toward the side bodies live on.
    pub normal: Vec3,
}

impl Plane {
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self { origin, normal }
    }

    /// The floor of the box described by `constants`.
    pub fn floor(constants: &PhysicsConstants) -> Self {
        Self::new(constants.floor_origin, constants.floor_normal)
    }
}

/// Geometry of a single ellipsoid-plane contact. Built and consumed within one
/// solver pass; never cached between steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactManifold {
    /// Signed gap along the plane normal. Zero or negative means contact.
    pub penetration_depth: f32,
    /// Contact point relative to the body centroid, in world axes.
    pub contact_point_rel_a: Vec3,
    /// Contact point relative to the plane origin.
    pub contact_point_rel_b: Vec3,
    /// Negated plane normal.
    pub normal_b_to_a: Vec3,
}

impl ContactManifold {
    pub fn is_touching(&self) -> bool {
        self.penetration_depth <= 0.0
    }
}

/// Finds the point on an oriented ellipsoid furthest along `dir`.
///
/// The ellipsoid is `R * A * unit_sphere` with `A = diag(radii)`. Pulling
/// `dir` into local axes, the furthest point of the unit sphere under `A` is
/// `A * (A * d) / |A * d|`, which is then rotated back out.
///
/// # Arguments
/// * `orientation` - Rotation `R` whose columns are the local axes in world space.
/// * `radii` - Semi-axes of the ellipsoid.
/// * `dir` - World-space query direction; need not be normalised.
///
/// # Returns
/// The support point relative to the ellipsoid centre, in world axes. A zero
/// direction yields the centre.
///
/// # Example
/// ```
/// use glam::{Mat3, Vec3};
/// use melon_physics::interactions::support_ellipsoid;
///
/// let p = support_ellipsoid(Mat3::IDENTITY, Vec3::new(0.14, 0.2, 0.14), -Vec3::Z);
/// assert!((p - Vec3::new(0.0, 0.0, -0.14)).length() < 1e-6);
/// ```
#[inline]
pub fn support_ellipsoid(orientation: Mat3, radii: Vec3, dir: Vec3) -> Vec3 {
    let scaled = radii * (orientation.transpose() * dir);
    let length = scaled.length();
    if length <= f32::EPSILON {
        return Vec3::ZERO;
    }
    orientation * (radii * (scaled / length))
}

/// Tests an ellipsoidal body against a static plane.
///
/// The deepest candidate point is the support point opposite the plane
/// normal. The body is in contact when the returned depth is `<= 0`.
///
/// # Arguments
/// * `body` - Pose of the ellipsoid.
/// * `radii` - Semi-axes of the body's type.
/// * `plane` - The static plane.
///
/// # Returns
/// The contact manifold for the current pose. Pure; call again after the
/// pose changes.
pub fn collide_ellipsoid_plane(body: &RigidBody, radii: Vec3, plane: &Plane) -> ContactManifold {
    let contact_point_rel_a = support_ellipsoid(body.orientation, radii, -plane.normal);
    let contact_point_rel_b = contact_point_rel_a + body.position - plane.origin;

    ContactManifold {
        penetration_depth: contact_point_rel_b.dot(plane.normal),
        contact_point_rel_a,
        contact_point_rel_b,
        normal_b_to_a: -plane.normal,
    }
}
