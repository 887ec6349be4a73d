use approx::assert_abs_diff_eq;
use glam::{Mat3, Vec3};
use crate::bodies::{Pose, RigidBody};
use crate::catalog::BodyCatalog;
use crate::constraints::{correct_position, solve_positions};
use crate::interactions::{collide_ellipsoid_plane, Plane};

fn floor() -> Plane {
    Plane::new(Vec3::ZERO, Vec3::Z)
}

#[test]
fn test_correct_position_lifts_to_surface() {
    let radii = Vec3::new(0.14, 0.2, 0.14);
    let orientation = Mat3::from_rotation_y(0.7);
    let mut body = RigidBody::new(1, Pose::new(Vec3::new(0.2, 0.1, 0.05), orientation));

    let manifold = collide_ellipsoid_plane(&body, radii, &floor());
    assert!(correct_position(&mut body, &manifold, 0.0));

    let after = collide_ellipsoid_plane(&body, radii, &floor());
    assert_abs_diff_eq!(after.penetration_depth, 0.0, epsilon = 1e-6);
    assert_eq!(body.orientation, orientation, "Only the position is corrected");
    assert_eq!((body.position.x, body.position.y), (0.2, 0.1));
}

#[test]
fn test_correct_position_respects_slop() {
    let radii = Vec3::splat(0.1);
    let mut shallow = RigidBody::new(0, Pose::at(Vec3::new(0.0, 0.0, 0.1 - 5e-4)));
    let manifold = collide_ellipsoid_plane(&shallow, radii, &floor());
    assert!(!correct_position(&mut shallow, &manifold, 1e-3));
    assert_eq!(shallow.position.z, 0.1 - 5e-4);

    let mut deep = RigidBody::new(0, Pose::at(Vec3::new(0.0, 0.0, 0.09)));
    let manifold = collide_ellipsoid_plane(&deep, radii, &floor());
    assert!(correct_position(&mut deep, &manifold, 1e-3));
    assert_abs_diff_eq!(deep.position.z, 0.1, epsilon = 1e-6);
}

#[test]
fn test_correct_position_ignores_separated_body() {
    let mut body = RigidBody::new(0, Pose::at(Vec3::new(0.0, 0.0, 0.3)));
    let manifold = collide_ellipsoid_plane(&body, Vec3::splat(0.1), &floor());
    assert!(!correct_position(&mut body, &manifold, 0.0));
    assert_eq!(body.position.z, 0.3);
}

#[test]
fn test_solve_positions() {
    let catalog = BodyCatalog::fruit().unwrap();
    let mut bodies = [
        RigidBody::new(0, Pose::at(Vec3::new(0.0, 0.0, 0.02))),
        RigidBody::new(1, Pose::at(Vec3::new(1.0, 0.0, 1.0))),
    ];
    assert_eq!(solve_positions(&mut bodies, &catalog, &floor(), 1e-3), Ok(1));
    assert_abs_diff_eq!(bodies[0].position.z, 0.1, epsilon = 1e-6);
    assert_eq!(bodies[1].position.z, 1.0);
}
