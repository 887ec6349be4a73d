// src/utils/constants_config_tests.rs

use approx::assert_relative_eq;
use glam::Vec3;
use crate::utils::{PhysicsConstants, PhysicsError, DEFAULT_PHYSICS_CONSTANTS, MAX_BODIES};

#[test]
fn test_default_constants() {
    let constants = PhysicsConstants::default();
    assert_eq!(constants, DEFAULT_PHYSICS_CONSTANTS);
    assert_eq!(constants.max_bodies, MAX_BODIES);
    assert_eq!(constants.substeps, 10);
    assert_eq!(constants.gravity_vector(), Vec3::new(0.0, 0.0, -10.0));
    assert!(constants.validate().is_ok());
}

#[test]
fn test_substep_dt() {
    let constants = PhysicsConstants::default();
    assert_relative_eq!(constants.substep_dt(), 1.0 / 600.0, epsilon = 1e-9);

    let constants = PhysicsConstants::new(None, None, Some(4), Some(0.02), None);
    assert_relative_eq!(constants.substep_dt(), 0.005, epsilon = 1e-9);
}

#[test]
fn test_new_overrides_only_given_fields() {
    let constants = PhysicsConstants::new(Some(9.81), Some(8), None, None, Some(0.0));
    assert_eq!(constants.gravity, 9.81);
    assert_eq!(constants.max_bodies, 8);
    assert_eq!(constants.substeps, DEFAULT_PHYSICS_CONSTANTS.substeps);
    assert_eq!(constants.frame_dt, DEFAULT_PHYSICS_CONSTANTS.frame_dt);
    assert_eq!(constants.position_slop, 0.0);
    assert_eq!(constants.floor_normal, Vec3::Z);
}

#[test]
fn test_validate_rejects_bad_values() {
    assert!(PhysicsConstants::new(Some(-1.0), None, None, None, None).validate().is_err(), "Should fail with negative gravity");
    assert!(PhysicsConstants::new(Some(f32::NAN), None, None, None, None).validate().is_err(), "Should fail with NaN gravity");
    assert!(PhysicsConstants::new(None, Some(0), None, None, None).validate().is_err(), "Should fail with zero capacity");
    assert!(PhysicsConstants::new(None, None, Some(0), None, None).validate().is_err(), "Should fail with zero substeps");
    assert!(PhysicsConstants::new(None, None, None, None, Some(-1e-3)).validate().is_err(), "Should fail with negative slop");
    assert_eq!(
        PhysicsConstants::new(None, None, None, Some(0.0), None).validate(),
        Err(PhysicsError::InvalidTimeStep(0.0))
    );

    let tilted = PhysicsConstants { floor_normal: Vec3::new(0.0, 0.5, 1.0), ..Default::default() };
    assert!(tilted.validate().is_err(), "Should fail with a non-unit floor normal");

    let weightless = PhysicsConstants::new(Some(0.0), None, None, None, None);
    assert!(weightless.validate().is_ok(), "Zero gravity is allowed");
}
