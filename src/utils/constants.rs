use glam::Vec3;
use crate::utils;

/// Density shared by every fruit in the default catalog.
pub const FRUIT_DENSITY: f32 = 0.11;

/// Maximum number of live bodies in the default configuration.
pub const MAX_BODIES: usize = 1 << 10;

/// Penetration below which the position corrector leaves a body alone.
pub const PHYSICS_SLOP: f32 = 1e-3;

/// Tolerance used when checking that a matrix is a rotation.
pub const ORTHONORMAL_TOLERANCE: f32 = 1e-3;

pub const DEFAULT_PHYSICS_CONSTANTS: utils::PhysicsConstants = utils::PhysicsConstants {
    gravity: 10.0,
    max_bodies: MAX_BODIES,
    substeps: 10,
    frame_dt: 1.0 / 60.0,
    position_slop: PHYSICS_SLOP,
    min_effective_mass: 1e-9,
    floor_origin: Vec3::ZERO,
    floor_normal: Vec3::Z,
};
