// src/utils/constants_config.rs

use glam::Vec3;
use crate::utils::{
    DEFAULT_PHYSICS_CONSTANTS,
    errors::PhysicsError
};

/// Tunables for the rigid-body kernel and the substep loop that drives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConstants {
    /// Magnitude of gravity; the acceleration vector is `(0, 0, -gravity)`.
    pub gravity: f32,
    /// Fixed capacity of the body store.
    pub max_bodies: usize,
    /// Number of substeps run per rendered frame.
    pub substeps: usize,
    /// Duration of one rendered frame in seconds.
    pub frame_dt: f32,
    /// Penetration depth below which position correction is skipped.
    pub position_slop: f32,
    /// Effective inverse mass below which a contact impulse is not applied.
    pub min_effective_mass: f32,
    /// A point on the static floor plane.
    pub floor_origin: Vec3,
    /// Unit normal of the floor plane, pointing into the box.
    pub floor_normal: Vec3,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        DEFAULT_PHYSICS_CONSTANTS
    }
}

impl PhysicsConstants {
    pub fn new(
        gravity: Option<f32>,
        max_bodies: Option<usize>,
        substeps: Option<usize>,
        frame_dt: Option<f32>,
        position_slop: Option<f32>,
    ) -> Self {
        let default = DEFAULT_PHYSICS_CONSTANTS;
        Self {
            gravity: gravity.unwrap_or(default.gravity),
            max_bodies: max_bodies.unwrap_or(default.max_bodies),
            substeps: substeps.unwrap_or(default.substeps),
            frame_dt: frame_dt.unwrap_or(default.frame_dt),
            position_slop: position_slop.unwrap_or(default.position_slop),
            ..default
        }
    }

    /// Checks every field, returning the first problem found.
    ///
    /// # Example
    /// ```
    /// use melon_physics::utils::PhysicsConstants;
    ///
    /// assert!(PhysicsConstants::default().validate().is_ok());
    /// assert!(PhysicsConstants::new(None, Some(0), None, None, None).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(PhysicsError::InvalidConfiguration(format!("gravity must be finite and non-negative, got {}", self.gravity)));
        }
        if self.max_bodies == 0 {
            return Err(PhysicsError::InvalidConfiguration("max_bodies must be at least 1".to_string()));
        }
        if self.substeps == 0 {
            return Err(PhysicsError::InvalidConfiguration("substeps must be at least 1".to_string()));
        }
        if !self.frame_dt.is_finite() || self.frame_dt <= 0.0 {
            return Err(PhysicsError::InvalidTimeStep(self.frame_dt));
        }
        if !(self.position_slop >= 0.0) {
            return Err(PhysicsError::InvalidConfiguration(format!("position_slop must be non-negative, got {}", self.position_slop)));
        }
        if !(self.min_effective_mass >= 0.0) {
            return Err(PhysicsError::InvalidConfiguration(format!("min_effective_mass must be non-negative, got {}", self.min_effective_mass)));
        }
        if !self.floor_origin.is_finite() {
            return Err(PhysicsError::InvalidConfiguration("floor_origin must be finite".to_string()));
        }
        if !self.floor_normal.is_normalized() {
            return Err(PhysicsError::InvalidConfiguration(format!("floor_normal must be unit length, got {}", self.floor_normal)));
        }
        Ok(())
    }

    /// Duration of one substep.
    pub fn substep_dt(&self) -> f32 {
        self.frame_dt / self.substeps as f32
    }

    pub fn gravity_vector(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, -self.gravity)
    }
}
