// src/bodies/rigid_body.rs

use glam::{Mat3, Vec3};
use crate::catalog::BodyTypeId;

/// Position and orientation of a body in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    /// Columns are the body's local axes expressed in world space.
    pub orientation: Mat3,
}

impl Pose {
    pub fn new(position: Vec3, orientation: Mat3) -> Self {
        Self { position, orientation }
    }

    /// A pose at `position` with the identity orientation.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Mat3::IDENTITY)
    }
}

/// The pose half of a live body: centroid, orientation and catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    pub position: Vec3,
    pub orientation: Mat3,
    pub type_id: BodyTypeId,
}

impl RigidBody {
    pub fn new(type_id: BodyTypeId, pose: Pose) -> Self {
        Self {
            position: pose.position,
            orientation: pose.orientation,
            type_id,
        }
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.orientation)
    }
}

/// World-space velocities, paired by index with a [`RigidBody`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyDynamics {
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
}

impl BodyDynamics {
    pub fn new(linear_velocity: Vec3, angular_velocity: Vec3) -> Self {
        Self { linear_velocity, angular_velocity }
    }

    /// Velocity of a point offset by `r` from the centroid.
    #[inline]
    pub fn point_velocity(&self, r: Vec3) -> Vec3 {
        self.linear_velocity + self.angular_velocity.cross(r)
    }
}
