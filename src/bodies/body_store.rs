//! Fixed-capacity storage for live bodies.
//!
//! Bodies are kept as a structure of arrays: one array of poses
//! ([`RigidBody`]) and one of velocities ([`BodyDynamics`]), paired by index.
//! Both arrays are allocated to the full capacity up front and never grow past
//! it; entries are appended by [`BodyStore::spawn`] and never removed or
//! reordered, so an index handed out once stays valid for the life of the
//! store.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use melon_physics::bodies::{BodyStore, Pose};
//!
//! let mut store = BodyStore::with_capacity(2);
//! assert_eq!(store.spawn(0, Pose::at(Vec3::Z)), Ok(0));
//! assert_eq!(store.spawn(1, Pose::at(Vec3::Z * 2.0)), Ok(1));
//! assert!(store.spawn(0, Pose::at(Vec3::ZERO)).is_err());
//! assert_eq!(store.len(), 2);
//! ```
use glam::Vec3;
use log::{debug, error};
use crate::bodies::{BodyDynamics, Pose, RigidBody};
use crate::catalog::BodyTypeId;
use crate::utils::PhysicsError;

#[derive(Debug, Clone)]
pub struct BodyStore {
    bodies: Vec<RigidBody>,
    dynamics: Vec<BodyDynamics>,
    capacity: usize,
}

impl BodyStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
            dynamics: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a body at rest and returns its index.
    ///
    /// # Errors
    /// Returns [`PhysicsError::CapacityExceeded`] when the store is full; the
    /// existing entries are left untouched.
    pub fn spawn(&mut self, type_id: BodyTypeId, pose: Pose) -> Result<usize, PhysicsError> {
        self.spawn_with_dynamics(type_id, pose, BodyDynamics::default())
    }

    pub fn spawn_with_dynamics(
        &mut self,
        type_id: BodyTypeId,
        pose: Pose,
        dynamics: BodyDynamics,
    ) -> Result<usize, PhysicsError> {
        if self.is_full() {
            error!("Rejected spawn of type {}: capacity {} reached", type_id, self.capacity);
            return Err(PhysicsError::CapacityExceeded { capacity: self.capacity });
        }
        let index = self.bodies.len();
        self.bodies.push(RigidBody::new(type_id, pose));
        self.dynamics.push(dynamics);
        debug_assert_eq!(self.bodies.len(), self.dynamics.len());
        debug!("Spawned body {} of type {} at {}", index, type_id, pose.position);
        Ok(index)
    }

    /// Overwrites the velocities of an existing body. Only valid between steps.
    pub fn set_velocity(&mut self, index: usize, linear: Vec3, angular: Vec3) -> Result<(), PhysicsError> {
        let dynamics = self.dynamics.get_mut(index).ok_or(PhysicsError::InvalidBodyIndex(index))?;
        *dynamics = BodyDynamics::new(linear, angular);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<(&RigidBody, &BodyDynamics)> {
        Some((self.bodies.get(index)?, self.dynamics.get(index)?))
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn dynamics(&self) -> &[BodyDynamics] {
        &self.dynamics
    }

    /// Both arrays at once, for the step driver.
    pub fn arrays_mut(&mut self) -> (&mut [RigidBody], &mut [BodyDynamics]) {
        (&mut self.bodies, &mut self.dynamics)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.bodies.len() >= self.capacity
    }
}
