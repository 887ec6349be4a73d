//! The simulation state owned by a host loop.
//!
//! A [`Simulation`] bundles the immutable body catalog, the physics constants
//! and the fixed-capacity body store. The host spawns fruit between frames,
//! calls [`Simulation::advance_frame`] once per rendered frame (which runs the
//! configured number of substeps), and then hands [`Simulation::render_view`]
//! to the renderer.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use melon_physics::bodies::Pose;
//! use melon_physics::catalog::BodyCatalog;
//! use melon_physics::simulation::Simulation;
//! use melon_physics::utils::PhysicsConstants;
//!
//! let mut sim = Simulation::new(BodyCatalog::fruit().unwrap(), PhysicsConstants::default()).unwrap();
//! let apple = sim.spawn(0, Pose::at(Vec3::new(0.0, 0.0, 1.0))).unwrap();
//!
//! for _ in 0..120 {
//!     sim.advance_frame().unwrap();
//! }
//!
//! // Two seconds is plenty of time to land on the floor.
//! let (body, _) = sim.store().get(apple).unwrap();
//! assert!((body.position.z - 0.1).abs() < 1e-3);
//! ```
use glam::Vec3;
use log::{debug, info};
use crate::bodies::{BodyDynamics, BodyStore, Pose};
use crate::catalog::{BodyCatalog, BodyTypeId};
use crate::simulation::{step, RenderView, StepReport};
use crate::utils::{is_rotation, PhysicsConstants, PhysicsError, ORTHONORMAL_TOLERANCE};

#[derive(Debug, Clone)]
pub struct Simulation {
    catalog: BodyCatalog,
    constants: PhysicsConstants,
    store: BodyStore,
    elapsed: f64,
    steps_taken: u64,
    needs_reupload: bool,
}

impl Simulation {
    /// Creates an empty simulation.
    ///
    /// # Errors
    /// Returns an error if `constants` fail validation.
    pub fn new(catalog: BodyCatalog, constants: PhysicsConstants) -> Result<Self, PhysicsError> {
        constants.validate()?;
        info!(
            "Simulation ready: {} body types, capacity {}, {} substeps of {:.6}s",
            catalog.len(), constants.max_bodies, constants.substeps, constants.substep_dt()
        );
        Ok(Self {
            store: BodyStore::with_capacity(constants.max_bodies),
            catalog,
            constants,
            elapsed: 0.0,
            steps_taken: 0,
            needs_reupload: false,
        })
    }

    /// Appends a body at rest.
    ///
    /// # Errors
    /// Returns an error if the type id is unknown, the pose is not finite, the
    /// orientation is not a rotation, or the store is full. A rejected spawn
    /// changes nothing.
    pub fn spawn(&mut self, type_id: BodyTypeId, pose: Pose) -> Result<usize, PhysicsError> {
        self.spawn_with_velocity(type_id, pose, Vec3::ZERO, Vec3::ZERO)
    }

    pub fn spawn_with_velocity(
        &mut self,
        type_id: BodyTypeId,
        pose: Pose,
        linear_velocity: Vec3,
        angular_velocity: Vec3,
    ) -> Result<usize, PhysicsError> {
        self.catalog.lookup(type_id)?;
        if !pose.position.is_finite() {
            return Err(PhysicsError::InvalidPosition);
        }
        if !is_rotation(pose.orientation, ORTHONORMAL_TOLERANCE) {
            return Err(PhysicsError::InvalidOrientation);
        }
        let dynamics = BodyDynamics::new(linear_velocity, angular_velocity);
        let index = self.store.spawn_with_dynamics(type_id, pose, dynamics)?;
        self.needs_reupload = true;
        Ok(index)
    }

    /// Overwrites a body's velocities between steps.
    pub fn set_velocity(&mut self, index: usize, linear: Vec3, angular: Vec3) -> Result<(), PhysicsError> {
        self.store.set_velocity(index, linear, angular)
    }

    /// Runs a single substep of length `dt`.
    pub fn step(&mut self, dt: f32) -> Result<StepReport, PhysicsError> {
        let (bodies, dynamics) = self.store.arrays_mut();
        let report = step(bodies, dynamics, &self.catalog, &self.constants, dt)?;
        self.elapsed += dt as f64;
        self.steps_taken += 1;
        Ok(report)
    }

    /// Runs one rendered frame's worth of substeps.
    ///
    /// # Returns
    /// The number of substeps taken.
    pub fn advance_frame(&mut self) -> Result<usize, PhysicsError> {
        let dt = self.constants.substep_dt();
        let mut impulses = 0;
        let mut corrections = 0;
        for _ in 0..self.constants.substeps {
            let report = self.step(dt)?;
            impulses += report.impulses;
            corrections += report.corrections;
        }
        debug!(
            "Frame at t={:.4}s: {} bodies, {} impulses, {} corrections",
            self.elapsed, self.store.len(), impulses, corrections
        );
        Ok(self.constants.substeps)
    }

    /// Read-only snapshot for the renderer.
    pub fn render_view(&self) -> RenderView<'_> {
        RenderView::new(&self.store, &self.catalog, self.needs_reupload)
    }

    /// Clears the re-upload flag once the renderer has rebuilt its buffers.
    pub fn mark_uploaded(&mut self) {
        self.needs_reupload = false;
    }

    pub fn store(&self) -> &BodyStore {
        &self.store
    }

    pub fn catalog(&self) -> &BodyCatalog {
        &self.catalog
    }

    pub fn constants(&self) -> &PhysicsConstants {
        &self.constants
    }

    /// Simulated time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }
}
