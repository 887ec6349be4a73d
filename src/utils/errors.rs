// src/utils/errors.rs

use std::fmt;
use std::error::Error;

/// Represents errors that can occur while building or stepping the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A body type was declared with a non-positive (or non-finite) semi-axis.
    InvalidRadius { label: String, radius: f32 },
    /// A body type was declared with a non-positive (or non-finite) density.
    InvalidDensity { label: String, density: f32 },
    /// The catalog contains no body types at all.
    EmptyCatalog,
    /// A spawn or step referenced a type id that the catalog does not contain.
    UnknownBodyType(usize),
    /// A body index past the end of the store.
    InvalidBodyIndex(usize),
    /// Spawning would exceed the fixed body capacity.
    CapacityExceeded { capacity: usize },
    /// The body and dynamics arrays have different lengths.
    MismatchedArrays { bodies: usize, dynamics: usize },
    /// Indicates a non-positive or non-finite time step.
    InvalidTimeStep(f32),
    /// The supplied orientation is not a rotation matrix.
    InvalidOrientation,
    /// The supplied position has a NaN or infinite component.
    InvalidPosition,
    /// A general error for physics constants that fail validation.
    InvalidConfiguration(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PhysicsError::InvalidRadius { label, radius } => {
                write!(f, "Invalid radius {} for body type '{}'", radius, label)
            }
            PhysicsError::InvalidDensity { label, density } => {
                write!(f, "Invalid density {} for body type '{}'", density, label)
            }
            PhysicsError::EmptyCatalog => write!(f, "Body catalog is empty"),
            PhysicsError::UnknownBodyType(id) => write!(f, "Unknown body type id {}", id),
            PhysicsError::InvalidBodyIndex(index) => write!(f, "No body at index {}", index),
            PhysicsError::CapacityExceeded { capacity } => {
                write!(f, "Body capacity of {} exceeded", capacity)
            }
            PhysicsError::MismatchedArrays { bodies, dynamics } => write!(
                f,
                "Body and dynamics arrays out of sync ({} bodies, {} dynamics)",
                bodies, dynamics
            ),
            PhysicsError::InvalidTimeStep(dt) => write!(f, "Invalid time step {}", dt),
            PhysicsError::InvalidOrientation => write!(f, "Orientation is not orthonormal"),
            PhysicsError::InvalidPosition => write!(f, "Position is not finite"),
            PhysicsError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl Error for PhysicsError {}
