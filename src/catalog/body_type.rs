// src/catalog/body_type.rs

use std::f64::consts::PI;
use glam::{Mat3, Vec3};
use crate::utils::PhysicsError;

/// Index of a [`BodyType`] inside a [`crate::catalog::BodyCatalog`].
pub type BodyTypeId = usize;

/// Declared properties of a body type, before the mass properties are derived.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyTypeDesc {
    pub label: String,
    /// Display colour handed to the renderer; unused by the physics.
    pub colour: [f32; 3],
    /// Ellipsoid semi-axes along the local x, y and z axes.
    pub radii: Vec3,
    pub density: f32,
}

impl BodyTypeDesc {
    pub fn new(label: &str, colour: [f32; 3], radii: Vec3, density: f32) -> Self {
        Self {
            label: label.to_string(),
            colour,
            radii,
            density,
        }
    }
}

/// A solid ellipsoid body type with its derived mass properties.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyType {
    pub label: String,
    pub colour: [f32; 3],
    pub radii: Vec3,
    pub density: f32,
    pub volume: f32,
    /// Zero means infinitely heavy.
    pub inverse_mass: f32,
    /// Diagonal inverse inertia tensor in body-local axes.
    pub inverse_inertia: Mat3,
}

impl BodyType {

    /// Derives volume, inverse mass and inverse inertia for a solid ellipsoid.
    ///
    /// # Arguments
    /// * `desc` - Label, colour, semi-axes and density of the body type.
    ///
    /// # Returns
    /// The derived `BodyType`.
    ///
    /// # Errors
    /// Returns an error if any radius or the density is not strictly positive
    /// and finite.
    ///
    /// # Example
    /// ```
    /// use glam::Vec3;
    /// use melon_physics::catalog::{BodyType, BodyTypeDesc};
    ///
    /// let apple = BodyType::derive(&BodyTypeDesc::new("apple", [1.0, 0.0, 0.0], Vec3::splat(0.1), 0.11)).unwrap();
    /// assert!((apple.mass() * apple.inverse_mass - 1.0).abs() < 1e-5);
    ///
    /// let flat = BodyTypeDesc::new("flat", [0.0; 3], Vec3::new(0.1, 0.0, 0.1), 0.11);
    /// assert!(BodyType::derive(&flat).is_err());
    /// ```
    pub fn derive(desc: &BodyTypeDesc) -> Result<Self, PhysicsError> {
        for radius in desc.radii.to_array() {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(PhysicsError::InvalidRadius { label: desc.label.clone(), radius });
            }
        }
        if !desc.density.is_finite() || desc.density <= 0.0 {
            return Err(PhysicsError::InvalidDensity { label: desc.label.clone(), density: desc.density });
        }

        let (r1, r2, r3) = (desc.radii.x as f64, desc.radii.y as f64, desc.radii.z as f64);
        let volume = 4.0 / 3.0 * PI * r1 * r2 * r3;
        let mass = desc.density as f64 * volume;

        // Solid ellipsoid: I_xx = m (r2^2 + r3^2) / 5, and cyclically.
        let inverse_moments = Vec3::new(
            (5.0 / (mass * (r2 * r2 + r3 * r3))) as f32,
            (5.0 / (mass * (r1 * r1 + r3 * r3))) as f32,
            (5.0 / (mass * (r1 * r1 + r2 * r2))) as f32,
        );

        Ok(Self {
            label: desc.label.clone(),
            colour: desc.colour,
            radii: desc.radii,
            density: desc.density,
            volume: volume as f32,
            inverse_mass: (1.0 / mass) as f32,
            inverse_inertia: Mat3::from_diagonal(inverse_moments),
        })
    }

    pub fn mass(&self) -> f32 {
        if self.inverse_mass == 0.0 {
            f32::INFINITY
        } else {
            1.0 / self.inverse_mass
        }
    }

    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }
}
