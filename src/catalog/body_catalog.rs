// src/catalog/body_catalog.rs

use glam::Vec3;
use log::info;
use crate::catalog::{BodyType, BodyTypeDesc, BodyTypeId};
use crate::utils::{PhysicsError, FRUIT_DENSITY};

/// Immutable table of body types, derived once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyCatalog {
    types: Vec<BodyType>,
}

impl BodyCatalog {
    /// Derives every entry of `descs`, failing on the first invalid one.
    pub fn new(descs: Vec<BodyTypeDesc>) -> Result<Self, PhysicsError> {
        if descs.is_empty() {
            return Err(PhysicsError::EmptyCatalog);
        }
        let types = descs
            .iter()
            .map(BodyType::derive)
            .collect::<Result<Vec<_>, _>>()?;

        for body_type in &types {
            info!(
                "Derived body type '{}': volume={:.6}, inverse_mass={:.3}",
                body_type.label, body_type.volume, body_type.inverse_mass
            );
        }
        Ok(Self { types })
    }

    /// The fixed fruit table: a round apple and an elongated melon.
    ///
    /// # Example
    /// ```
    /// use melon_physics::catalog::BodyCatalog;
    ///
    /// let catalog = BodyCatalog::fruit().unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.find("melon"), Some(1));
    /// ```
    pub fn fruit() -> Result<Self, PhysicsError> {
        Self::new(vec![
            BodyTypeDesc::new("apple", [1.0, 0.0, 0.0], Vec3::new(0.1, 0.1, 0.1), FRUIT_DENSITY),
            BodyTypeDesc::new("melon", [0.0, 1.0, 0.0], Vec3::new(0.14, 0.2, 0.14), FRUIT_DENSITY),
        ])
    }

    pub fn get(&self, id: BodyTypeId) -> Option<&BodyType> {
        self.types.get(id)
    }

    /// Like [`BodyCatalog::get`], but reports a missing id as an error.
    pub fn lookup(&self, id: BodyTypeId) -> Result<&BodyType, PhysicsError> {
        self.types.get(id).ok_or(PhysicsError::UnknownBodyType(id))
    }

    pub fn find(&self, label: &str) -> Option<BodyTypeId> {
        self.types.iter().position(|t| t.label == label)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyType> {
        self.types.iter()
    }
}

/// Derives the default fruit catalog. Call once at startup.
pub fn derive_catalog() -> Result<BodyCatalog, PhysicsError> {
    BodyCatalog::fruit()
}
