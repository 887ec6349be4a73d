// src/simulation/render_view.rs

use glam::{Mat3, Mat4, Vec3};
use crate::bodies::BodyStore;
use crate::catalog::{BodyCatalog, BodyTypeId};

/// What the renderer needs to draw one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceView {
    pub position: Vec3,
    pub orientation: Mat3,
    pub type_id: BodyTypeId,
    pub radii: Vec3,
    pub colour: [f32; 3],
}

impl InstanceView {
    /// Maps the unit sphere onto this body: `T(position) * R * diag(radii)`.
    pub fn instance_transform(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_mat3(self.orientation * Mat3::from_diagonal(self.radii))
    }
}

/// Read-only view of the live bodies, taken between steps.
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    store: &'a BodyStore,
    catalog: &'a BodyCatalog,
    /// Set when bodies were spawned since the renderer last rebuilt its buffers.
    pub needs_reupload: bool,
}

impl<'a> RenderView<'a> {
    pub(crate) fn new(store: &'a BodyStore, catalog: &'a BodyCatalog, needs_reupload: bool) -> Self {
        Self { store, catalog, needs_reupload }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn instances(&self) -> impl Iterator<Item = InstanceView> + 'a {
        let store: &'a BodyStore = self.store;
        let catalog: &'a BodyCatalog = self.catalog;
        store.bodies().iter().filter_map(move |body| {
            // every stored type id was checked against the catalog at spawn
            let body_type = catalog.get(body.type_id)?;
            Some(InstanceView {
                position: body.position,
                orientation: body.orientation,
                type_id: body.type_id,
                radii: body_type.radii,
                colour: body_type.colour,
            })
        })
    }

    /// Replaces `out` with one column-major 4x4 transform per body, ready to
    /// copy into an instance buffer.
    pub fn write_instance_transforms(&self, out: &mut Vec<[f32; 16]>) {
        out.clear();
        out.extend(self.instances().map(|instance| instance.instance_transform().to_cols_array()));
    }
}
