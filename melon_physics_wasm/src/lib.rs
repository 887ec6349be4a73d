// melon_physics_wasm/src/lib.rs
// This is the browser-facing wrapper around the fruit simulation.

use glam::{Mat3, Vec3};
use wasm_bindgen::prelude::*;
use melon_physics::bodies::Pose;
use melon_physics::catalog::BodyCatalog;
use melon_physics::simulation::Simulation;
use melon_physics::utils::{PhysicsConstants, PhysicsError};

fn to_js(e: PhysicsError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WasmSimulation {
    sim: Simulation,
    transforms: Vec<[f32; 16]>,
}

#[wasm_bindgen]
impl WasmSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmSimulation, JsValue> {
        let catalog = BodyCatalog::fruit().map_err(to_js)?;
        let sim = Simulation::new(catalog, PhysicsConstants::default()).map_err(to_js)?;
        Ok(Self { sim, transforms: Vec::new() })
    }

    /// Drops a fruit at rest, optionally turned by `yaw` radians about the vertical.
    #[wasm_bindgen]
    pub fn spawn(&mut self, type_id: usize, x: f32, y: f32, z: f32, yaw: f32) -> Result<usize, JsValue> {
        let pose = Pose::new(Vec3::new(x, y, z), Mat3::from_rotation_z(yaw));
        self.sim.spawn(type_id, pose).map_err(|e| {
            web_sys::console::warn_1(&JsValue::from_str(&format!("spawn rejected: {}", e)));
            to_js(e)
        })
    }

    #[wasm_bindgen]
    pub fn advance_frame(&mut self) -> Result<usize, JsValue> {
        self.sim.advance_frame().map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn body_count(&self) -> usize {
        self.sim.store().len()
    }

    #[wasm_bindgen]
    pub fn type_count(&self) -> usize {
        self.sim.catalog().len()
    }

    /// Column-major 4x4 unit-sphere-to-world transforms, 16 floats per body.
    #[wasm_bindgen]
    pub fn instance_transforms(&mut self) -> js_sys::Float32Array {
        self.sim.render_view().write_instance_transforms(&mut self.transforms);
        let flat: Vec<f32> = self.transforms.iter().flatten().copied().collect();
        js_sys::Float32Array::from(flat.as_slice())
    }

    /// RGB triples, one per body, in the same order as the transforms.
    #[wasm_bindgen]
    pub fn instance_colours(&self) -> Vec<f32> {
        self.sim.render_view().instances().flat_map(|instance| instance.colour).collect()
    }

    #[wasm_bindgen]
    pub fn needs_reupload(&self) -> bool {
        self.sim.render_view().needs_reupload
    }

    #[wasm_bindgen]
    pub fn mark_uploaded(&mut self) {
        self.sim.mark_uploaded();
    }

    #[wasm_bindgen]
    pub fn elapsed(&self) -> f64 {
        self.sim.elapsed()
    }
}
