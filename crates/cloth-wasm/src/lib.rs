use cloth_core::{Plane, Scene, Sphere, World, WorldCommand};
use glam::Vec3;
use wasm_bindgen::prelude::*;

/// GPU-compatible cloth vertex: 16 bytes, matches WGSL `vec4<f32>` storage
/// (xyz position + padding).
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuVertex {
    position: [f32; 3], // 12 bytes
    _pad: f32,          //  4 bytes
}

fn js_err(err: cloth_core::ClothError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct ClothWorld {
    scene: Scene,
    gpu_buffer: Vec<GpuVertex>,
}

#[wasm_bindgen]
impl ClothWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, rows: usize, cols: usize) -> Result<ClothWorld, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let scene = Scene::new(width, height, rows, cols, World::new()).map_err(js_err)?;
        web_sys::console::log_1(
            &format!("WASM ClothWorld created: {}x{} particles", rows, cols).into(),
        );

        let gpu_buffer = vec![
            GpuVertex {
                position: [0.0; 3],
                _pad: 0.0,
            };
            rows * cols
        ];

        let mut world = ClothWorld { scene, gpu_buffer };
        world.write_gpu_output();
        Ok(world)
    }

    /// Step the simulation and return the elapsed time in milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> f32 {
        let start = js_sys::Date::now();
        self.scene.step(dt);
        self.write_gpu_output();
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    #[wasm_bindgen]
    pub fn set_config(&mut self, gx: f32, gy: f32, gz: f32, damping: f32, iterations: u32) {
        let config = &mut self.scene.cloth_mut().config;
        config.gravity = Vec3::new(gx, gy, gz);
        config.damping = damping;
        config.iterations = iterations;
    }

    // ---------- world ----------

    /// Add the plane `a*x + b*y + c*z + d = 0`; returns its index.
    #[wasm_bindgen]
    pub fn add_plane(&mut self, a: f32, b: f32, c: f32, d: f32) -> Result<usize, JsValue> {
        let plane = Plane::new(Vec3::new(a, b, c), d).map_err(js_err)?;
        self.scene.apply(WorldCommand::AddPlane(plane)).map_err(js_err)?;
        Ok(self.scene.world().plane_count() - 1)
    }

    /// Add the plane through three counter-clockwise points, packed as nine
    /// floats; returns its index.
    #[wasm_bindgen]
    pub fn add_plane_from_triangle(&mut self, points: &[f32]) -> Result<usize, JsValue> {
        let p: [f32; 9] = points
            .try_into()
            .map_err(|_| JsValue::from_str("expected 9 floats (three points)"))?;
        let plane = Plane::from_triangle(
            Vec3::new(p[0], p[1], p[2]),
            Vec3::new(p[3], p[4], p[5]),
            Vec3::new(p[6], p[7], p[8]),
        )
        .map_err(js_err)?;
        self.scene.apply(WorldCommand::AddPlane(plane)).map_err(js_err)?;
        Ok(self.scene.world().plane_count() - 1)
    }

    #[wasm_bindgen]
    pub fn add_sphere(&mut self, x: f32, y: f32, z: f32, r: f32) -> Result<usize, JsValue> {
        let sphere = Sphere::new(Vec3::new(x, y, z), r);
        self.scene.apply(WorldCommand::AddSphere(sphere)).map_err(js_err)?;
        Ok(self.scene.world().sphere_count() - 1)
    }

    #[wasm_bindgen]
    pub fn set_sphere(&mut self, index: usize, x: f32, y: f32, z: f32, r: f32) -> Result<(), JsValue> {
        let sphere = Sphere::new(Vec3::new(x, y, z), r);
        self.scene
            .apply(WorldCommand::SetSphere(index, sphere))
            .map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn remove_plane(&mut self, index: usize) -> Result<(), JsValue> {
        self.scene.apply(WorldCommand::RemovePlane(index)).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn remove_sphere(&mut self, index: usize) -> Result<(), JsValue> {
        self.scene.apply(WorldCommand::RemoveSphere(index)).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn clear_world(&mut self) {
        self.scene.world_mut().clear();
    }

    #[wasm_bindgen]
    pub fn plane_count(&self) -> usize {
        self.scene.world().plane_count()
    }

    #[wasm_bindgen]
    pub fn sphere_count(&self) -> usize {
        self.scene.world().sphere_count()
    }

    // ---------- edit window ----------

    #[wasm_bindgen]
    pub fn begin_edit(&mut self) {
        self.scene.cloth_mut().begin_edit();
    }

    #[wasm_bindgen]
    pub fn set_position(&mut self, i: usize, j: usize, x: f32, y: f32, z: f32) {
        self.scene.cloth_mut().set(i, j, Vec3::new(x, y, z));
    }

    #[wasm_bindgen]
    pub fn end_edit(&mut self, reset_velocity: bool) {
        self.scene.cloth_mut().end_edit(reset_velocity);
        self.write_gpu_output();
    }

    /// Put the cloth back to its flat rest layout, at rest.
    #[wasm_bindgen]
    pub fn reset_sheet(&mut self) {
        {
            let mut edit = self.scene.cloth_mut().edit();
            edit.reset_to_sheet();
            edit.reset_velocity_on_exit();
        }
        self.write_gpu_output();
        web_sys::console::log_1(&"WASM ClothWorld reset to flat sheet".into());
    }

    #[wasm_bindgen]
    pub fn reset_velocity(&mut self) {
        self.scene.cloth_mut().reset_velocity();
    }

    // ---------- accessors ----------

    #[wasm_bindgen]
    pub fn rows(&self) -> usize {
        self.scene.cloth().rows()
    }

    #[wasm_bindgen]
    pub fn cols(&self) -> usize {
        self.scene.cloth().cols()
    }

    #[wasm_bindgen]
    pub fn width(&self) -> f32 {
        self.scene.cloth().width()
    }

    #[wasm_bindgen]
    pub fn height(&self) -> f32 {
        self.scene.cloth().height()
    }

    #[wasm_bindgen]
    pub fn get_vertex_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_vertex_buffer_byte_length(&self) -> usize {
        self.gpu_buffer.len() * std::mem::size_of::<GpuVertex>()
    }

    #[wasm_bindgen]
    pub fn get_index_buffer_ptr(&self) -> *const u32 {
        self.scene.cloth().surface().indices().as_ptr()
    }

    #[wasm_bindgen]
    pub fn get_index_count(&self) -> usize {
        self.scene.cloth().surface().indices().len()
    }
}

impl ClothWorld {
    fn write_gpu_output(&mut self) {
        let vertices = self.scene.cloth().surface().vertices();
        for (out, v) in self.gpu_buffer.iter_mut().zip(vertices) {
            *out = GpuVertex {
                position: v.position,
                _pad: 0.0,
            };
        }
    }
}
