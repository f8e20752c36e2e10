use wasm_bindgen::prelude::*;

use crate::core::PlaygroundError;
use crate::domain::settings::{Axis, ShapeKind, WallKind};

use super::perf_stats::PerfStats;
use super::{PlaygroundCore, PointerOutcome, SNAPSHOT_STRIDE};

fn to_js(err: PlaygroundError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("failed to serialize output: {}", err);
        String::from("null")
    })
}

#[wasm_bindgen]
pub struct Playground {
    core: PlaygroundCore,
    render_buffer: Vec<f32>,
}

#[wasm_bindgen]
impl Playground {
    /// Create a playground for a container of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: PlaygroundCore::new(width, height),
            render_buffer: Vec::new(),
        }
    }

    /// Create a playground from a saved settings document
    #[wasm_bindgen(js_name = newWithConfig)]
    pub fn new_with_config(width: f32, height: f32, json: String) -> Result<Playground, JsValue> {
        let config = crate::domain::settings::PlaygroundConfig::from_json(&json).map_err(to_js)?;
        Ok(Self {
            core: PlaygroundCore::with_config(width, height, config),
            render_buffer: Vec::new(),
        })
    }

    pub fn dispose(&mut self) {
        self.core.dispose();
        self.render_buffer = Vec::new();
    }

    #[wasm_bindgen(getter)]
    pub fn disposed(&self) -> bool { self.core.is_disposed() }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.size().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.size().height }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Container resized; walls follow on the next tick
    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    // === SHAPE SETTINGS ===

    pub fn set_shape_type(&mut self, kind: &str) -> Result<(), JsValue> {
        let kind = ShapeKind::from_str(kind)
            .ok_or_else(|| to_js(PlaygroundError::Config(format!("unknown shape type '{}'", kind))))?;
        self.core.set_shape_kind(kind);
        Ok(())
    }

    pub fn set_shape_size(&mut self, size: f32) {
        self.core.set_shape_size(size);
    }

    pub fn set_shape_color(&mut self, hex: &str) -> Result<(), JsValue> {
        self.core.set_shape_color(hex).map_err(to_js)
    }

    pub fn set_restitution(&mut self, restitution: f32) {
        self.core.set_restitution(restitution);
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.core.set_friction(friction);
    }

    /// Density slider, 1..10
    pub fn set_density(&mut self, slider: f32) {
        self.core.set_density_slider(slider);
    }

    // === PHYSICS SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_gravity_x(&mut self, value: f32) {
        self.core.set_gravity_axis(Axis::X, value);
    }

    pub fn set_gravity_y(&mut self, value: f32) {
        self.core.set_gravity_axis(Axis::Y, value);
    }

    pub fn set_zero_gravity(&mut self) {
        self.core.set_zero_gravity();
    }

    pub fn reset_physics(&mut self) {
        self.core.reset_physics();
    }

    pub fn set_air_friction(&mut self, air_friction: f32) {
        self.core.set_air_friction(air_friction);
    }

    /// "square" | "circle" | "triangle" | "custom"
    pub fn set_wall_type(&mut self, kind: &str) -> Result<(), JsValue> {
        let kind = WallKind::from_str(kind)
            .ok_or_else(|| to_js(PlaygroundError::Config(format!("unknown wall type '{}'", kind))))?;
        self.core.set_wall_kind(kind).map_err(to_js)
    }

    pub fn set_background_color(&mut self, hex: &str) -> Result<(), JsValue> {
        self.core.set_background_color(hex).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn background_color(&self) -> String {
        self.core.background().to_string()
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_config_json(json).map_err(to_js)
    }

    // === INPUT ===

    /// Canvas click. Returns true when the click became a boundary point.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.core.pointer_down(x, y) == PointerOutcome::BoundaryPoint
    }

    pub fn spawn_shape(&mut self, x: f32, y: f32) {
        self.core.spawn_shape(x, y);
    }

    pub fn clear_shapes(&mut self) {
        self.core.clear_shapes();
    }

    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> usize { self.core.shape_count() }

    #[wasm_bindgen(getter)]
    pub fn wall_count(&self) -> usize { self.core.wall_count() }

    // === BOUNDARY DRAWING ===

    /// Start drawing when idle, commit when drawing.
    /// Returns the committed point count, 0 when drawing just started.
    pub fn toggle_drawing(&mut self) -> Result<usize, JsValue> {
        match self.core.toggle_drawing() {
            None => Ok(0),
            Some(result) => result.map_err(to_js),
        }
    }

    pub fn clear_boundary(&mut self) {
        self.core.clear_boundary();
    }

    #[wasm_bindgen(getter)]
    pub fn drawing(&self) -> bool { self.core.is_drawing() }

    /// Polyline, closing segment and point markers as JSON
    pub fn get_preview_json(&self) -> String {
        to_json(&self.core.boundary_preview())
    }

    // === TICK ===

    /// Apply queued changes and advance one 1/60 s tick
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn pending_commands(&self) -> usize {
        self.core.pending_commands()
    }

    // === OUTPUT ===

    /// Drain pending toasts as a JSON array of `{level, message}`
    pub fn take_notices_json(&mut self) -> String {
        to_json(&self.core.take_notices())
    }

    pub fn get_snapshot_json(&self) -> String {
        to_json(&self.core.snapshot())
    }

    /// Refresh the flat render buffer. Returns the body count.
    pub fn extract_bodies(&mut self) -> usize {
        self.core.write_snapshot(&mut self.render_buffer)
    }

    /// Pointer to the flat render buffer (valid until the next extract)
    pub fn render_buffer_ptr(&self) -> *const f32 {
        self.render_buffer.as_ptr()
    }

    pub fn render_buffer_len(&self) -> usize {
        self.render_buffer.len()
    }

    /// Copy of the render buffer as a Float32Array
    pub fn render_buffer(&self) -> Vec<f32> {
        self.render_buffer.clone()
    }

    pub fn render_stride(&self) -> usize {
        SNAPSHOT_STRIDE
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}
