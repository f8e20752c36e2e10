use wasm_bindgen::prelude::*;

/// Per-step timings and counts. All zero while metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) commands_ms: f64,
    pub(super) walls_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) commands_applied: u32,
    pub(super) wall_rebuilds: u32,
    pub(super) dynamic_bodies: u32,
    pub(super) static_bodies: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn commands_ms(&self) -> f64 { self.commands_ms }
    #[wasm_bindgen(getter)]
    pub fn walls_ms(&self) -> f64 { self.walls_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn commands_applied(&self) -> u32 { self.commands_applied }
    #[wasm_bindgen(getter)]
    pub fn wall_rebuilds(&self) -> u32 { self.wall_rebuilds }
    #[wasm_bindgen(getter)]
    pub fn dynamic_bodies(&self) -> u32 { self.dynamic_bodies }
    #[wasm_bindgen(getter)]
    pub fn static_bodies(&self) -> u32 { self.static_bodies }
}
