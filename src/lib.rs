//! Playground Engine - bouncing shapes with swappable boundaries, in WASM
//!
//! Architecture:
//! - core/        - Errors
//! - domain/      - Geometry, colors, settings records
//! - systems/     - Boundary builders, point collector, rapier world
//! - simulation/  - Orchestration, command queue, JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    init_logging();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("Playground engine {} initialized", version()).into());
}

/// Route `log` records to the browser console (stderr natively).
/// Later calls keep the first logger.
fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    let installed = console_log::init_with_level(log::Level::Info).is_ok();

    #[cfg(not(target_arch = "wasm32"))]
    let installed = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .is_ok();

    if installed {
        log::debug!("logger installed");
    }
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{PlaygroundError, Result};
pub use domain::geometry::{ContainerSize, Point};
pub use domain::settings::{PhysicsSettings, PlaygroundConfig, ShapeKind, ShapeSettings, WallKind};
pub use simulation::{
    BodySnapshot, Command, Notice, NoticeLevel, PerfStats, Playground, PlaygroundCore, PointerOutcome,
    SnapshotKind,
};
pub use systems::boundary::{build_walls, BoundarySpec, CustomBoundary, WallSegment};
