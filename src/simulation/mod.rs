//! Playground simulation context
//!
//! `PlaygroundCore` owns the rapier world and all UI-visible state
//! (settings, drawing mode, pending notices). Lifecycle is
//! `new → mutate* → dispose`; after `dispose` every operation is a silent
//! no-op.
//!
//! UI callbacks never touch the rapier world directly. They update the
//! settings records right away and enqueue a `Command` for the world; the
//! queue is drained once per tick in `step` (or by `apply_pending`), so a
//! wall swap always lands between two engine steps.

use std::collections::VecDeque;

use crate::domain::color::Color;
use crate::domain::geometry::{ContainerSize, Point};
use crate::domain::settings::{Axis, PhysicsSettings, PlaygroundConfig, ShapeKind, ShapeSettings, WallKind};
use crate::core::Result;
use crate::systems::bodies::PhysicsWorld;
use crate::systems::boundary::{BoundaryDrawer, BoundaryPreview, CustomBoundary};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "notices/notices.rs"]
mod notices;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "drawing/drawing.rs"]
mod drawing;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "walls/walls.rs"]
mod walls;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use commands::Command;
pub use facade::Playground;
pub use notices::{Notice, NoticeLevel};
pub use perf_stats::PerfStats;
pub use render_extract::{BodySnapshot, SnapshotKind, SNAPSHOT_STRIDE};

use perf_timer::PerfTimer;

/// Result of a pointer-down on the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Appended to the boundary being drawn
    BoundaryPoint,
    /// Queued a new shape
    Spawned,
    /// Simulation disposed
    Ignored,
}

pub struct PlaygroundCore {
    /// `None` once disposed
    world: Option<PhysicsWorld>,
    size: ContainerSize,

    // Settings
    shape: ShapeSettings,
    physics: PhysicsSettings,
    background: Color,
    custom_boundary: Option<CustomBoundary>,

    // UI state
    drawer: BoundaryDrawer,
    notices: Vec<Notice>,

    // World mutation queue
    commands: VecDeque<Command>,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl PlaygroundCore {
    /// Create a simulation for a container of the given size and install
    /// the default square boundary.
    pub fn new(width: f32, height: f32) -> Self {
        init::create_playground_core(width, height, PlaygroundConfig::default())
    }

    pub fn with_config(width: f32, height: f32, config: PlaygroundConfig) -> Self {
        init::create_playground_core(width, height, config)
    }

    /// Tear down the world. Everything after this is a no-op.
    pub fn dispose(&mut self) {
        init::dispose(self);
    }

    pub fn is_disposed(&self) -> bool {
        self.world.is_none()
    }

    pub fn size(&self) -> ContainerSize { self.size }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn resize(&mut self, width: f32, height: f32) {
        settings::resize(self, width, height);
    }

    // === SETTINGS ===

    pub fn shape_settings(&self) -> &ShapeSettings { &self.shape }

    pub fn physics_settings(&self) -> &PhysicsSettings { &self.physics }

    pub fn background(&self) -> Color { self.background }

    pub fn set_shape_settings(&mut self, shape: ShapeSettings) -> Result<()> {
        settings::set_shape_settings(self, shape)
    }

    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        self.shape.kind = kind;
    }

    pub fn set_shape_size(&mut self, size: f32) {
        self.shape.set_size(size);
    }

    pub fn set_shape_color(&mut self, hex: &str) -> Result<()> {
        self.shape.color = Color::parse(hex)?;
        Ok(())
    }

    pub fn set_restitution(&mut self, restitution: f32) {
        self.shape.set_restitution(restitution);
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.shape.set_friction(friction);
    }

    pub fn set_density_slider(&mut self, slider: f32) {
        self.shape.set_density_slider(slider);
    }

    pub fn set_physics_settings(&mut self, physics: PhysicsSettings) -> Result<()> {
        settings::set_physics_settings(self, physics)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// One of the arrow buttons: sets a single axis.
    pub fn set_gravity_axis(&mut self, axis: Axis, value: f32) {
        settings::set_gravity_axis(self, axis, value);
    }

    pub fn set_zero_gravity(&mut self) {
        settings::set_gravity(self, 0.0, 0.0);
    }

    /// Gravity (0, 1), default air friction, square walls.
    pub fn reset_physics(&mut self) {
        settings::reset_physics(self);
    }

    pub fn set_air_friction(&mut self, air_friction: f32) {
        settings::set_air_friction(self, air_friction);
    }

    /// Switch boundary kind. `Custom` needs a committed custom boundary.
    pub fn set_wall_kind(&mut self, kind: WallKind) -> Result<()> {
        settings::set_wall_kind(self, kind)
    }

    /// Render-only; does not rebuild the world.
    pub fn set_background_color(&mut self, hex: &str) -> Result<()> {
        self.background = Color::parse(hex)?;
        Ok(())
    }

    pub fn config(&self) -> PlaygroundConfig {
        settings::config(self)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<()> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        self.config().to_json()
    }

    // === INPUT ===

    /// Canvas click: collects a boundary point while drawing, otherwise
    /// queues a shape with the current settings.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> PointerOutcome {
        if self.is_disposed() {
            return PointerOutcome::Ignored;
        }
        if self.drawer.add_point(Point::new(x, y)) {
            return PointerOutcome::BoundaryPoint;
        }
        rigid::spawn_shape(self, Point::new(x, y));
        PointerOutcome::Spawned
    }

    pub fn spawn_shape(&mut self, x: f32, y: f32) {
        rigid::spawn_shape(self, Point::new(x, y));
    }

    /// Remove every user shape; walls stay.
    pub fn clear_shapes(&mut self) {
        rigid::clear_shapes(self);
    }

    pub fn shape_count(&self) -> usize {
        rigid::shape_count(self)
    }

    pub fn wall_count(&self) -> usize {
        walls::wall_count(self)
    }

    // === BOUNDARY DRAWING ===

    pub fn start_drawing(&mut self) {
        drawing::start(self);
    }

    /// Commit the drawn polygon as the active boundary.
    ///
    /// Fewer than three points leaves the boundary as it was and queues a
    /// warning notice.
    pub fn finish_drawing(&mut self) -> Result<usize> {
        drawing::finish(self)
    }

    /// Start when idle, finish when drawing. `None` when it started.
    pub fn toggle_drawing(&mut self) -> Option<Result<usize>> {
        drawing::toggle(self)
    }

    pub fn clear_boundary(&mut self) {
        drawing::clear(self);
    }

    pub fn is_drawing(&self) -> bool {
        self.drawer.is_drawing()
    }

    pub fn drawing_points(&self) -> &[Point] {
        self.drawer.points()
    }

    pub fn boundary_preview(&self) -> BoundaryPreview {
        self.drawer.preview()
    }

    pub fn custom_boundary(&self) -> Option<&CustomBoundary> {
        self.custom_boundary.as_ref()
    }

    // === TICK ===

    pub fn push_command(&mut self, command: Command) {
        commands::push(self, command);
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    /// Drain the command queue without stepping. Returns commands applied.
    pub fn apply_pending(&mut self) -> usize {
        commands::apply_pending(self)
    }

    /// Apply queued commands, then advance the engine one fixed tick.
    pub fn step(&mut self) {
        step::step(self);
    }

    // === OUTPUT ===

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        render_extract::snapshot(self)
    }

    /// Flat `SNAPSHOT_STRIDE` floats per body, for zero-copy transfer.
    pub fn write_snapshot(&self, out: &mut Vec<f32>) -> usize {
        render_extract::write_flat(self, out)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    fn notify(&mut self, notice: Notice) {
        notices::push(self, notice);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
