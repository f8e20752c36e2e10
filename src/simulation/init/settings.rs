use crate::core::{PlaygroundError, Result};
use crate::domain::geometry::ContainerSize;
use crate::domain::settings::{Axis, PhysicsSettings, PlaygroundConfig, ShapeSettings, WallKind};
use crate::systems::boundary::{CustomBoundary, MIN_CUSTOM_POINTS};

use super::{Command, PlaygroundCore};

pub(super) fn resize(core: &mut PlaygroundCore, width: f32, height: f32) {
    let size = ContainerSize::new(width, height);
    if size == core.size {
        return;
    }
    core.size = size;
    core.push_command(Command::SyncWalls);
}

pub(super) fn set_shape_settings(core: &mut PlaygroundCore, shape: ShapeSettings) -> Result<()> {
    shape.validate()?;
    core.shape = shape;
    Ok(())
}

/// Wholesale replacement, like the settings panel does it. Any change
/// rebuilds the walls.
pub(super) fn set_physics_settings(core: &mut PlaygroundCore, physics: PhysicsSettings) -> Result<()> {
    physics.validate()?;
    if physics.wall_type == WallKind::Custom && core.custom_boundary.is_none() {
        return Err(PlaygroundError::NotEnoughPoints { got: 0, need: MIN_CUSTOM_POINTS });
    }
    apply_physics(core, physics);
    Ok(())
}

pub(super) fn set_gravity(core: &mut PlaygroundCore, x: f32, y: f32) {
    let mut physics = core.physics;
    physics.set_gravity_axis(Axis::X, x);
    physics.set_gravity_axis(Axis::Y, y);
    apply_physics(core, physics);
}

pub(super) fn set_gravity_axis(core: &mut PlaygroundCore, axis: Axis, value: f32) {
    let mut physics = core.physics;
    physics.set_gravity_axis(axis, value);
    apply_physics(core, physics);
}

pub(super) fn set_air_friction(core: &mut PlaygroundCore, air_friction: f32) {
    let mut physics = core.physics;
    physics.set_air_friction(air_friction);
    apply_physics(core, physics);
}

pub(super) fn reset_physics(core: &mut PlaygroundCore) {
    apply_physics(core, PhysicsSettings::default());
}

pub(super) fn set_wall_kind(core: &mut PlaygroundCore, kind: WallKind) -> Result<()> {
    let mut physics = core.physics;
    physics.wall_type = kind;
    set_physics_settings(core, physics)
}

fn apply_physics(core: &mut PlaygroundCore, physics: PhysicsSettings) {
    let previous = core.physics;
    if physics == previous {
        return;
    }
    core.physics = physics;
    if physics.air_friction != previous.air_friction {
        core.push_command(Command::SetAirFriction(physics.air_friction));
    }
    core.push_command(Command::SyncWalls);
}

pub(super) fn config(core: &PlaygroundCore) -> PlaygroundConfig {
    PlaygroundConfig {
        shape: core.shape,
        physics: core.physics,
        background: core.background,
        custom_boundary: core
            .custom_boundary
            .as_ref()
            .map(|b| b.points().to_vec())
            .unwrap_or_default(),
    }
}

/// Validate and apply a whole settings document. Nothing changes on error.
pub(super) fn load_config_json(core: &mut PlaygroundCore, json: &str) -> Result<()> {
    let config = PlaygroundConfig::from_json(json)?;

    let custom_boundary = if config.custom_boundary.is_empty() {
        None
    } else {
        Some(CustomBoundary::new(config.custom_boundary)?)
    };
    if config.physics.wall_type == WallKind::Custom && custom_boundary.is_none() {
        return Err(PlaygroundError::NotEnoughPoints { got: 0, need: MIN_CUSTOM_POINTS });
    }

    core.shape = config.shape;
    core.background = config.background;
    let boundary_changed = core.custom_boundary != custom_boundary;
    core.custom_boundary = custom_boundary;
    if boundary_changed {
        core.push_command(Command::SyncWalls);
    }
    apply_physics(core, config.physics);
    log::info!("config loaded ({} walls)", config.physics.wall_type.as_str());
    Ok(())
}
