use crate::domain::geometry::Point;
use crate::systems::bodies::ShapeBody;

use super::notices::{Notice, SHAPES_CLEARED};
use super::{Command, PlaygroundCore};

pub(super) fn spawn_shape(core: &mut PlaygroundCore, at: Point) {
    let shape = ShapeBody::from_settings(&core.shape, at);
    core.push_command(Command::Spawn(shape));
}

pub(super) fn clear_shapes(core: &mut PlaygroundCore) {
    if core.is_disposed() {
        return;
    }
    core.push_command(Command::ClearShapes);
    core.notify(Notice::info(SHAPES_CLEARED));
}

pub(super) fn shape_count(core: &PlaygroundCore) -> usize {
    core.world.as_ref().map_or(0, |world| world.dynamic_count())
}
