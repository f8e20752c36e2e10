use crate::core::{PlaygroundError, Result};
use crate::domain::settings::WallKind;

use super::notices::{self, Notice, BOUNDARY_CLEARED, NEED_MORE_POINTS};
use super::{Command, PlaygroundCore};

pub(super) fn start(core: &mut PlaygroundCore) {
    if core.is_disposed() {
        return;
    }
    core.drawer.start();
}

/// Commit the drawn polygon. Only meaningful while drawing; an idle
/// finish leaves the active boundary alone and raises no notice.
pub(super) fn finish(core: &mut PlaygroundCore) -> Result<usize> {
    if !core.drawer.is_drawing() {
        return Err(PlaygroundError::NotDrawing);
    }
    match core.drawer.finish() {
        Ok(boundary) => {
            let points = boundary.len();
            core.custom_boundary = Some(boundary);
            core.physics.wall_type = WallKind::Custom;
            core.push_command(Command::SyncWalls);
            core.notify(notices::boundary_created(points));
            log::info!("custom boundary committed with {} points", points);
            Ok(points)
        }
        Err(err) => {
            core.notify(Notice::warning(NEED_MORE_POINTS));
            Err(err)
        }
    }
}

pub(super) fn toggle(core: &mut PlaygroundCore) -> Option<Result<usize>> {
    if core.drawer.is_drawing() {
        Some(finish(core))
    } else {
        start(core);
        None
    }
}

/// Drop the drawn points and the committed polygon. If the custom
/// boundary was active, fall back to the square one.
pub(super) fn clear(core: &mut PlaygroundCore) {
    core.drawer.clear();
    core.custom_boundary = None;
    if core.physics.wall_type == WallKind::Custom {
        core.physics.wall_type = WallKind::Square;
        core.push_command(Command::SyncWalls);
        log::info!("custom boundary cleared, reverting to square walls");
    }
    core.notify(Notice::info(BOUNDARY_CLEARED));
}
