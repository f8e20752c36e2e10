use crate::systems::boundary::{build_walls, BoundarySpec};

use super::{PerfTimer, PlaygroundCore};

/// Replace every static body with a fresh batch for the current boundary
/// and container size. Dynamic bodies are left alone.
pub(super) fn sync_walls(core: &mut PlaygroundCore) {
    let timer = PerfTimer::new(core.perf_enabled);
    let Some(world) = core.world.as_mut() else {
        return;
    };

    let spec = match BoundarySpec::from_kind(core.physics.wall_type, core.custom_boundary.as_ref()) {
        Ok(spec) => spec,
        Err(err) => {
            // Unreachable through the public API; keep the old walls rather than none.
            log::warn!("wall sync skipped: {}", err);
            return;
        }
    };

    let segments = build_walls(&spec, core.size);
    if segments.is_empty() {
        log::debug!("wall sync skipped: container not measured yet");
        return;
    }
    let installed = world.replace_walls(&segments);
    log::info!(
        "walls rebuilt: {} x {} ({}x{})",
        spec.kind().as_str(),
        installed,
        core.size.width,
        core.size.height
    );

    if let Some(elapsed) = timer.elapsed_ms() {
        core.perf_stats.walls_ms += elapsed;
        core.perf_stats.wall_rebuilds += 1;
    }
}

pub(super) fn wall_count(core: &PlaygroundCore) -> usize {
    core.world.as_ref().map_or(0, |world| world.wall_count())
}
