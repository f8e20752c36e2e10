use crate::systems::bodies::ShapeBody;

use super::{walls, PerfTimer, PlaygroundCore};

/// A pending mutation of the rapier world.
///
/// Settings are already updated by the time a command is queued; the
/// command only carries what the world has to do about it.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Insert a dynamic shape (settings captured at click time)
    Spawn(ShapeBody),
    /// Remove every dynamic body
    ClearShapes,
    /// Rebuild the static walls from the current boundary and size
    SyncWalls,
    /// Update damping on existing dynamic bodies
    SetAirFriction(f32),
}

pub(super) fn push(core: &mut PlaygroundCore, command: Command) {
    if core.is_disposed() {
        return;
    }
    core.commands.push_back(command);
}

/// Drain the queue in FIFO order.
///
/// Wall rebuilds only touch static bodies, so any number of `SyncWalls`
/// in one batch collapse into a single rebuild after the rest. Perf stats
/// start over with every drain.
pub(super) fn apply_pending(core: &mut PlaygroundCore) -> usize {
    if core.perf_enabled {
        core.perf_stats.reset();
    }
    let timer = PerfTimer::new(core.perf_enabled);
    let mut applied = 0;
    let mut walls_dirty = false;

    while let Some(command) = core.commands.pop_front() {
        applied += 1;
        let Some(world) = core.world.as_mut() else {
            continue;
        };
        match command {
            Command::Spawn(shape) => {
                let handle = world.insert_shape(&shape, core.physics.air_friction);
                log::debug!(
                    "spawned {:?} at ({:.0}, {:.0}) as {:?}",
                    shape.kind,
                    shape.position.x,
                    shape.position.y,
                    handle
                );
            }
            Command::ClearShapes => {
                let removed = world.clear_shapes();
                log::info!("cleared {} shapes", removed);
            }
            Command::SyncWalls => walls_dirty = true,
            Command::SetAirFriction(air_friction) => world.set_air_friction(air_friction),
        }
    }

    if walls_dirty {
        walls::sync_walls(core);
    }

    if let Some(elapsed) = timer.elapsed_ms() {
        core.perf_stats.commands_ms = elapsed;
        core.perf_stats.commands_applied = applied as u32;
    }
    applied
}
