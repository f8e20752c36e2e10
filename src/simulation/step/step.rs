use super::{commands, PerfTimer, PlaygroundCore};

pub(super) fn step(core: &mut PlaygroundCore) {
    if core.is_disposed() {
        return;
    }

    let perf_on = core.perf_enabled;
    let step_timer = PerfTimer::new(perf_on);

    // UI commands land between two engine steps, never during one. This
    // also resets the perf stats for the tick.
    commands::apply_pending(core);

    let physics_timer = PerfTimer::new(perf_on);
    let gravity = core.physics.gravity;
    if let Some(world) = core.world.as_mut() {
        world.step(gravity);
    }
    core.frame += 1;

    if let (Some(physics_ms), Some(step_ms)) = (physics_timer.elapsed_ms(), step_timer.elapsed_ms()) {
        core.perf_stats.physics_ms = physics_ms;
        core.perf_stats.step_ms = step_ms;
        core.perf_stats.dynamic_bodies = core.shape_count() as u32;
        core.perf_stats.static_bodies = core.wall_count() as u32;
    }
}
