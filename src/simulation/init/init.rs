use std::collections::VecDeque;

use crate::domain::geometry::ContainerSize;
use crate::domain::settings::{PlaygroundConfig, WallKind};
use crate::systems::bodies::PhysicsWorld;
use crate::systems::boundary::{BoundaryDrawer, CustomBoundary};

use super::notices::{Notice, WELCOME};
use super::perf_stats::PerfStats;
use super::{walls, PlaygroundCore};

pub(super) fn create_playground_core(width: f32, height: f32, config: PlaygroundConfig) -> PlaygroundCore {
    // A config that names a custom wall type without a usable polygon falls back to square.
    let custom_boundary = CustomBoundary::new(config.custom_boundary).ok();
    let mut physics = config.physics;
    if physics.wall_type == WallKind::Custom && custom_boundary.is_none() {
        log::warn!("config asks for custom walls without a boundary, using square");
        physics.wall_type = WallKind::Square;
    }

    let mut core = PlaygroundCore {
        world: Some(PhysicsWorld::new()),
        size: ContainerSize::new(width, height),
        shape: config.shape,
        physics,
        background: config.background,
        custom_boundary,
        drawer: BoundaryDrawer::new(),
        notices: Vec::new(),
        commands: VecDeque::with_capacity(64),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };

    walls::sync_walls(&mut core);
    core.notify(Notice::info(WELCOME));
    log::info!(
        "playground created: {}x{}, {} walls ({})",
        width,
        height,
        core.wall_count(),
        core.physics.wall_type.as_str()
    );
    core
}

pub(super) fn dispose(core: &mut PlaygroundCore) {
    let Some(mut world) = core.world.take() else {
        return;
    };
    world.clear();
    core.commands.clear();
    core.drawer.clear();
    core.notices.clear();
    log::info!("playground disposed after {} frames", core.frame);
}
