use super::*;
use crate::core::PlaygroundError;

fn playground() -> PlaygroundCore {
    let mut core = PlaygroundCore::new(800.0, 600.0);
    core.take_notices();
    core
}

fn draw(core: &mut PlaygroundCore, points: &[(f32, f32)]) -> Result<usize> {
    core.start_drawing();
    for &(x, y) in points {
        assert_eq!(core.pointer_down(x, y), PointerOutcome::BoundaryPoint);
    }
    core.finish_drawing()
}

fn messages(core: &mut PlaygroundCore) -> Vec<String> {
    core.take_notices().into_iter().map(|n| n.message).collect()
}

const RECT: [(f32, f32); 4] = [(100.0, 100.0), (700.0, 100.0), (700.0, 500.0), (100.0, 500.0)];

#[test]
fn new_playground_installs_square_walls_and_welcomes() {
    let mut core = PlaygroundCore::new(800.0, 600.0);
    assert_eq!(core.wall_count(), 4);
    assert_eq!(core.shape_count(), 0);
    assert_eq!(core.physics_settings().wall_type, WallKind::Square);
    assert_eq!(messages(&mut core), vec!["Click anywhere to add shapes!".to_string()]);
}

#[test]
fn unmeasured_container_gets_walls_after_resize() {
    let mut core = PlaygroundCore::new(0.0, 0.0);
    assert_eq!(core.wall_count(), 0);

    core.resize(800.0, 600.0);
    assert_eq!(core.wall_count(), 0);
    core.step();
    assert_eq!(core.wall_count(), 4);
}

#[test]
fn pointer_down_spawns_when_idle() {
    let mut core = playground();
    assert_eq!(core.pointer_down(400.0, 300.0), PointerOutcome::Spawned);
    assert_eq!(core.pending_commands(), 1);
    assert_eq!(core.shape_count(), 0);

    core.step();
    assert_eq!(core.shape_count(), 1);
    assert_eq!(core.pending_commands(), 0);
}

#[test]
fn finishing_rectangle_installs_four_custom_walls() {
    let mut core = playground();
    assert_eq!(draw(&mut core, &RECT), Ok(4));
    assert!(!core.is_drawing());
    assert_eq!(core.physics_settings().wall_type, WallKind::Custom);
    assert_eq!(messages(&mut core), vec!["Custom boundary created with 4 points".to_string()]);

    core.apply_pending();
    assert_eq!(core.wall_count(), 4);

    let mut lengths: Vec<f32> = core
        .snapshot()
        .iter()
        .filter(|b| b.is_static)
        .map(|b| (b.half_width * 2.0).round())
        .collect();
    lengths.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(lengths, vec![400.0, 400.0, 600.0, 600.0]);
}

#[test]
fn finishing_with_two_points_keeps_previous_boundary() {
    let mut core = playground();
    core.set_wall_kind(WallKind::Circle).unwrap();
    core.apply_pending();
    core.take_notices();

    let result = draw(&mut core, &[(100.0, 100.0), (200.0, 200.0)]);
    assert_eq!(result, Err(PlaygroundError::NotEnoughPoints { got: 2, need: 3 }));
    assert_eq!(core.physics_settings().wall_type, WallKind::Circle);
    assert!(core.custom_boundary().is_none());
    assert_eq!(core.pending_commands(), 0);

    let notices = core.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Warning);
    assert_eq!(notices[0].message, "Need at least 3 points to create a boundary");
}

#[test]
fn toggle_starts_then_commits() {
    let mut core = playground();
    assert_eq!(core.toggle_drawing(), None);
    assert!(core.is_drawing());
    for &(x, y) in &RECT[..3] {
        core.pointer_down(x, y);
    }
    assert_eq!(core.toggle_drawing(), Some(Ok(3)));
    assert!(!core.is_drawing());
}

#[test]
fn finish_while_idle_keeps_the_selected_walls() {
    let mut core = playground();
    draw(&mut core, &RECT).unwrap();
    core.set_wall_kind(WallKind::Circle).unwrap();
    core.apply_pending();
    core.take_notices();

    assert!(!core.is_drawing());
    assert_eq!(core.finish_drawing(), Err(PlaygroundError::NotDrawing));
    assert_eq!(core.physics_settings().wall_type, WallKind::Circle);
    assert_eq!(core.pending_commands(), 0);
    assert!(core.take_notices().is_empty());
    assert!(core.drawing_points().is_empty());

    // The committed polygon is still there to switch back to.
    assert_eq!(core.custom_boundary().map(|b| b.len()), Some(4));
}

#[test]
fn clearing_custom_boundary_reverts_to_square() {
    let mut core = playground();
    draw(&mut core, &RECT).unwrap();
    core.step();
    core.take_notices();

    core.clear_boundary();
    assert_eq!(core.physics_settings().wall_type, WallKind::Square);
    assert!(core.custom_boundary().is_none());
    assert!(core.drawing_points().is_empty());
    assert_eq!(messages(&mut core), vec!["Boundary cleared".to_string()]);

    core.step();
    assert_eq!(core.wall_count(), 4);
    assert!(core.config().custom_boundary.is_empty());
}

#[test]
fn clearing_while_drawing_discards_points() {
    let mut core = playground();
    core.start_drawing();
    core.pointer_down(10.0, 10.0);
    core.pointer_down(20.0, 10.0);

    core.clear_boundary();
    assert!(!core.is_drawing());
    assert!(core.drawing_points().is_empty());
    assert_eq!(core.boundary_preview(), BoundaryPreview::default());
    assert_eq!(core.physics_settings().wall_type, WallKind::Square);
    assert_eq!(core.pending_commands(), 0);
}

#[test]
fn wall_swap_leaves_dynamic_bodies_untouched() {
    let mut core = playground();
    core.spawn_shape(300.0, 200.0);
    core.set_shape_kind(ShapeKind::Hexagon);
    core.spawn_shape(500.0, 250.0);
    for _ in 0..20 {
        core.step();
    }

    let before: Vec<BodySnapshot> = core.snapshot().into_iter().filter(|b| !b.is_static).collect();
    assert_eq!(before.len(), 2);

    for kind in [WallKind::Circle, WallKind::Triangle, WallKind::Square] {
        core.set_wall_kind(kind).unwrap();
        core.apply_pending();
        let after: Vec<BodySnapshot> = core.snapshot().into_iter().filter(|b| !b.is_static).collect();
        assert_eq!(after, before);
    }
}

#[test]
fn wall_counts_follow_kind() {
    let mut core = playground();
    for (kind, expected) in [(WallKind::Circle, 30), (WallKind::Triangle, 3), (WallKind::Square, 4)] {
        core.set_wall_kind(kind).unwrap();
        core.apply_pending();
        assert_eq!(core.wall_count(), expected, "{:?}", kind);
    }
}

#[test]
fn custom_kind_needs_a_committed_boundary() {
    let mut core = playground();
    assert!(core.set_wall_kind(WallKind::Custom).is_err());
    assert_eq!(core.physics_settings().wall_type, WallKind::Square);

    draw(&mut core, &RECT).unwrap();
    core.set_wall_kind(WallKind::Square).unwrap();
    core.set_wall_kind(WallKind::Custom).unwrap();
    core.apply_pending();
    assert_eq!(core.wall_count(), 4);
}

#[test]
fn queue_applies_in_order_and_coalesces_wall_syncs() {
    let mut core = playground();
    core.enable_perf_metrics(true);
    core.spawn_shape(200.0, 200.0);
    core.spawn_shape(300.0, 200.0);
    core.clear_shapes();
    core.spawn_shape(400.0, 200.0);
    core.set_gravity(0.0, 0.5);
    core.set_wall_kind(WallKind::Circle).unwrap();
    core.resize(900.0, 700.0);

    assert_eq!(core.apply_pending(), 7);
    assert_eq!(core.shape_count(), 1);
    assert_eq!(core.wall_count(), 30);
    assert_eq!(core.perf_stats().wall_rebuilds(), 1);
}

#[test]
fn perf_stats_cover_only_the_latest_drain() {
    let mut core = playground();
    core.enable_perf_metrics(true);

    core.set_wall_kind(WallKind::Circle).unwrap();
    core.apply_pending();
    core.set_wall_kind(WallKind::Triangle).unwrap();
    core.apply_pending();
    assert_eq!(core.perf_stats().wall_rebuilds(), 1);
    assert_eq!(core.perf_stats().commands_applied(), 1);

    core.spawn_shape(400.0, 300.0);
    core.apply_pending();
    assert_eq!(core.perf_stats().wall_rebuilds(), 0);
    assert_eq!(core.perf_stats().walls_ms(), 0.0);
    assert_eq!(core.perf_stats().commands_applied(), 1);
}

#[test]
fn clear_shapes_keeps_walls_and_notifies() {
    let mut core = playground();
    core.spawn_shape(200.0, 200.0);
    core.step();
    core.clear_shapes();
    core.step();
    assert_eq!(core.shape_count(), 0);
    assert_eq!(core.wall_count(), 4);
    assert_eq!(messages(&mut core), vec!["All shapes cleared!".to_string()]);
}

#[test]
fn gravity_controls_rebuild_walls() {
    let mut core = playground();
    core.set_gravity_axis(Axis::X, -1.0);
    assert_eq!(core.physics_settings().gravity, Point::new(-1.0, 1.0));
    assert_eq!(core.pending_commands(), 1);

    core.set_zero_gravity();
    assert!(core.physics_settings().is_zero_gravity());

    core.reset_physics();
    assert_eq!(*core.physics_settings(), PhysicsSettings::default());

    // Unchanged settings queue nothing.
    core.apply_pending();
    core.reset_physics();
    assert_eq!(core.pending_commands(), 0);
}

#[test]
fn air_friction_change_reaches_the_world() {
    let mut core = playground();
    core.set_air_friction(0.05);
    assert_eq!(core.apply_pending(), 2);
    assert_eq!(core.physics_settings().air_friction, 0.05);
}

#[test]
fn background_color_is_render_only() {
    let mut core = playground();
    core.set_background_color("#1F2937").unwrap();
    assert_eq!(core.background().to_string(), "#1F2937");
    assert_eq!(core.pending_commands(), 0);
    assert!(matches!(core.set_background_color("teal"), Err(PlaygroundError::InvalidColor(_))));
}

#[test]
fn shape_settings_feed_new_spawns() {
    let mut core = playground();
    core.set_shape_kind(ShapeKind::Square);
    core.set_shape_size(40.0);
    core.set_shape_color("#EF4444").unwrap();
    core.spawn_shape(400.0, 300.0);
    core.apply_pending();

    let shape = core.snapshot().into_iter().find(|b| !b.is_static).unwrap();
    assert_eq!(shape.kind, SnapshotKind::Rect);
    assert_eq!(shape.half_width, 40.0);
    assert_eq!(shape.color.to_string(), "#EF4444");
}

#[test]
fn flat_snapshot_matches_structured_one() {
    let mut core = playground();
    core.spawn_shape(400.0, 300.0);
    core.apply_pending();

    let mut buf = vec![42.0; 3];
    let count = core.write_snapshot(&mut buf);
    assert_eq!(count, 5);
    assert_eq!(buf.len(), count * SNAPSHOT_STRIDE);

    let statics = buf.chunks(SNAPSHOT_STRIDE).filter(|b| b[8] == 1.0).count();
    assert_eq!(statics, 4);
    let wall = buf.chunks(SNAPSHOT_STRIDE).find(|b| b[8] == 1.0).unwrap();
    assert_eq!(wall[7] as u32, 0xE5E7EB);
}

#[test]
fn config_round_trips_through_json() {
    let mut core = playground();
    draw(&mut core, &RECT).unwrap();
    core.set_background_color("#FEF3C7").unwrap();
    let json = core.config_json();

    let mut other = playground();
    other.load_config_json(&json).unwrap();
    assert_eq!(other.config(), core.config());
    other.step();
    assert_eq!(other.wall_count(), 4);
    assert_eq!(other.physics_settings().wall_type, WallKind::Custom);
}

#[test]
fn bad_config_changes_nothing() {
    let mut core = playground();
    let json = r#"{"physics":{"gravity":{"x":0,"y":1},"airFriction":0.01,"wallType":"custom"}}"#;
    assert!(core.load_config_json(json).is_err());
    assert_eq!(core.physics_settings().wall_type, WallKind::Square);
    assert_eq!(core.pending_commands(), 0);
}

#[test]
fn dispose_turns_everything_into_no_ops() {
    let mut core = playground();
    core.spawn_shape(400.0, 300.0);
    core.step();
    core.dispose();
    assert!(core.is_disposed());

    assert_eq!(core.pointer_down(10.0, 10.0), PointerOutcome::Ignored);
    core.spawn_shape(1.0, 1.0);
    core.clear_shapes();
    core.resize(100.0, 100.0);
    core.start_drawing();
    core.step();
    core.dispose();

    assert!(!core.is_drawing());
    assert_eq!(core.pending_commands(), 0);
    assert_eq!(core.shape_count(), 0);
    assert_eq!(core.wall_count(), 0);
    assert!(core.snapshot().is_empty());
    assert!(core.take_notices().is_empty());
    assert_eq!(core.frame(), 1);
}

#[test]
fn step_counts_frames_and_records_perf() {
    let mut core = playground();
    core.enable_perf_metrics(true);
    core.spawn_shape(400.0, 300.0);
    core.step();
    core.step();
    assert_eq!(core.frame(), 2);

    let stats = core.perf_stats();
    assert_eq!(stats.dynamic_bodies(), 1);
    assert_eq!(stats.static_bodies(), 4);
    assert_eq!(stats.commands_applied(), 0);
}
