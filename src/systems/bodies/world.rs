use std::collections::HashMap;

use rapier2d::prelude::*;

use crate::domain::geometry::Point;
use crate::systems::boundary::WallSegment;

use super::shapes::{BodyStyle, ShapeBody};

pub type BodyHandle = RigidBodyHandle;

/// Fixed simulation rate (ticks per second)
pub const TICK_RATE: f32 = 60.0;
pub const TICK_DT: f32 = 1.0 / TICK_RATE;
/// One unit of UI gravity in px/s²
pub const GRAVITY_SCALE: f32 = 1000.0;
/// Per-tick air friction → rapier linear damping (1/s)
pub const AIR_FRICTION_TO_DAMPING: f32 = TICK_RATE;
/// Rapier's length unit in pixels, tunes its contact tolerances
const PIXELS_PER_METER: f32 = 100.0;

/// Owns every rapier set. Static bodies are walls, dynamic bodies are
/// user shapes; nothing else is ever inserted.
pub struct PhysicsWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    pipeline: PhysicsPipeline,
    params: IntegrationParameters,
    styles: HashMap<BodyHandle, BodyStyle>,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        let mut params = IntegrationParameters::default();
        params.dt = TICK_DT;
        params.length_unit = PIXELS_PER_METER;

        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            pipeline: PhysicsPipeline::new(),
            params,
            styles: HashMap::new(),
        }
    }

    /// Insert one static wall primitive.
    pub fn insert_wall(&mut self, segment: &WallSegment) -> BodyHandle {
        let center = segment.center();
        let body = RigidBodyBuilder::fixed()
            .translation(vector![center.x, center.y])
            .rotation(segment.angle())
            .build();
        let collider = segment.geometry().collider().build();

        let handle = self.bodies.insert(body);
        self.colliders.insert_with_parent(collider, handle, &mut self.bodies);
        self.styles.insert(handle, segment.style());
        handle
    }

    /// Swap the whole static set for `segments`.
    ///
    /// Both halves run before control returns, so no step or render ever
    /// sees the world with zero or two boundaries. Dynamic bodies are not
    /// touched. Returns the number of walls installed.
    pub fn replace_walls(&mut self, segments: &[WallSegment]) -> usize {
        let stale: Vec<BodyHandle> = self
            .bodies
            .iter()
            .filter(|(_, body)| body.is_fixed())
            .map(|(handle, _)| handle)
            .collect();
        for handle in stale {
            self.remove_body(handle);
        }

        for segment in segments {
            self.insert_wall(segment);
        }

        // Shapes asleep on a removed wall must notice it is gone.
        for (_, body) in self.bodies.iter_mut() {
            if body.is_dynamic() {
                body.wake_up(true);
            }
        }
        segments.len()
    }

    /// Insert a user shape as a dynamic body.
    pub fn insert_shape(&mut self, shape: &ShapeBody, air_friction: f32) -> BodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![shape.position.x, shape.position.y])
            .linear_damping(air_friction * AIR_FRICTION_TO_DAMPING)
            .build();
        let collider = shape
            .geometry
            .collider()
            .restitution(shape.restitution)
            .friction(shape.friction)
            .density(shape.density)
            .build();

        let handle = self.bodies.insert(body);
        self.colliders.insert_with_parent(collider, handle, &mut self.bodies);
        self.styles.insert(handle, shape.style());
        handle
    }

    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        self.styles.remove(&handle);
        self.bodies
            .remove(
                handle,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    /// Remove every dynamic body, keep the walls. Returns how many went.
    pub fn clear_shapes(&mut self) -> usize {
        let shapes = self.dynamic_handles();
        let count = shapes.len();
        for handle in shapes {
            self.remove_body(handle);
        }
        count
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        let all: Vec<BodyHandle> = self.bodies.iter().map(|(handle, _)| handle).collect();
        for handle in all {
            self.remove_body(handle);
        }
    }

    pub fn set_air_friction(&mut self, air_friction: f32) {
        let damping = air_friction * AIR_FRICTION_TO_DAMPING;
        for (_, body) in self.bodies.iter_mut() {
            if body.is_dynamic() {
                body.set_linear_damping(damping);
            }
        }
    }

    /// Advance one fixed tick under `gravity` (UI units).
    pub fn step(&mut self, gravity: Point) {
        let gravity = vector![gravity.x * GRAVITY_SCALE, gravity.y * GRAVITY_SCALE];
        self.pipeline.step(
            &gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    pub fn dynamic_handles(&self) -> Vec<BodyHandle> {
        self.bodies
            .iter()
            .filter(|(_, body)| body.is_dynamic())
            .map(|(handle, _)| handle)
            .collect()
    }

    pub fn dynamic_count(&self) -> usize {
        self.bodies.iter().filter(|(_, body)| body.is_dynamic()).count()
    }

    pub fn wall_count(&self) -> usize {
        self.bodies.iter().filter(|(_, body)| body.is_fixed()).count()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Position and rotation of a body.
    pub fn pose(&self, handle: BodyHandle) -> Option<(Point, f32)> {
        let body = self.bodies.get(handle)?;
        let t = body.translation();
        Some((Point::new(t.x, t.y), body.rotation().angle()))
    }

    /// Every body with its pose, style, and static flag.
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, Point, f32, bool, &BodyStyle)> + '_ {
        self.bodies.iter().filter_map(move |(handle, body)| {
            let style = self.styles.get(&handle)?;
            let t = body.translation();
            Some((
                handle,
                Point::new(t.x, t.y),
                body.rotation().angle(),
                body.is_fixed(),
                style,
            ))
        })
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::ContainerSize;
    use crate::domain::settings::ShapeSettings;
    use crate::systems::boundary::{build_walls, BoundarySpec};

    #[test]
    fn replace_walls_keeps_shapes() {
        let size = ContainerSize::new(800.0, 600.0);
        let mut world = PhysicsWorld::new();
        world.replace_walls(&build_walls(&BoundarySpec::Square, size));

        let shape = ShapeBody::from_settings(&ShapeSettings::default(), Point::new(400.0, 300.0));
        let handle = world.insert_shape(&shape, 0.01);
        let before = world.pose(handle);

        let installed = world.replace_walls(&build_walls(&BoundarySpec::Circle, size));
        assert_eq!(installed, 30);
        assert_eq!(world.wall_count(), 30);
        assert_eq!(world.dynamic_handles(), vec![handle]);
        assert_eq!(world.pose(handle), before);
    }

    #[test]
    fn shapes_fall_and_land_on_the_floor() {
        let size = ContainerSize::new(800.0, 600.0);
        let mut world = PhysicsWorld::new();
        world.replace_walls(&build_walls(&BoundarySpec::Square, size));
        let shape = ShapeBody::from_settings(&ShapeSettings::default(), Point::new(400.0, 300.0));
        let handle = world.insert_shape(&shape, 0.01);

        for _ in 0..300 {
            world.step(Point::new(0.0, 1.0));
        }

        let (pos, _) = world.pose(handle).unwrap();
        assert!(pos.y > 300.0, "shape should have fallen, y = {}", pos.y);
        assert!(pos.y < 600.0, "shape should stay above the floor, y = {}", pos.y);
    }

    #[test]
    fn clear_shapes_leaves_walls() {
        let mut world = PhysicsWorld::new();
        world.replace_walls(&build_walls(&BoundarySpec::Triangle, ContainerSize::new(400.0, 400.0)));
        let shape = ShapeBody::from_settings(&ShapeSettings::default(), Point::new(200.0, 200.0));
        world.insert_shape(&shape, 0.0);
        world.insert_shape(&shape, 0.0);

        assert_eq!(world.clear_shapes(), 2);
        assert_eq!(world.dynamic_count(), 0);
        assert_eq!(world.wall_count(), 3);
        assert_eq!(world.iter().count(), 3);
    }

    fn launch(world: &mut PhysicsWorld, air_friction: f32) -> BodyHandle {
        let shape = ShapeBody::from_settings(&ShapeSettings::default(), Point::new(400.0, 300.0));
        let handle = world.insert_shape(&shape, air_friction);
        if let Some(body) = world.bodies.get_mut(handle) {
            body.set_linvel(vector![200.0, 0.0], true);
        }
        handle
    }

    fn speed(world: &PhysicsWorld, handle: BodyHandle) -> f32 {
        world.bodies.get(handle).map_or(0.0, |body| body.linvel().norm())
    }

    #[test]
    fn air_friction_updates_existing_shapes_only() {
        let mut world = PhysicsWorld::new();
        world.replace_walls(&build_walls(&BoundarySpec::Square, ContainerSize::new(800.0, 600.0)));
        let handle = launch(&mut world, 0.01);

        world.set_air_friction(0.05);
        let damping = world.bodies.get(handle).unwrap().linear_damping();
        assert!((damping - 0.05 * AIR_FRICTION_TO_DAMPING).abs() < 1e-5, "damping = {}", damping);

        for (_, body) in world.bodies.iter().filter(|(_, body)| body.is_fixed()) {
            assert_eq!(body.linear_damping(), 0.0);
        }
    }

    #[test]
    fn air_friction_slows_moving_shapes() {
        let mut still_air = PhysicsWorld::new();
        let free = launch(&mut still_air, 0.0);

        let mut thick_air = PhysicsWorld::new();
        let damped = launch(&mut thick_air, 0.0);
        thick_air.set_air_friction(0.05);

        for _ in 0..30 {
            still_air.step(Point::zero());
            thick_air.step(Point::zero());
        }

        assert!((speed(&still_air, free) - 200.0).abs() < 1.0);
        assert!(
            speed(&thick_air, damped) < 100.0,
            "speed after damping = {}",
            speed(&thick_air, damped)
        );
    }
}
