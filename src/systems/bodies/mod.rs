//! Bodies - shape blueprints and the rapier world that owns them
//!
//! The playground never integrates or resolves collisions itself; it only
//! decides what goes into the rapier sets and what comes out.

mod shapes;
mod world;

pub use shapes::{regular_polygon_vertices, BodyGeometry, BodyStyle, ShapeBody};
pub use world::{
    BodyHandle, PhysicsWorld, AIR_FRICTION_TO_DAMPING, GRAVITY_SCALE, TICK_DT, TICK_RATE,
};
