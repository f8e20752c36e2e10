//! Boundaries - the static walls that keep shapes inside the canvas
//!
//! - `spec`:    what boundary is wanted (`BoundarySpec`) and what it is made of (`WallSegment`)
//! - `builder`: pure geometry, `BoundarySpec × ContainerSize → Vec<WallSegment>`
//! - `drawer`:  click-to-draw collection of custom boundary vertices

mod builder;
mod drawer;
mod spec;

pub use builder::{
    build_walls, CIRCLE_RADIUS_DIVISOR, CIRCLE_SEGMENTS, CIRCLE_SEGMENT_RADIUS,
    CUSTOM_WALL_THICKNESS, SQUARE_WALL_THICKNESS, TRIANGLE_BOTTOM_INSET, TRIANGLE_SCALE,
    TRIANGLE_WALL_THICKNESS,
};
pub use drawer::{BoundaryDrawer, BoundaryPreview, DrawMode, PointMarker, MARKER_RADIUS};
pub use spec::{BoundarySpec, CustomBoundary, WallSegment, MIN_CUSTOM_POINTS};
