//! Boundary geometry builder
//!
//! Pure function of its inputs: the same spec and container always give
//! the same segments, in the same order.

use std::f32::consts::PI;

use crate::domain::geometry::{ContainerSize, Point};

use super::spec::{BoundarySpec, CustomBoundary, WallSegment};

/// Square walls grow outward from the container edge by this much
pub const SQUARE_WALL_THICKNESS: f32 = 50.0;

/// Circle boundary is approximated by this many circular primitives
pub const CIRCLE_SEGMENTS: usize = 30;
/// Circle radius = min(width, height) / divisor
pub const CIRCLE_RADIUS_DIVISOR: f32 = 1.8;
pub const CIRCLE_SEGMENT_RADIUS: f32 = 20.0;

/// Fraction of the container the triangle occupies
pub const TRIANGLE_SCALE: f32 = 0.85;
pub const TRIANGLE_WALL_THICKNESS: f32 = 20.0;
/// Bottom edge center sits this far above the container bottom
pub const TRIANGLE_BOTTOM_INSET: f32 = 10.0;

pub const CUSTOM_WALL_THICKNESS: f32 = 10.0;

/// Build the static wall set for `spec` inside `size`.
///
/// Returns nothing for an unmeasured container.
pub fn build_walls(spec: &BoundarySpec, size: ContainerSize) -> Vec<WallSegment> {
    if !size.is_measured() {
        return Vec::new();
    }
    match spec {
        BoundarySpec::Square => square_walls(size),
        BoundarySpec::Circle => circle_walls(size),
        BoundarySpec::Triangle => triangle_walls(size),
        BoundarySpec::Custom(boundary) => custom_walls(boundary),
    }
}

fn rect(center: Point, width: f32, height: f32, angle: f32) -> WallSegment {
    WallSegment::Rect { center, width, height, angle }
}

// Order: bottom, left, right, top.
fn square_walls(size: ContainerSize) -> Vec<WallSegment> {
    let (w, h) = (size.width, size.height);
    let t = SQUARE_WALL_THICKNESS;
    vec![
        rect(Point::new(w / 2.0, h + t / 2.0), w, t, 0.0),
        rect(Point::new(-t / 2.0, h / 2.0), t, h, 0.0),
        rect(Point::new(w + t / 2.0, h / 2.0), t, h, 0.0),
        rect(Point::new(w / 2.0, -t / 2.0), w, t, 0.0),
    ]
}

fn circle_walls(size: ContainerSize) -> Vec<WallSegment> {
    let radius = size.width.min(size.height) / CIRCLE_RADIUS_DIVISOR;
    let center = size.center();
    let step = 2.0 * PI / CIRCLE_SEGMENTS as f32;

    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 * step;
            WallSegment::Circle {
                center: Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ),
                radius: CIRCLE_SEGMENT_RADIUS,
            }
        })
        .collect()
}

// Order: bottom, left, right.
fn triangle_walls(size: ContainerSize) -> Vec<WallSegment> {
    let (w, h) = (size.width, size.height);
    let tri_h = h * TRIANGLE_SCALE;
    let base = w * TRIANGLE_SCALE;
    let t = TRIANGLE_WALL_THICKNESS;

    let side_angle = tri_h.atan2(base / 2.0);
    let side_len = (tri_h * tri_h + (base / 2.0) * (base / 2.0)).sqrt();
    let side_y = h - tri_h / 2.0;

    vec![
        rect(Point::new(w / 2.0, h - TRIANGLE_BOTTOM_INSET), base, t, 0.0),
        rect(Point::new(w / 2.0 - base / 4.0, side_y), side_len, t, -side_angle),
        rect(Point::new(w / 2.0 + base / 4.0, side_y), side_len, t, side_angle),
    ]
}

fn custom_walls(boundary: &CustomBoundary) -> Vec<WallSegment> {
    boundary
        .edges()
        .map(|(a, b)| rect(a.midpoint(b), a.distance(b), CUSTOM_WALL_THICKNESS, a.angle_to(b)))
        .collect()
}
