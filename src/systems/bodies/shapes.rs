use std::f32::consts::PI;

use rapier2d::prelude::*;

use crate::domain::color::{Color, WALL_FILL};
use crate::domain::geometry::Point;
use crate::domain::settings::{ShapeKind, ShapeSettings};
use crate::systems::boundary::WallSegment;

/// Collision geometry in body-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum BodyGeometry {
    Ball { radius: f32 },
    Cuboid { half_width: f32, half_height: f32 },
    /// Convex polygon vertices around (0, 0)
    Polygon { vertices: Vec<Point> },
}

impl BodyGeometry {
    /// Half extents of the unrotated bounding box
    pub fn half_extents(&self) -> (f32, f32) {
        match self {
            BodyGeometry::Ball { radius } => (*radius, *radius),
            BodyGeometry::Cuboid { half_width, half_height } => (*half_width, *half_height),
            BodyGeometry::Polygon { vertices } => vertices.iter().fold((0.0, 0.0), |(hw, hh), v| {
                (hw.max(v.x.abs()), hh.max(v.y.abs()))
            }),
        }
    }

    pub(crate) fn collider(&self) -> ColliderBuilder {
        match self {
            BodyGeometry::Ball { radius } => ColliderBuilder::ball(*radius),
            BodyGeometry::Cuboid { half_width, half_height } => {
                ColliderBuilder::cuboid(*half_width, *half_height)
            }
            BodyGeometry::Polygon { vertices } => {
                let hull: Vec<rapier2d::math::Point<Real>> = vertices
                    .iter()
                    .map(|v| rapier2d::math::Point::new(v.x, v.y))
                    .collect();
                // Degenerate hulls only come from zero-size input; fall back to the circumcircle.
                ColliderBuilder::convex_hull(&hull).unwrap_or_else(|| {
                    let radius = vertices.iter().map(|v| v.length()).fold(0.0f32, f32::max);
                    ColliderBuilder::ball(radius.max(f32::EPSILON))
                })
            }
        }
    }
}

/// What the renderer needs to draw a body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyStyle {
    pub geometry: BodyGeometry,
    pub color: Color,
}

/// A dynamic shape ready to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeBody {
    pub position: Point,
    pub kind: ShapeKind,
    pub geometry: BodyGeometry,
    pub color: Color,
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

impl ShapeBody {
    /// Blueprint for a click at `position` with the current shape settings.
    pub fn from_settings(settings: &ShapeSettings, position: Point) -> Self {
        let size = settings.size;
        let geometry = match settings.kind {
            ShapeKind::Circle => BodyGeometry::Ball { radius: size },
            // `size` is the half side, matching the circle radius
            ShapeKind::Square => BodyGeometry::Cuboid { half_width: size, half_height: size },
            kind => {
                let sides = kind.polygon_sides().unwrap_or(3);
                BodyGeometry::Polygon { vertices: regular_polygon_vertices(sides, size) }
            }
        };

        Self {
            position,
            kind: settings.kind,
            geometry,
            color: settings.color,
            restitution: settings.restitution,
            friction: settings.friction,
            density: settings.density,
        }
    }

    pub fn style(&self) -> BodyStyle {
        BodyStyle { geometry: self.geometry.clone(), color: self.color }
    }
}

/// Regular polygon with circumradius `radius`, first vertex half a step
/// past angle zero.
pub fn regular_polygon_vertices(sides: usize, radius: f32) -> Vec<Point> {
    let sides = sides.max(3);
    let theta = 2.0 * PI / sides as f32;
    let offset = theta * 0.5;
    (0..sides)
        .map(|i| {
            let angle = offset + i as f32 * theta;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

impl WallSegment {
    pub(crate) fn geometry(&self) -> BodyGeometry {
        match *self {
            WallSegment::Rect { width, height, .. } => BodyGeometry::Cuboid {
                half_width: width / 2.0,
                half_height: height / 2.0,
            },
            WallSegment::Circle { radius, .. } => BodyGeometry::Ball { radius },
        }
    }

    pub(crate) fn angle(&self) -> f32 {
        match *self {
            WallSegment::Rect { angle, .. } => angle,
            WallSegment::Circle { .. } => 0.0,
        }
    }

    pub(crate) fn style(&self) -> BodyStyle {
        BodyStyle { geometry: self.geometry(), color: WALL_FILL }
    }
}
