use serde::Serialize;

use crate::core::{PlaygroundError, Result};
use crate::domain::geometry::Point;
use crate::domain::settings::WallKind;

/// Vertices needed to close a custom boundary
pub const MIN_CUSTOM_POINTS: usize = 3;

/// A closed polygon with at least three vertices.
///
/// The last vertex connects back to the first; the first vertex is the
/// implicit closing vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomBoundary {
    points: Vec<Point>,
}

impl CustomBoundary {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < MIN_CUSTOM_POINTS {
            return Err(PlaygroundError::NotEnoughPoints {
                got: points.len(),
                need: MIN_CUSTOM_POINTS,
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive vertex pairs, wrapping last → first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

/// Which boundary to install.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundarySpec {
    Square,
    Circle,
    Triangle,
    Custom(CustomBoundary),
}

impl BoundarySpec {
    pub fn custom(points: Vec<Point>) -> Result<Self> {
        CustomBoundary::new(points).map(BoundarySpec::Custom)
    }

    pub fn kind(&self) -> WallKind {
        match self {
            BoundarySpec::Square => WallKind::Square,
            BoundarySpec::Circle => WallKind::Circle,
            BoundarySpec::Triangle => WallKind::Triangle,
            BoundarySpec::Custom(_) => WallKind::Custom,
        }
    }

    /// Resolve a wall kind against the committed custom boundary, if any.
    pub fn from_kind(kind: WallKind, custom: Option<&CustomBoundary>) -> Result<Self> {
        match kind {
            WallKind::Square => Ok(BoundarySpec::Square),
            WallKind::Circle => Ok(BoundarySpec::Circle),
            WallKind::Triangle => Ok(BoundarySpec::Triangle),
            WallKind::Custom => custom
                .cloned()
                .map(BoundarySpec::Custom)
                .ok_or(PlaygroundError::NotEnoughPoints {
                    got: 0,
                    need: MIN_CUSTOM_POINTS,
                }),
        }
    }
}

/// One static collision primitive. Built once, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WallSegment {
    /// Rectangle centered at `center`, rotated by `angle` radians
    Rect {
        center: Point,
        width: f32,
        height: f32,
        angle: f32,
    },
    Circle { center: Point, radius: f32 },
}

impl WallSegment {
    pub fn center(&self) -> Point {
        match *self {
            WallSegment::Rect { center, .. } | WallSegment::Circle { center, .. } => center,
        }
    }
}
