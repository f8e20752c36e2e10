//! Boundary point collector
//!
//! `Idle → Drawing` on `start`, back to `Idle` on `finish` or `clear`.
//! While drawing, every canvas click appends a vertex (no dedup, no
//! minimum spacing).

use serde::Serialize;

use crate::core::{PlaygroundError, Result};
use crate::domain::color::{Color, MARKER_POINT, MARKER_START};
use crate::domain::geometry::Point;

use super::spec::{CustomBoundary, MIN_CUSTOM_POINTS};

pub const MARKER_RADIUS: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DrawMode {
    #[default]
    Idle,
    Drawing,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointMarker {
    pub point: Point,
    pub radius: f32,
    pub color: Color,
    /// The first vertex doubles as the closing vertex
    pub is_start: bool,
}

/// Overlay drawn on top of the canvas while collecting points.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryPreview {
    /// Open polyline through the points, present from two points on
    pub polyline: Vec<Point>,
    /// Last → first, present from three points on
    pub closing: Option<[Point; 2]>,
    pub markers: Vec<PointMarker>,
}

#[derive(Debug, Default)]
pub struct BoundaryDrawer {
    mode: DrawMode,
    points: Vec<Point>,
}

impl BoundaryDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn is_drawing(&self) -> bool {
        self.mode == DrawMode::Drawing
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&mut self) {
        self.points.clear();
        self.mode = DrawMode::Drawing;
        log::debug!("boundary drawing started");
    }

    /// Append a vertex. Ignored (returns false) unless drawing.
    pub fn add_point(&mut self, point: Point) -> bool {
        if !self.is_drawing() {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Leave drawing mode and hand back the closed polygon. The collected
    /// points are consumed either way.
    ///
    /// With fewer than three points nothing is committed and the caller
    /// keeps whatever boundary it had. Outside drawing mode this fails
    /// with `NotDrawing` and changes nothing.
    pub fn finish(&mut self) -> Result<CustomBoundary> {
        if !self.is_drawing() {
            return Err(PlaygroundError::NotDrawing);
        }
        self.mode = DrawMode::Idle;
        let result = CustomBoundary::new(std::mem::take(&mut self.points));
        match &result {
            Ok(boundary) => log::debug!("boundary drawing finished with {} points", boundary.len()),
            Err(err) => log::warn!("boundary drawing rejected: {}", err),
        }
        result
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.mode = DrawMode::Idle;
    }

    pub fn preview(&self) -> BoundaryPreview {
        if !self.is_drawing() {
            return BoundaryPreview::default();
        }

        let polyline = if self.points.len() > 1 {
            self.points.clone()
        } else {
            Vec::new()
        };

        let closing = if self.points.len() >= MIN_CUSTOM_POINTS {
            match (self.points.last(), self.points.first()) {
                (Some(&last), Some(&first)) => Some([last, first]),
                _ => None,
            }
        } else {
            None
        };

        let markers = self
            .points
            .iter()
            .enumerate()
            .map(|(i, &point)| PointMarker {
                point,
                radius: MARKER_RADIUS,
                color: if i == 0 { MARKER_START } else { MARKER_POINT },
                is_start: i == 0,
            })
            .collect();

        BoundaryPreview { polyline, closing, markers }
    }
}
