use serde::Serialize;

use crate::domain::color::Color;
use crate::domain::geometry::Point;
use crate::systems::bodies::BodyGeometry;

use super::PlaygroundCore;

/// Floats per body in the flat render buffer:
/// `[id, kind, x, y, angle, half_w | radius, half_h, rgb, is_static]`
pub const SNAPSHOT_STRIDE: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotKind {
    Circle = 0,
    Rect = 1,
    Polygon = 2,
}

/// Render view of one body. Walls are flagged `is_static` and drawn
/// with the wall fill.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: u32,
    pub kind: SnapshotKind,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub half_width: f32,
    pub half_height: f32,
    pub radius: f32,
    pub color: Color,
    pub is_static: bool,
    /// Body-local vertices, polygons only
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<Point>,
}

pub(super) fn snapshot(core: &PlaygroundCore) -> Vec<BodySnapshot> {
    let Some(world) = core.world.as_ref() else {
        return Vec::new();
    };

    world
        .iter()
        .map(|(handle, position, angle, is_static, style)| {
            let (half_width, half_height) = style.geometry.half_extents();
            let (kind, radius, vertices) = match &style.geometry {
                BodyGeometry::Ball { radius } => (SnapshotKind::Circle, *radius, Vec::new()),
                BodyGeometry::Cuboid { .. } => (SnapshotKind::Rect, 0.0, Vec::new()),
                BodyGeometry::Polygon { vertices } => (SnapshotKind::Polygon, 0.0, vertices.clone()),
            };
            BodySnapshot {
                id: handle.into_raw_parts().0,
                kind,
                x: position.x,
                y: position.y,
                angle,
                half_width,
                half_height,
                radius,
                color: style.color,
                is_static,
                vertices,
            }
        })
        .collect()
}

/// Overwrite `out` with `SNAPSHOT_STRIDE` floats per body. Returns the
/// body count. Polygons are written with their bounding half extents.
pub(super) fn write_flat(core: &PlaygroundCore, out: &mut Vec<f32>) -> usize {
    out.clear();
    let Some(world) = core.world.as_ref() else {
        return 0;
    };

    let mut count = 0;
    for (handle, position, angle, is_static, style) in world.iter() {
        let (half_width, half_height) = style.geometry.half_extents();
        let kind = match style.geometry {
            BodyGeometry::Ball { .. } => SnapshotKind::Circle,
            BodyGeometry::Cuboid { .. } => SnapshotKind::Rect,
            BodyGeometry::Polygon { .. } => SnapshotKind::Polygon,
        };
        // Colors are 24-bit, exact in an f32 mantissa.
        out.extend_from_slice(&[
            handle.into_raw_parts().0 as f32,
            kind as u8 as f32,
            position.x,
            position.y,
            angle,
            half_width,
            half_height,
            style.color.to_u32() as f32,
            if is_static { 1.0 } else { 0.0 },
        ]);
        count += 1;
    }
    count
}
