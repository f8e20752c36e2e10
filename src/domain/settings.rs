//! Shape and physics settings records
//!
//! These are replaced wholesale by the UI controls and read by the spawn
//! and boundary routines. Slider setters clamp into range; documents that
//! arrive as JSON are validated instead.

use serde::{Deserialize, Serialize};

use crate::core::{PlaygroundError, Result};

use super::color::{Color, DEFAULT_BACKGROUND, DEFAULT_SHAPE_COLOR};
use super::geometry::Point;

pub const MIN_SHAPE_SIZE: f32 = 10.0;
pub const MAX_SHAPE_SIZE: f32 = 100.0;
pub const MIN_DENSITY_SLIDER: f32 = 1.0;
pub const MAX_DENSITY_SLIDER: f32 = 10.0;
/// Density slider units per engine density unit
pub const DENSITY_SLIDER_SCALE: f32 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Pentagon,
    Hexagon,
}

impl ShapeKind {
    /// Side count for the regular-polygon kinds
    pub fn polygon_sides(self) -> Option<usize> {
        match self {
            ShapeKind::Triangle => Some(3),
            ShapeKind::Pentagon => Some(5),
            ShapeKind::Hexagon => Some(6),
            ShapeKind::Circle | ShapeKind::Square => None,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "circle" => Some(ShapeKind::Circle),
            "square" => Some(ShapeKind::Square),
            "triangle" => Some(ShapeKind::Triangle),
            "pentagon" => Some(ShapeKind::Pentagon),
            "hexagon" => Some(ShapeKind::Hexagon),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallKind {
    Square,
    Circle,
    Triangle,
    Custom,
}

impl WallKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "square" => Some(WallKind::Square),
            "circle" => Some(WallKind::Circle),
            "triangle" => Some(WallKind::Triangle),
            "custom" => Some(WallKind::Custom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WallKind::Square => "square",
            WallKind::Circle => "circle",
            WallKind::Triangle => "triangle",
            WallKind::Custom => "custom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeSettings {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub size: f32,
    pub color: Color,
    /// Bounciness
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Circle,
            size: 30.0,
            color: DEFAULT_SHAPE_COLOR,
            restitution: 0.8,
            friction: 0.1,
            density: 0.001,
        }
    }
}

impl ShapeSettings {
    pub fn validate(&self) -> Result<()> {
        check_range("size", self.size, MIN_SHAPE_SIZE, MAX_SHAPE_SIZE)?;
        check_range("restitution", self.restitution, 0.0, 1.0)?;
        check_range("friction", self.friction, 0.0, 1.0)?;
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(PlaygroundError::InvalidSetting {
                name: "density",
                value: self.density,
                reason: "must be positive",
            });
        }
        Ok(())
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = clamp_finite(size, MIN_SHAPE_SIZE, MAX_SHAPE_SIZE, self.size);
    }

    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = clamp_finite(r, 0.0, 1.0, self.restitution);
    }

    pub fn set_friction(&mut self, f: f32) {
        self.friction = clamp_finite(f, 0.0, 1.0, self.friction);
    }

    /// Density slider runs 1..=10 and maps to `slider / 1000`.
    pub fn set_density_slider(&mut self, slider: f32) {
        let current = self.density_slider();
        let slider = clamp_finite(slider, MIN_DENSITY_SLIDER, MAX_DENSITY_SLIDER, current);
        self.density = slider / DENSITY_SLIDER_SCALE;
    }

    pub fn density_slider(&self) -> f32 {
        self.density * DENSITY_SLIDER_SCALE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsSettings {
    /// In UI units; 1.0 is one "g"
    pub gravity: Point,
    pub air_friction: f32,
    pub wall_type: WallKind,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: Point::new(0.0, 1.0),
            air_friction: 0.01,
            wall_type: WallKind::Square,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl PhysicsSettings {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("gravity.x", self.gravity.x), ("gravity.y", self.gravity.y)] {
            if !value.is_finite() {
                return Err(PlaygroundError::InvalidSetting {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        check_range("airFriction", self.air_friction, 0.0, 1.0)
    }

    pub fn set_gravity_axis(&mut self, axis: Axis, value: f32) {
        if !value.is_finite() {
            return;
        }
        match axis {
            Axis::X => self.gravity.x = value,
            Axis::Y => self.gravity.y = value,
        }
    }

    pub fn is_zero_gravity(&self) -> bool {
        self.gravity.x == 0.0 && self.gravity.y == 0.0
    }

    pub fn set_air_friction(&mut self, v: f32) {
        self.air_friction = clamp_finite(v, 0.0, 1.0, self.air_friction);
    }
}

/// Everything the settings panel controls, as one JSON document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaygroundConfig {
    pub shape: ShapeSettings,
    pub physics: PhysicsSettings,
    pub background: Color,
    /// Committed custom boundary; required when `physics.wallType` is custom
    pub custom_boundary: Vec<Point>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            shape: ShapeSettings::default(),
            physics: PhysicsSettings::default(),
            background: DEFAULT_BACKGROUND,
            custom_boundary: Vec::new(),
        }
    }
}

impl PlaygroundConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlaygroundConfig = serde_json::from_str(json)?;
        config.shape.validate()?;
        config.physics.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(PlaygroundError::InvalidSetting {
            name,
            value,
            reason: "out of range",
        })
    }
}

fn clamp_finite(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}
