//! Hex colors as used by the UI color pickers

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{PlaygroundError, Result};

/// Opaque RGB color, stored as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const fn rgb(rgb: u32) -> Self {
        Color(rgb & 0x00FF_FFFF)
    }

    pub fn to_u32(self) -> u32 {
        self.0
    }

    /// Parse `#RRGGBB` or the short `#RGB` form (case-insensitive).
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || PlaygroundError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match hex.len() {
            6 => u32::from_str_radix(hex, 16).map(Color).map_err(|_| invalid()),
            3 => {
                let short = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                let r = (short >> 8) & 0xF;
                let g = (short >> 4) & 0xF;
                let b = short & 0xF;
                Ok(Color((r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

pub const DEFAULT_SHAPE_COLOR: Color = Color::rgb(0x4F46E5);
pub const DEFAULT_BACKGROUND: Color = Color::rgb(0xFFFFFF);
pub const WALL_FILL: Color = Color::rgb(0xE5E7EB);
pub const MARKER_START: Color = Color::rgb(0x10B981);
pub const MARKER_POINT: Color = Color::rgb(0x4F46E5);

/// Background swatches offered by the picker
pub const BACKGROUND_PRESETS: [Color; 10] = [
    Color::rgb(0xFFFFFF), // white
    Color::rgb(0xF8F9FA),
    Color::rgb(0xE9ECEF),
    Color::rgb(0xF1F0FB),
    Color::rgb(0xE5DEFF), // purple
    Color::rgb(0xD3E4FD), // blue
    Color::rgb(0xF2FCE2), // green
    Color::rgb(0xFEF7CD), // yellow
    Color::rgb(0xFDE1D3), // peach
    Color::rgb(0xFFDEE2), // pink
];
