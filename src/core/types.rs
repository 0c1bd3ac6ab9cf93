//! Core domain types for the application

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::validation::ValidationError;

/// Mask applied to every stored color so only the RGB channels survive
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Waypoint identifier
///
/// A newtype wrapper around String. Fresh ids are UUID v4 text, but imported
/// documents may carry any string, so the value is treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaypointId(String);

impl WaypointId {
    /// Generate a new random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner value
    #[inline]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WaypointId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WaypointId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Packed 24-bit RGB color
///
/// Persisted as a decimal integer. Any integer is accepted on the way in and
/// masked down to 24 bits, so legacy signed ARGB values still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct Color(u32);

impl Color {
    /// Create a color from a packed value, discarding anything above 24 bits
    #[inline]
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & RGB_MASK)
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn red(&self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub fn green(&self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub fn blue(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Channel values scaled to `[0, 1]` for vertex colors
    pub fn rgb_f32(&self) -> [f32; 3] {
        [self.red() as f32 / 255.0, self.green() as f32 / 255.0, self.blue() as f32 / 255.0]
    }

    /// Opaque ARGB value, as used by host fill calls
    pub fn argb_opaque(&self) -> u32 {
        self.0 | 0xFF00_0000
    }

    /// Format as `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:06X}", self.0)
    }

    /// Parse `#RRGGBB` or `RRGGBB` (1 to 6 hex digits, leading `#` optional)
    pub fn from_hex(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() || digits.len() > 6 || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ValidationError::InvalidColor(text.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::new)
            .map_err(|_| ValidationError::InvalidColor(text.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<i64> for Color {
    fn from(raw: i64) -> Self {
        Self::new(raw as u32)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// A point in a dimension's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance; no scaling between dimensions
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Center of the block containing this point
    pub fn block_center(&self) -> Position {
        Position::new(self.x + 0.5, self.y + 0.5, self.z + 0.5)
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_formatting() {
        assert_eq!(Color::new(0x4CAF50).to_hex(), "#4CAF50");
        assert_eq!(Color::new(0x00000A).to_hex(), "#00000A");
        assert_eq!(Color::new(0xFF4CAF50).to_hex(), "#4CAF50");
    }

    #[test]
    fn test_color_hex_parsing() {
        assert_eq!(Color::from_hex("#F44336").unwrap(), Color::new(0xF44336));
        assert_eq!(Color::from_hex("9c27b0").unwrap(), Color::new(0x9C27B0));
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::new(0x000FFF));

        assert!(matches!(Color::from_hex(""), Err(ValidationError::InvalidColor(_))));
        assert!(matches!(Color::from_hex("#"), Err(ValidationError::InvalidColor(_))));
        assert!(matches!(Color::from_hex("#GG0000"), Err(ValidationError::InvalidColor(_))));
        assert!(matches!(Color::from_hex("#1234567"), Err(ValidationError::InvalidColor(_))));
        assert!(matches!(Color::from_hex("-12345"), Err(ValidationError::InvalidColor(_))));
    }

    #[test]
    fn test_color_serde_masks_legacy_values() {
        let color: Color = serde_json::from_str("-1").unwrap();
        assert_eq!(color.value(), 0xFF_FFFF);

        let color: Color = serde_json::from_str("5025616").unwrap();
        assert_eq!(color, Color::new(0x4CAF50));
        assert_eq!(serde_json::to_string(&color).unwrap(), "5025616");
    }

    #[test]
    fn test_color_channels() {
        let color = Color::new(0xFF8000);
        assert_eq!((color.red(), color.green(), color.blue()), (255, 128, 0));
        let [r, g, b] = color.rgb_f32();
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(b, 0.0);
        assert_eq!(color.argb_opaque(), 0xFFFF8000);
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 12.0);
        assert_eq!(a.distance_to(&b), 13.0);
        assert_eq!(b.distance_to(&a), 13.0);
        assert_eq!(a.block_center(), Position::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = WaypointId::generate();
        let b = WaypointId::generate();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a.value()).is_ok());
    }
}
