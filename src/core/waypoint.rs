//! The waypoint record

use crate::core::dimension::DimensionInfo;
use crate::core::types::{Color, Position, WaypointId};
use crate::core::util::now_millis;
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_visible() -> bool {
    true
}

/// A named point in a dimension
///
/// The field names are the persisted document's field names. `==` compares
/// every field; identity is the `id`, which the store keys on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    id: WaypointId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub dimension: String,
    pub color: Color,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    created_at: i64,
}

impl Waypoint {
    /// Create a waypoint with a fresh id and the current timestamp
    pub fn new(
        name: impl Into<String>,
        position: Position,
        dimension: impl Into<String>,
        color: Color,
        icon: impl Into<String>,
        group: Option<String>,
    ) -> Self {
        Self {
            id: WaypointId::generate(),
            name: name.into(),
            x: position.x,
            y: position.y,
            z: position.z,
            dimension: dimension.into(),
            color,
            icon: icon.into(),
            group,
            visible: true,
            created_at: now_millis(),
        }
    }

    /// Create a waypoint styled with its dimension's default color and icon
    pub fn with_dimension_defaults(
        name: impl Into<String>,
        position: Position,
        dimension: impl Into<String>,
    ) -> Self {
        let dimension = dimension.into();
        let info = DimensionInfo::lookup(&dimension);
        Self::new(name, position, dimension, info.default_color, info.default_icon, None)
    }

    /// Rebuild a waypoint from every stored field, as a loader would
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: WaypointId,
        name: impl Into<String>,
        position: Position,
        dimension: impl Into<String>,
        color: Color,
        icon: impl Into<String>,
        group: Option<String>,
        visible: bool,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            x: position.x,
            y: position.y,
            z: position.z,
            dimension: dimension.into(),
            color,
            icon: icon.into(),
            group,
            visible,
            created_at,
        }
    }

    pub fn id(&self) -> &WaypointId {
        &self.id
    }

    /// Milliseconds since the Unix epoch at creation
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y, self.z)
    }

    pub fn set_position(&mut self, position: Position) {
        self.x = position.x;
        self.y = position.y;
        self.z = position.z;
    }

    pub fn distance_to(&self, x: f64, y: f64, z: f64) -> f64 {
        self.position().distance_to(&Position::new(x, y, z))
    }

    pub fn color_hex(&self) -> String {
        self.color.to_hex()
    }

    /// The group label, if it is set and not blank
    pub fn group_label(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.trim().is_empty())
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Waypoint{{name='{}', x={:.1}, y={:.1}, z={:.1}, dimension='{}'}}",
            self.name, self.x, self.y, self.z, self.dimension
        )
    }
}
