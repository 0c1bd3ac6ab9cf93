//! Text-field model behind the add / edit waypoint screen
//!
//! Every field arrives as raw text. Validation happens in one pass before
//! anything touches the store, so a rejected form never leaves a waypoint
//! half-updated.
pub use crate::core::validation::{Axis, MAX_GROUP_LEN, MAX_NAME_LEN, ValidationError};

use crate::core::{Color, DimensionInfo, Position, Waypoint, WaypointId};
use crate::store::WaypointStore;
use tracing::debug;

/// Raw field contents of the edit screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointForm {
    pub name: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub color: String,
    pub group: String,
}

/// A form whose every field parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub name: String,
    pub position: Position,
    pub color: Color,
    pub group: Option<String>,
}

/// What a successful submit did
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Added(Waypoint),
    Updated(Waypoint),
}

fn block_coordinate(value: f64) -> String {
    (value as i64).to_string()
}

impl WaypointForm {
    /// Empty form for a new waypoint, prefilled with the player's block
    /// position when known and the dimension's default color.
    pub fn blank(dimension: &str, player: Option<Position>) -> Self {
        let mut form = Self {
            color: DimensionInfo::lookup(dimension).default_color.to_hex(),
            ..Self::default()
        };
        if let Some(position) = player {
            form.fill_position(position);
        }
        form
    }

    /// Form prefilled from an existing waypoint
    pub fn from_waypoint(waypoint: &Waypoint) -> Self {
        Self {
            name: waypoint.name.clone(),
            x: block_coordinate(waypoint.x),
            y: block_coordinate(waypoint.y),
            z: block_coordinate(waypoint.z),
            color: waypoint.color_hex(),
            group: waypoint.group.clone().unwrap_or_default(),
        }
    }

    /// Overwrite the coordinate fields, truncated to whole blocks
    pub fn fill_position(&mut self, position: Position) {
        self.x = block_coordinate(position.x);
        self.y = block_coordinate(position.y);
        self.z = block_coordinate(position.z);
    }

    /// The color to preview next to the color field, if it parses
    pub fn color_preview(&self) -> Option<Color> {
        Color::from_hex(&self.color).ok()
    }

    pub fn validate(&self) -> Result<ValidatedForm, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong);
        }

        let position = Position::new(
            parse_coordinate(Axis::X, &self.x)?,
            parse_coordinate(Axis::Y, &self.y)?,
            parse_coordinate(Axis::Z, &self.z)?,
        );

        let color = Color::from_hex(&self.color)?;

        let group = self.group.trim();
        if group.chars().count() > MAX_GROUP_LEN {
            return Err(ValidationError::GroupTooLong);
        }
        let group = (!group.is_empty()).then(|| group.to_string());

        Ok(ValidatedForm { name: name.to_string(), position, color, group })
    }

    /// Validate, then add a new waypoint in `dimension` or update `editing`.
    ///
    /// Nothing is written unless every field validates.
    pub fn submit(
        &self,
        store: &WaypointStore,
        editing: Option<&WaypointId>,
        dimension: &str,
    ) -> Result<SubmitOutcome, ValidationError> {
        let validated = self.validate()?;
        match editing {
            Some(id) => {
                let mut waypoint =
                    store.get(id).ok_or_else(|| ValidationError::UnknownWaypoint(id.clone()))?;
                validated.apply_to(&mut waypoint);
                store.update(waypoint.clone());
                debug!("Updated waypoint {}", waypoint.id());
                Ok(SubmitOutcome::Updated(waypoint))
            },
            None => {
                let waypoint = validated.into_waypoint(store, dimension);
                store.add(waypoint.clone());
                debug!("Added waypoint {}", waypoint.id());
                Ok(SubmitOutcome::Added(waypoint))
            },
        }
    }
}

fn parse_coordinate(axis: Axis, text: &str) -> Result<f64, ValidationError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidCoordinate { axis, value: text.to_string() })
}

impl ValidatedForm {
    /// Copy every edited field onto `waypoint`
    pub fn apply_to(&self, waypoint: &mut Waypoint) {
        waypoint.name = self.name.clone();
        waypoint.set_position(self.position);
        waypoint.color = self.color;
        waypoint.group = self.group.clone();
    }

    /// Build a new waypoint in `dimension` with that dimension's default icon
    pub fn into_waypoint(self, store: &WaypointStore, dimension: &str) -> Waypoint {
        store.create(self.name, self.position, dimension, Some(self.color), None, self.group)
    }
}
