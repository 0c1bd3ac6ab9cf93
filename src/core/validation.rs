//! Input limits and the errors raised when editing input breaks them
use crate::core::types::WaypointId;
use std::fmt;
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_GROUP_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Rejected editing input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Name is longer than {} characters", MAX_NAME_LEN)]
    NameTooLong,

    #[error("Group is longer than {} characters", MAX_GROUP_LEN)]
    GroupTooLong,

    #[error("Invalid {axis} coordinate: {value:?}")]
    InvalidCoordinate { axis: Axis, value: String },

    #[error("Invalid color: {0:?} (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("Waypoint not found: {0}")]
    UnknownWaypoint(WaypointId),
}
