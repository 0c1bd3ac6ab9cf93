//! Core domain modules
pub mod dimension;
pub mod types;
pub mod util;
pub mod validation;
pub mod waypoint;

// Re-export common types
pub use dimension::{DIMENSIONS, DimensionInfo, OVERWORLD, THE_END, THE_NETHER};
pub use types::{Color, Position, WaypointId};
pub use validation::ValidationError;
pub use waypoint::Waypoint;
