//! Waymark - per-dimension 3D waypoints
//!
//! Waymark keeps a store of named waypoints, persisted as a single JSON
//! document, and exposes the queries, edit-form validation and per-frame /
//! per-tick callbacks a game client needs to list, search and draw them.

pub mod client;
pub mod config;
pub mod core;
pub mod edit;
pub mod error;
pub mod logging;
pub mod store;
pub mod view;

pub use crate::core::{Color, Position, Waypoint, WaypointId};
pub use crate::store::{StoreError, WaypointStore};
