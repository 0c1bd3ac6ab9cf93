//! The waypoint store
//!
//! An in-memory table of waypoints keyed by id. Every mutation rewrites the
//! whole backing document; queries are linear scans over the table.
pub mod backend;
pub mod error;

pub use backend::{JsonFileBackend, MemoryBackend, WaypointBackend, parse_document, render_document};
pub use error::{Result, StoreError};

use crate::config::StoreConfig;
use crate::core::{Color, DimensionInfo, Position, Waypoint, WaypointId};
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, error, info, warn};

/// Shared waypoint table backed by a durable document
pub struct WaypointStore {
    waypoints: RwLock<HashMap<WaypointId, Waypoint>>,
    backend: Box<dyn WaypointBackend>,
}

impl WaypointStore {
    /// Open a store over `backend`, loading whatever it holds.
    ///
    /// Load failures are logged and leave the store empty.
    pub fn new(backend: impl WaypointBackend + 'static) -> Self {
        let backend: Box<dyn WaypointBackend> = Box::new(backend);
        let waypoints = match backend.load() {
            Ok(loaded) => {
                debug!("Loaded {} waypoints", loaded.len());
                loaded.into_iter().map(|wp| (wp.id().clone(), wp)).collect()
            },
            Err(StoreError::Parse(e)) => {
                error!("Invalid waypoints document, starting empty: {}", e);
                HashMap::new()
            },
            Err(e) => {
                error!("Failed to load waypoints, starting empty: {}", e);
                HashMap::new()
            },
        };
        Self { waypoints: RwLock::new(waypoints), backend }
    }

    /// Open the JSON file named by `config`.
    ///
    /// If the data directory cannot be created the store runs in memory only.
    pub fn open(config: &StoreConfig) -> Self {
        match JsonFileBackend::from_config(config) {
            Ok(backend) => {
                info!("Using waypoint file {}", backend.path().display());
                Self::new(backend)
            },
            Err(e) => {
                error!("Waypoints will not be saved this session: {}", e);
                Self::new(MemoryBackend::new())
            },
        }
    }

    /// Build a new waypoint with a fresh id and timestamp. Does not insert it.
    ///
    /// A missing color or icon is taken from the dimension's defaults.
    pub fn create(
        &self,
        name: impl Into<String>,
        position: Position,
        dimension: impl Into<String>,
        color: Option<Color>,
        icon: Option<String>,
        group: Option<String>,
    ) -> Waypoint {
        let dimension = dimension.into();
        let info = DimensionInfo::lookup(&dimension);
        Waypoint::new(
            name,
            position,
            dimension,
            color.unwrap_or(info.default_color),
            icon.unwrap_or_else(|| info.default_icon.to_string()),
            group,
        )
    }

    /// Insert or replace by id
    pub fn add(&self, waypoint: Waypoint) {
        let mut waypoints = self.waypoints.write();
        waypoints.insert(waypoint.id().clone(), waypoint);
        self.persist(&waypoints);
    }

    /// Insert or replace by id
    pub fn update(&self, waypoint: Waypoint) {
        self.add(waypoint);
    }

    /// Remove by id, returning the removed waypoint if there was one
    pub fn remove(&self, id: &WaypointId) -> Option<Waypoint> {
        let mut waypoints = self.waypoints.write();
        let removed = waypoints.remove(id);
        self.persist(&waypoints);
        removed
    }

    pub fn clear(&self) {
        let mut waypoints = self.waypoints.write();
        waypoints.clear();
        self.persist(&waypoints);
    }

    pub fn get(&self, id: &WaypointId) -> Option<Waypoint> {
        self.waypoints.read().get(id).cloned()
    }

    pub fn list(&self) -> Vec<Waypoint> {
        self.filtered(|_| true)
    }

    pub fn len(&self) -> usize {
        self.waypoints.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.read().is_empty()
    }

    pub fn list_visible(&self) -> Vec<Waypoint> {
        self.filtered(|wp| wp.visible)
    }

    pub fn list_in_dimension(&self, dimension: &str) -> Vec<Waypoint> {
        self.filtered(|wp| wp.dimension == dimension)
    }

    pub fn list_visible_in_dimension(&self, dimension: &str) -> Vec<Waypoint> {
        self.filtered(|wp| wp.visible && wp.dimension == dimension)
    }

    /// Case-insensitive substring match on name, group or dimension.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<Waypoint> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.list();
        }
        self.filtered(|wp| matches_query(wp, &query))
    }

    pub fn search_in_dimension(&self, query: &str, dimension: &str) -> Vec<Waypoint> {
        let query = query.trim().to_lowercase();
        self.filtered(|wp| {
            wp.dimension == dimension && (query.is_empty() || matches_query(wp, &query))
        })
    }

    /// Every non-blank group label in use
    pub fn groups(&self) -> BTreeSet<String> {
        self.waypoints.read().values().filter_map(|wp| wp.group_label()).map(str::to_string).collect()
    }

    pub fn waypoints_in_group(&self, group: &str) -> Vec<Waypoint> {
        self.filtered(|wp| wp.group.as_deref() == Some(group))
    }

    /// Up to `limit` waypoints in `dimension`, closest first.
    ///
    /// Equal distances keep table iteration order.
    pub fn nearest(&self, x: f64, y: f64, z: f64, dimension: &str, limit: usize) -> Vec<Waypoint> {
        let mut candidates: Vec<(f64, Waypoint)> = self
            .list_in_dimension(dimension)
            .into_iter()
            .map(|wp| (wp.distance_to(x, y, z), wp))
            .collect();
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
        candidates.truncate(limit);
        candidates.into_iter().map(|(_, wp)| wp).collect()
    }

    pub fn count_in_dimension(&self, dimension: &str) -> usize {
        self.waypoints.read().values().filter(|wp| wp.dimension == dimension).count()
    }

    /// Upsert every waypoint in a serialized array, then persist.
    ///
    /// Existing waypoints with colliding ids are overwritten. Malformed input
    /// leaves the store untouched.
    pub fn import_from(&self, data: &str) -> Result<usize> {
        let imported = parse_document(data)?;
        let count = imported.len();
        if count == 0 {
            warn!("Import contained no waypoints");
            return Ok(0);
        }

        let mut waypoints = self.waypoints.write();
        for wp in imported {
            waypoints.insert(wp.id().clone(), wp);
        }
        self.persist(&waypoints);
        info!("Imported {} waypoints", count);
        Ok(count)
    }

    /// Serialize every waypoint as a JSON array
    pub fn export_all(&self) -> Result<String> {
        render_document(&self.list(), true)
    }

    fn filtered(&self, predicate: impl Fn(&Waypoint) -> bool) -> Vec<Waypoint> {
        self.waypoints.read().values().filter(|wp| predicate(wp)).cloned().collect()
    }

    fn persist(&self, waypoints: &HashMap<WaypointId, Waypoint>) {
        let snapshot: Vec<Waypoint> = waypoints.values().cloned().collect();
        if let Err(e) = self.backend.save(&snapshot) {
            error!("Failed to save waypoints: {}", e);
        }
    }
}

fn matches_query(wp: &Waypoint, lowered_query: &str) -> bool {
    wp.name.to_lowercase().contains(lowered_query)
        || wp.group.as_deref().is_some_and(|g| g.to_lowercase().contains(lowered_query))
        || wp.dimension.to_lowercase().contains(lowered_query)
}
