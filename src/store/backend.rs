//! Durable storage behind the waypoint store
use crate::config::StoreConfig;
use crate::core::Waypoint;
use crate::store::error::{Result, StoreError};
use parking_lot::Mutex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Whole-document persistence for the waypoint set
#[cfg_attr(test, mockall::automock)]
pub trait WaypointBackend: Send + Sync {
    /// Load every stored waypoint. A missing document loads as empty.
    fn load(&self) -> Result<Vec<Waypoint>>;

    /// Replace the stored document with `waypoints`
    fn save(&self, waypoints: &[Waypoint]) -> Result<()>;
}

/// Parse a waypoint array document. `null` parses as empty.
pub fn parse_document(data: &str) -> Result<Vec<Waypoint>> {
    let parsed: Option<Vec<Waypoint>> = serde_json::from_str(data)?;
    Ok(parsed.unwrap_or_default())
}

/// Render a waypoint array document
pub fn render_document(waypoints: &[Waypoint], pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(waypoints)?
    } else {
        serde_json::to_string(waypoints)?
    };
    Ok(rendered)
}

/// A single JSON file holding the array of waypoints
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), pretty: true }
    }

    /// Build from configuration, creating the data directory if needed
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)
            .map_err(|e| StoreError::file_access(&config.data_dir, e))?;
        Ok(Self::new(config.file_path()).with_pretty(config.pretty))
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WaypointBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Waypoint>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No waypoint file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            },
            Err(e) => return Err(StoreError::file_access(&self.path, e)),
        };
        parse_document(&contents)
    }

    fn save(&self, waypoints: &[Waypoint]) -> Result<()> {
        let document = render_document(waypoints, self.pretty)?;
        fs::write(&self.path, document).map_err(|e| StoreError::file_access(&self.path, e))?;
        debug!("Saved {} waypoints to {}", waypoints.len(), self.path.display());
        Ok(())
    }
}

/// Keeps the last saved document in memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    saved: Mutex<Vec<Waypoint>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently saved set
    pub fn snapshot(&self) -> Vec<Waypoint> {
        self.saved.lock().clone()
    }
}

impl WaypointBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<Waypoint>> {
        Ok(self.saved.lock().clone())
    }

    fn save(&self, waypoints: &[Waypoint]) -> Result<()> {
        *self.saved.lock() = waypoints.to_vec();
        Ok(())
    }
}
