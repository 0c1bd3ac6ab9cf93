//! Configuration management for the application
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Where the waypoint document lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Pretty-print the saved document
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_file_name() -> String {
    "waypoints.json".to_string()
}

fn default_pretty() -> bool {
    true
}

impl StoreConfig {
    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("config").join("waymark"),
            file_name: default_file_name(),
            pretty: default_pretty(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Logging format: "json" or "text"
    pub format: String,
    /// Default log level if no RUST_LOG is set
    pub default_level: String,
    /// Custom filter for dependency logs
    pub dependency_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: "text".to_string(), default_level: "info".to_string(), dependency_filter: None }
    }
}

/// Marker drawing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Markers further than this from the camera are not drawn
    pub max_render_distance: f64,
    /// Scale gained per block of distance
    pub marker_size: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Half-width of the marker diamond before scaling
    pub marker_half_size: f32,
    pub text_scale: f32,
    pub beam_width: f32,
    pub beam_min_y: f64,
    pub beam_max_y: f64,
    pub beam_alpha: f32,
    pub marker_alpha: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_render_distance: 1000.0,
            marker_size: 0.03,
            min_scale: 0.1,
            max_scale: 1.0,
            marker_half_size: 8.0,
            text_scale: 0.02,
            beam_width: 0.2,
            beam_min_y: -64.0,
            beam_max_y: 320.0,
            beam_alpha: 0.4,
            marker_alpha: 0.8,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from environment variables and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv().ok();

        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("WAYMARK_").split("__"));

        // The config file location itself can only come from the environment
        if let Some(config_path) = std::env::var_os("WAYMARK_CONFIG") {
            let path = Path::new(&config_path);
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        let config: Config = figment.extract().map_err(|e| ConfigError::LoadError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a specific TOML file layered over the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ConfigError::LoadError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.file_name.trim().is_empty() {
            return Err(ConfigError::MissingConfig("store.file_name is required".to_string()));
        }

        if !matches!(self.logging.format.as_str(), "json" | "text") {
            return Err(ConfigError::InvalidValue(format!(
                "logging.format must be \"json\" or \"text\", got \"{}\"",
                self.logging.format
            )));
        }

        let render = &self.render;
        if render.max_render_distance <= 0.0 {
            return Err(ConfigError::InvalidValue(
                "render.max_render_distance must be positive".to_string(),
            ));
        }
        if render.min_scale > render.max_scale {
            return Err(ConfigError::InvalidValue(
                "render.min_scale must not exceed render.max_scale".to_string(),
            ));
        }
        if render.beam_min_y >= render.beam_max_y {
            return Err(ConfigError::InvalidValue(
                "render.beam_min_y must be below render.beam_max_y".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.store.file_path(), Path::new("config/waymark/waypoints.json"));
        assert_eq!(config.render.max_render_distance, 1000.0);
    }

    #[test]
    fn test_load_from_toml_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("waymark.toml");
        fs::write(
            &path,
            r#"
[store]
data_dir = "/tmp/waymark-test"
pretty = false

[render]
max_render_distance = 256.0
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.store.data_dir, PathBuf::from("/tmp/waymark-test"));
        assert_eq!(config.store.file_name, "waypoints.json");
        assert!(!config.store.pretty);
        assert_eq!(config.render.max_render_distance, 256.0);
        assert_eq!(config.render.beam_max_y, 320.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));

        let mut config = Config::default();
        config.store.file_name = " ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::MissingConfig(_))));

        let mut config = Config::default();
        config.render.beam_min_y = 400.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }
}
