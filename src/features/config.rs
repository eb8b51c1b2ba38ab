//! Application configuration
//!
//! Read once at startup from an optional JSON file in the platform config
//! directory. The application never writes the file back.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::catalog::{self, ImageEntry, Track};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display and interface settings
    pub display: DisplayConfig,
    /// Playback settings
    pub playback: PlaybackConfig,
    /// Download limits
    pub network: NetworkConfig,
    /// Replacement catalog, if any
    pub catalog: CatalogConfig,
}

/// Display-related settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Interface language code ("id" or "en")
    pub language: String,
    /// Animate the background decoration and hover effects
    pub animations: bool,
    /// Number of decorative particles
    pub particle_count: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: "id".to_string(),
            animations: true,
            particle_count: crate::features::decoration::PARTICLE_COUNT,
        }
    }
}

/// Playback-related settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Volume level (0.0 to 1.0)
    pub volume: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { volume: 1.0 }
    }
}

/// HTTP download settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Largest accepted image body
    pub max_image_bytes: u64,
    /// Largest accepted audio body
    pub max_track_bytes: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_image_bytes: 16 * 1024 * 1024,
            max_track_bytes: 64 * 1024 * 1024,
        }
    }
}

/// Optional replacement for the built-in catalog
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub images: Option<Vec<ImageEntry>>,
    pub tracks: Option<Vec<Track>>,
}

impl Config {
    /// Get the config file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "galeri", "Galeri")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load config from file, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse config from JSON text
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.playback.volume = config.playback.volume.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Photos to show, honoring the catalog override
    pub fn images(&self) -> Vec<ImageEntry> {
        self.catalog
            .images
            .clone()
            .unwrap_or_else(catalog::default_images)
    }

    /// Tracks to offer, honoring the catalog override
    pub fn tracks(&self) -> Vec<Track> {
        self.catalog
            .tracks
            .clone()
            .unwrap_or_else(catalog::default_tracks)
    }
}

/// Errors that can occur while loading the config
#[derive(Debug, Clone)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_json(r#"{ "display": { "language": "en" } }"#).unwrap();
        assert_eq!(config.display.language, "en");
        assert!(config.display.animations);
        assert_eq!(config.display.particle_count, 45);
        assert_eq!(config.network.timeout_secs, 30);
        assert_eq!(config.images().len(), 12);
        assert_eq!(config.tracks().len(), 5);
    }

    #[test]
    fn test_volume_is_clamped() {
        let config = Config::from_json(r#"{ "playback": { "volume": 3.5 } }"#).unwrap();
        assert_eq!(config.playback.volume, 1.0);
    }

    #[test]
    fn test_catalog_override() {
        let config = Config::from_json(
            r#"{
                "catalog": {
                    "images": [],
                    "tracks": [{ "name": "Solo", "url": "https://example.com/solo.mp3" }]
                }
            }"#,
        )
        .unwrap();
        assert!(config.images().is_empty());
        assert_eq!(config.tracks(), vec![Track::new("Solo", "https://example.com/solo.mp3")]);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::load_from_file(Path::new("/definitely/not/here/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
