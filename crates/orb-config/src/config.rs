//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Icosphere parameters.
    pub mesh: MeshConfig,
    /// Where and how to write the generated mesh.
    pub export: ExportConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Icosphere parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// Subdivision passes applied to the base icosahedron (0-10).
    pub order: u32,
    /// Emit equirectangular texture coordinates.
    pub with_uv: bool,
    /// Sphere radius.
    pub radius: f32,
    /// Lower `u` bound below which a corner of a wrapping triangle is moved
    /// across the seam.
    pub seam_threshold: f32,
}

/// Mesh export configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// JSON output file. Nothing is written when unset.
    pub path: Option<PathBuf>,
    /// Pretty-print the JSON.
    pub pretty: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl MeshConfig {
    /// Check that the generator can run with these settings.
    ///
    /// The radius must be finite and positive; the seam threshold must lie in
    /// `[0, 1]`. The subdivision order is checked by the generator itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "radius",
                value: self.radius,
                expected: "a finite number greater than 0",
            });
        }
        if !(0.0..=1.0).contains(&self.seam_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "seam_threshold",
                value: self.seam_threshold,
                expected: "a number between 0 and 1",
            });
        }
        Ok(())
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            order: 4,
            with_uv: true,
            radius: 1.0,
            seam_threshold: 0.5,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Path of the config file inside `config_dir`.
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE_NAME)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = Self::path_in(config_dir);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        let config_path = Self::path_in(config_dir);
        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Re-read the config file: `Some(new_config)` if it differs from `self`,
    /// `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&Self::path_in(config_dir))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::ReadError {
                path: config_path.to_path_buf(),
                source,
            })?;
        ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: config_path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mesh.order, 4);
        assert!(config.mesh.with_uv);
        assert_eq!(config.mesh.radius, 1.0);
        assert_eq!(config.mesh.seam_threshold, 0.5);
        assert_eq!(config.export.path, None);
        assert!(!config.export.pretty);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_default_mesh_config_is_valid() {
        assert!(MeshConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_unusable_radius() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let mesh = MeshConfig {
                radius,
                ..Default::default()
            };
            let err = mesh.validate().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { field: "radius", .. }),
                "radius {radius}: {err:?}"
            );
        }
    }

    #[test]
    fn test_rejects_unusable_seam_threshold() {
        for seam_threshold in [f32::NAN, -0.1, 1.5] {
            let mesh = MeshConfig {
                seam_threshold,
                ..Default::default()
            };
            let err = mesh.validate().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { field: "seam_threshold", .. }),
                "threshold {seam_threshold}: {err:?}"
            );
        }
    }

    #[test]
    fn test_write_error_names_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = Config::default().save(&blocker.join("orb")).unwrap_err();
        match err {
            ConfigError::WriteError { path, .. } => assert_eq!(path, blocker.join("orb")),
            other => panic!("expected WriteError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("orb");

        let config = Config::load_or_create(&config_dir).unwrap();
        assert_eq!(config, Config::default());
        assert!(Config::path_in(&config_dir).exists());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.mesh.order = 6;
        config.mesh.radius = 6371.0;
        config.export.path = Some(PathBuf::from("out/sphere.json"));
        config.debug.log_level = "debug".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Config::path_in(dir.path()), "(mesh: (order: 2))").unwrap();

        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config.mesh.order, 2);
        assert!(config.mesh.with_uv);
        assert_eq!(config.debug, DebugConfig::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Config::path_in(dir.path()), "(mesh: (order: \"four\"))").unwrap();

        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.ron"), "{err}");
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config.reload(dir.path()).unwrap(), None);

        let mut edited = config.clone();
        edited.mesh.order = 5;
        edited.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap();
        assert_eq!(reloaded, Some(edited));
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::default().reload(dir.path()).unwrap_err();
        match err {
            ConfigError::ReadError { path, .. } => assert_eq!(path, Config::path_in(dir.path())),
            other => panic!("expected ReadError, got {other:?}"),
        }
    }
}
