//! Top-level finder configuration and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::defaults;
use super::error::ConfigLoadError;
use super::frontier::FrontierConfig;
use super::ray_casting::RayCastingConfig;

/// Frontier region extraction settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Regions with fewer cells are dropped (1 keeps every region)
    #[serde(default = "defaults::min_region_size")]
    pub min_region_size: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            min_region_size: defaults::min_region_size(),
        }
    }
}

/// Full frontier finder configuration loaded from YAML
///
/// ```yaml
/// frontier:
///   max_occupied_threshold: 50.0
/// ray_casting:
///   field_of_view: 6.283185307179586
///   ray_count: 720
///   grid_cell_size: 0.05
///   step_size: 0.025
///   max_range: 4.0
/// clustering:
///   min_region_size: 3
/// workers: 4
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Classification thresholds and visibility markers
    #[serde(default)]
    pub frontier: FrontierConfig,

    /// Ray fan geometry
    #[serde(default)]
    pub ray_casting: RayCastingConfig,

    /// Region extraction
    #[serde(default)]
    pub clustering: ClusterConfig,

    /// Threads used for ray casting (1 = cast on the calling thread)
    #[serde(default = "defaults::workers")]
    pub workers: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            frontier: FrontierConfig::default(),
            ray_casting: RayCastingConfig::default(),
            clustering: ClusterConfig::default(),
            workers: defaults::workers(),
        }
    }
}

impl FinderConfig {
    /// Default config file location, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "configs/frontier.yaml";

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load [`DEFAULT_PATH`](Self::DEFAULT_PATH) if present, otherwise built-in defaults.
    pub fn load_or_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new(Self::DEFAULT_PATH);
        if path.exists() {
            Self::from_yaml_file(path)
        } else {
            log::debug!("{} not found, using built-in defaults", Self::DEFAULT_PATH);
            Ok(Self::default())
        }
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> std::result::Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.frontier.validate()?;
        self.ray_casting.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = FinderConfig::from_yaml("{}").unwrap();
        assert_eq!(config, FinderConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
ray_casting:
  ray_count: 90
  max_range: 2.5
clustering:
  min_region_size: 4
"#;
        let config = FinderConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.ray_casting.ray_count, 90);
        assert_eq!(config.ray_casting.max_range, Some(2.5));
        assert_eq!(config.ray_casting.step_size, defaults::step_size());
        assert_eq!(config.clustering.min_region_size, 4);
        assert_eq!(config.workers, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = FinderConfig {
            workers: 3,
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        let parsed = FinderConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = FinderConfig::from_yaml("ray_casting:\n  ray_count: lots\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = FinderConfig::from_yaml_file(Path::new("/nonexistent/frontier.yaml")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io { .. }));
    }

    #[test]
    fn test_validate_propagates_section_errors() {
        let mut config = FinderConfig::default();
        config.ray_casting.ray_count = 0;
        assert!(config.validate().is_err());
    }
}
