//! Configuration loading and management

use crate::cache::DEFAULT_MAX_SIZE;
use crate::core::error::ConfigError;
use crate::core::Record;
use crate::pipeline::FilterPipeline;
use crate::virtualize::{DEFAULT_OVERSCAN, MAX_OVERSCAN, VirtualList};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Result cache settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of filter results kept per view
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

/// Input rate limiting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Quiet period before a search keystroke re-filters
    pub debounce_ms: u64,

    /// Minimum interval between handled scroll events
    pub throttle_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            throttle_ms: 100,
        }
    }
}

/// Virtual list geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub item_height: f64,
    pub container_height: f64,
    pub overscan: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: 72.0,
            container_height: 600.0,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

/// Complete configuration for a test-case view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseViewConfig {
    pub cache: CacheConfig,
    pub timing: TimingConfig,
    pub list: ListConfig,
}

impl CaseViewConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML file, using defaults when it is missing
    /// or invalid
    pub fn from_yaml_file_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_yaml_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default view config");
                Self::default()
            }
        }
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.cache.max_size == 0 {
            return Err(invalid("cache.max_size", 0, "must be at least 1"));
        }

        let item_height = self.list.item_height;
        if !item_height.is_finite() || item_height <= 0.0 {
            return Err(invalid("list.item_height", item_height, "must be positive"));
        }

        let container_height = self.list.container_height;
        if !container_height.is_finite() || container_height < 0.0 {
            return Err(invalid(
                "list.container_height",
                container_height,
                "must not be negative",
            ));
        }

        if self.list.overscan > MAX_OVERSCAN {
            return Err(invalid(
                "list.overscan",
                self.list.overscan,
                &format!("must not exceed {}", MAX_OVERSCAN),
            ));
        }

        Ok(())
    }

    /// Create a filter pipeline sized by `cache.max_size`
    pub fn build_pipeline<T: Record>(&self) -> FilterPipeline<T> {
        FilterPipeline::new(self.cache.max_size)
    }

    /// Create an empty virtual list with the configured geometry
    pub fn build_list(&self) -> VirtualList {
        VirtualList::new(self.list.item_height, self.list.container_height)
            .with_overscan(self.list.overscan)
    }

    pub fn debounce_wait(&self) -> Duration {
        Duration::from_millis(self.timing.debounce_ms)
    }

    pub fn throttle_limit(&self) -> Duration {
        Duration::from_millis(self.timing.throttle_ms)
    }
}

fn invalid(field: &str, value: impl ToString, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TestCase;

    #[test]
    fn test_default_config() {
        let config = CaseViewConfig::default();

        assert_eq!(config.cache.max_size, 50);
        assert_eq!(config.debounce_wait(), Duration::from_millis(300));
        assert_eq!(config.throttle_limit(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = CaseViewConfig::from_yaml_str("list:\n  item_height: 48\n").unwrap();

        assert_eq!(config.list.item_height, 48.0);
        assert_eq!(config.list.container_height, 600.0);
        assert_eq!(config.list.overscan, 5);
        assert_eq!(config.cache, CacheConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = CaseViewConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, CaseViewConfig::default());
    }

    #[test]
    fn test_yaml_serialization() {
        let mut config = CaseViewConfig::default();
        config.timing.debounce_ms = 150;
        let yaml = serde_yaml::to_string(&config).unwrap();

        // Should be able to parse it back
        let parsed = CaseViewConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_values() {
        let err = CaseViewConfig::from_yaml_str("cache:\n  max_size: 0\n").unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(
            config_err,
            ConfigError::InvalidValue { field, .. } if field == "cache.max_size"
        ));

        let mut config = CaseViewConfig::default();
        config.list.item_height = 0.0;
        assert!(config.validate().is_err());

        config.list.item_height = 72.0;
        config.list.container_height = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overscan_is_bounded() {
        let err = CaseViewConfig::from_yaml_str("list:\n  overscan: 18446744073709551615\n")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidValue { field, .. }) if field == "list.overscan"
        ));

        let config = CaseViewConfig::from_yaml_str("list:\n  overscan: 1000\n").unwrap();
        assert_eq!(config.build_list().overscan(), MAX_OVERSCAN);
    }

    #[test]
    fn test_malformed_yaml() {
        let err = CaseViewConfig::from_yaml_str("cache: [1, 2").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_builders_use_config() {
        let config = CaseViewConfig::from_yaml_str(
            "cache:\n  max_size: 3\nlist:\n  item_height: 20\n  container_height: 100\n  overscan: 1\n",
        )
        .unwrap();

        let pipeline = config.build_pipeline::<TestCase>();
        assert_eq!(pipeline.stats().max_size, 3);

        let list = config.build_list();
        assert_eq!(list.item_height(), 20.0);
        assert_eq!(list.container_height(), 100.0);
        assert_eq!(list.overscan(), 1);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = CaseViewConfig::from_yaml_file_or_default("/nonexistent/caseview.yaml");
        assert_eq!(config, CaseViewConfig::default());
    }
}
