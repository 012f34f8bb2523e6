use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::retention;
use crate::error::Result;

/// Runtime options shared by the engine and its collaborators.
///
/// Every field has a default, so a config file only needs the keys it
/// changes. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Count players reported by a roster scan as dealt into the hand in progress.
    pub roster_counts_as_dealt: bool,
    /// Days an inactive player survives `Snapshot::prune_inactive`.
    pub retention_days: u32,
    /// Append "(N hands)" to the HUD line.
    pub show_hand_count: bool,
    /// Write the snapshot back after ingesting a feed.
    pub auto_save: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            roster_counts_as_dealt: false,
            retention_days: retention::DEFAULT_RETENTION_DAYS,
            show_hand_count: true,
            auto_save: true,
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Load a config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn retention_window(&self) -> chrono::Duration {
        retention::window(self.retention_days)
    }
}

/// Builder for [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn roster_counts_as_dealt(mut self, enabled: bool) -> Self {
        self.config.roster_counts_as_dealt = enabled;
        self
    }

    pub fn retention_days(mut self, days: u32) -> Self {
        self.config.retention_days = days;
        self
    }

    pub fn show_hand_count(mut self, enabled: bool) -> Self {
        self.config.show_hand_count = enabled;
        self
    }

    pub fn auto_save(mut self, enabled: bool) -> Self {
        self.config.auto_save = enabled;
        self
    }

    pub fn build(self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(!config.roster_counts_as_dealt);
        assert_eq!(config.retention_days, 7);
        assert!(config.show_hand_count);
        assert!(config.auto_save);
    }

    #[test]
    fn test_parse_partial() {
        let config = EngineConfig::parse("retention_days = 30\nauto_save = false\n").unwrap();
        assert_eq!(config.retention_days, 30);
        assert!(!config.auto_save);
        assert!(config.show_hand_count);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(EngineConfig::parse("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_parse_unknown_key() {
        let result = EngineConfig::parse("colour_coding = true\n");
        assert!(matches!(result, Err(Error::ConfigParseError(_))));
    }

    #[test]
    fn test_parse_wrong_type() {
        let result = EngineConfig::parse("retention_days = \"seven\"\n");
        assert!(matches!(result, Err(Error::ConfigParseError(_))));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::builder()
            .roster_counts_as_dealt(true)
            .retention_days(3)
            .show_hand_count(false)
            .build();
        assert!(config.roster_counts_as_dealt);
        assert_eq!(config.retention_days, 3);
        assert!(!config.show_hand_count);
        assert!(config.auto_save);
        assert_eq!(config.retention_window().num_days(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("hud.toml");
        fs::write(&path, "roster_counts_as_dealt = true\n").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert!(config.roster_counts_as_dealt);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = EngineConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
