// File: src/config.rs
use crate::core::dialect::{PatternCatalog, DOCUMENTED_PATTERNS, GENERATION_PATTERNS};
use crate::error::ForgeError;
use crate::validate::ExpectedCounts;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Settings for a pipeline run, read from a TOML file. Every field has a
/// default, so an empty or missing file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    pub data_dir: PathBuf,
    pub snapshot_path: Option<PathBuf>,
    pub generation_patterns: Vec<String>,
    pub documented_patterns: Vec<String>,
    pub expected_counts: ExpectedCounts,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("language-data"),
            snapshot_path: None,
            generation_patterns: GENERATION_PATTERNS.iter().map(|s| s.to_string()).collect(),
            documented_patterns: DOCUMENTED_PATTERNS.iter().map(|s| s.to_string()).collect(),
            expected_counts: ExpectedCounts::default(),
        }
    }
}

impl ForgeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ForgeError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ForgeError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(target: "roots.config", path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn pattern_catalog(&self) -> PatternCatalog {
        PatternCatalog::new(self.generation_patterns.clone(), self.documented_patterns.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ForgeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ForgeConfig::default());
        assert_eq!(config.pattern_catalog(), PatternCatalog::default());
    }

    #[test]
    fn overrides_selected_fields() {
        let config = ForgeConfig::from_toml_str(
            r#"
            data_dir = "data"
            generation_patterns = ["L/R"]

            [expected_counts]
            vowels = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.pattern_catalog().generates("L/R"));
        assert!(!config.pattern_catalog().generates("B/V"));
        assert_eq!(config.expected_counts.vowels, 10);
        assert_eq!(config.expected_counts.a_vowels, 5);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ForgeConfig::from_toml_str("data_dir = [").unwrap_err();
        assert!(matches!(err, ForgeError::Config(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ForgeConfig::load(&dir.path().join("roots.toml")).unwrap();
        assert_eq!(config, ForgeConfig::default());
    }
}
