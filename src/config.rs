use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, SquaresError};
use crate::squares::FIRST_TEN;

/// Settings for a verification run
///
/// Read from an optional TOML file:
///
/// ```toml
/// upper_bound = 10
/// expected = 385
/// ```
///
/// When `expected` is omitted the closed-form value for `upper_bound` is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    pub upper_bound: u64,
    pub expected: Option<u64>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            upper_bound: FIRST_TEN,
            expected: None,
        }
    }
}

impl VerifyConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: VerifyConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading verification config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.upper_bound == 0 {
            return Err(SquaresError::Config(
                "upper_bound must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_first_ten() {
        let config = VerifyConfig::default();
        assert_eq!(config.upper_bound, 10);
        assert_eq!(config.expected, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = VerifyConfig::from_toml_str("").unwrap();
        assert_eq!(config, VerifyConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = VerifyConfig::from_toml_str("upper_bound = 100\nexpected = 338350\n").unwrap();
        assert_eq!(config.upper_bound, 100);
        assert_eq!(config.expected, Some(338_350));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = VerifyConfig::from_toml_str("lower_bound = 1\n");
        assert!(matches!(result, Err(SquaresError::ConfigParse(_))));
    }

    #[test]
    fn test_rejects_zero_bound() {
        let result = VerifyConfig::from_toml_str("upper_bound = 0\n");
        assert!(matches!(result, Err(SquaresError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "upper_bound = 3").unwrap();
        writeln!(file, "expected = 14").unwrap();

        let config = VerifyConfig::load(file.path()).unwrap();
        assert_eq!(config.upper_bound, 3);
        assert_eq!(config.expected, Some(14));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = VerifyConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(SquaresError::Io(_))));
    }
}
