//! Configuration structures for the extraction toolkit.

use serde::{Deserialize, Serialize};

/// Main configuration for the resumex toolkit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumexConfig {
    /// Extraction engine configuration.
    pub extraction: ExtractionConfig,

    /// Output and reporting configuration.
    pub output: OutputConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,
}

impl Default for ResumexConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            output: OutputConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

/// Extraction engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Derive a name from the email local part when no other strategy
    /// matches.
    pub email_name_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            email_name_fallback: true,
        }
    }
}

/// Output and reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print a missing-field summary after extraction.
    pub show_missing: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { show_missing: true }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Default number of parallel workers.
    pub jobs: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { jobs: 4 }
    }
}

impl ResumexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResumexConfig::default();
        assert!(config.extraction.email_name_fallback);
        assert!(config.output.show_missing);
        assert_eq!(config.batch.jobs, 4);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ResumexConfig =
            serde_json::from_str(r#"{"batch": {"jobs": 8}}"#).unwrap();
        assert_eq!(config.batch.jobs, 8);
        assert!(config.extraction.email_name_fallback);
        assert!(config.output.show_missing);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = ResumexConfig::default();
        config.extraction.email_name_fallback = false;
        let json = serde_json::to_string(&config).unwrap();
        let back: ResumexConfig = serde_json::from_str(&json).unwrap();
        assert!(!back.extraction.email_name_fallback);
    }
}
