//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.recon2obsidian.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Service-name lookup settings.
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Gathering settings.
    #[serde(default)]
    pub gather: GatherConfig,
}

/// Settings for the port-metadata lookup service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base URL of the lookup service.
    #[serde(default = "default_lookup_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            url: default_lookup_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_lookup_url() -> String {
    "http://127.0.0.1:9090".to_string()
}

fn default_timeout() -> u64 {
    10
}

/// Settings for report gathering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatherConfig {
    /// Suffix a file must carry to count as a report file.
    #[serde(default = "default_report_extension")]
    pub report_extension: String,
}

impl Default for GatherConfig {
    fn default() -> Self {
        Self {
            report_extension: default_report_extension(),
        }
    }
}

fn default_report_extension() -> String {
    ".txt".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but
    /// can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".recon2obsidian.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref url) = args.lookup_url {
            self.lookup.url = url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.lookup.url, "http://127.0.0.1:9090");
        assert_eq!(config.lookup.timeout_seconds, 10);
        assert_eq!(config.gather.report_extension, ".txt");
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[lookup]
url = "http://127.0.0.1:8081"
timeout_seconds = 3

[gather]
report_extension = ".log"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.lookup.url, "http://127.0.0.1:8081");
        assert_eq!(config.lookup.timeout_seconds, 3);
        assert_eq!(config.gather.report_extension, ".log");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[lookup]\nurl = \"http://localhost:9999\"\n").unwrap();
        assert_eq!(config.lookup.url, "http://localhost:9999");
        assert_eq!(config.lookup.timeout_seconds, 10);
        assert_eq!(config.gather.report_extension, ".txt");
    }
}
