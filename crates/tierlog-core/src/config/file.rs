//! Config files (YAML or JSON)
//!
//! The format is picked from the extension: `.json` is JSON, anything else
//! is read as YAML.

use std::fs;
use std::path::{Path, PathBuf};

use super::{ConfigError, ConfigResult, LoggerConfig};

/// Config file syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Format for a file path, by extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
        }
    }
}

impl LoggerConfig {
    /// Default user-level config path (`~/.config/tierlog/config.yaml`)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("tierlog").join("config.yaml")
    }

    /// Parse config text
    pub fn parse(content: &str, format: ConfigFormat) -> ConfigResult<Self> {
        match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ConfigError::Other(format!("Failed to parse YAML: {}", e))),
            ConfigFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }

    /// Load config from a file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::parse(&content, ConfigFormat::from_path(path))
    }

    /// Serialize config in the given format
    pub fn to_string_as(&self, format: ConfigFormat) -> ConfigResult<String> {
        match format {
            ConfigFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| ConfigError::Other(format!("Failed to serialize YAML: {}", e))),
            ConfigFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Save config to a file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = self.to_string_as(ConfigFormat::from_path(path))?;
        fs::write(path, content)?;
        Ok(())
    }
}
