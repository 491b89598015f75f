use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::embeddings::EmbeddingsConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub embeddings: EmbeddingsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit log events to stderr
    #[serde(default = "default_stderr")]
    pub stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            stderr: default_stderr(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_stderr() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;

            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config from {:?}", path))
        } else {
            Ok(Config::default())
        }
    }

    /// Parse and validate configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.embeddings.validate()?;
        Ok(config)
    }

    /// Save configuration as pretty-printed TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::ProviderKind;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.embeddings.provider, ProviderKind::Fixed);
        assert_eq!(config.embeddings.synthetic.vector_size, 4);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.stderr);
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("embedstub.toml");

        let mut config = Config::default();
        config.embeddings.provider = ProviderKind::Synthetic;
        config.embeddings.synthetic.vector_size = 12;

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded.embeddings.provider, ProviderKind::Synthetic);
        assert_eq!(loaded.embeddings.synthetic.vector_size, 12);
    }

    #[test]
    fn test_load_missing_config_returns_default() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.embeddings.provider, ProviderKind::Fixed);
    }

    #[test]
    fn test_parse_rejects_zero_vector_size() {
        let result = Config::from_toml_str(
            r#"
            [embeddings]
            provider = "synthetic"

            [embeddings.synthetic]
            vector_size = 0
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_provider_tag() {
        let result = Config::from_toml_str(
            r#"
            [embeddings]
            provider = "openai"
            "#,
        );

        assert!(result.is_err());
    }
}
