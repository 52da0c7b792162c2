//! Configuration management for the upload vault host
//!
//! Loads settings from config.toml with environment overrides, the same
//! way the host binary expects them at startup.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Host configuration
#[derive(Debug, Deserialize, Clone)]
pub struct VaultConfig {
    /// Directory uploads are persisted into
    pub upload_dir: String,
}

impl VaultConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("DOC_VAULT").separator("_"))
            .build()?;

        let config: VaultConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.upload_dir.is_empty() {
            return Err(config::ConfigError::Message(
                "upload_dir cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// Get the upload directory as a PathBuf
    pub fn upload_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.upload_dir)
    }
}
