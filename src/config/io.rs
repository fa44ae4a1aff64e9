use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load configuration from disk, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_config(path: &Path) -> AppConfig {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            info!(
                path = %path.display(),
                "No config file found, using defaults: {err}"
            );
            return AppConfig::default();
        }
    };
    match parse_config(&data) {
        Ok(config) => {
            info!(path = %path.display(), "Loaded config");
            config
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Config file is invalid, using defaults: {err:#}"
            );
            AppConfig::default()
        }
    }
}

pub fn parse_config(data: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(data).context("Parsing config TOML")?;
    Ok(tables.into())
}
