mod init;
mod schema;

pub use init::write_default_config;
pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::scoring::MAX_OVERRIDE_CREDITS;

/// Get the config directory path (~/.config/cgpa-calc/)
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("cgpa-calc")
}

/// Get the default config file path (~/.config/cgpa-calc/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Get the default store directory (~/.config/cgpa-calc/store)
pub fn get_default_store_dir() -> PathBuf {
    get_config_dir().join("store")
}

/// Load configuration from a YAML file
///
/// With no explicit path a missing default file yields the default config.
/// An explicitly named file must exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config path does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!("no config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| {
            format!("Failed to parse config: invalid YAML in {}", config_path.display())
        })?;

    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref namespace) = config.namespace {
        if namespace.is_empty() {
            errors.push("namespace: must not be empty".to_string());
        } else if !namespace
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            errors.push(format!(
                "namespace: '{}' may only contain letters, digits, '_' and '-'",
                namespace
            ));
        }
    }

    match config.override_credits {
        Some(0) => errors.push("override_credits: must be positive".to_string()),
        Some(credits) if credits > MAX_OVERRIDE_CREDITS => errors.push(format!(
            "override_credits: {} exceeds the maximum of {}",
            credits, MAX_OVERRIDE_CREDITS
        )),
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
