use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use super::paths::data_root;
use crate::shared::{error::SkinPackError, result::AppResult};

pub const CONFIG_ENV: &str = "SKINPACK_CONFIG";
pub const TIMEOUT_ENV: &str = "SKINPACK_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CreatorConfig {
    pub pack_extension: String,
    pub operation_timeout_secs: u64,
    pub output_dir: Option<String>,
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            pack_extension: "mcpack".to_string(),
            operation_timeout_secs: 30,
            output_dir: None,
        }
    }
}

impl CreatorConfig {
    /// Environment override wins over the file value.
    pub fn operation_timeout(&self) -> Duration {
        let configured = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(self.operation_timeout_secs);
        Duration::from_secs(configured.max(1))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .as_ref()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| data_root().join("config.json"))
}

pub fn load_config() -> AppResult<CreatorConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> AppResult<CreatorConfig> {
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(CreatorConfig::default());
    }

    let raw = fs::read_to_string(path).map_err(|err| {
        SkinPackError::Io(format!("could not read config {}: {err}", path.display()))
    })?;

    serde_json::from_str::<CreatorConfig>(&raw).map_err(|err| SkinPackError::InvalidDocument {
        member: path.display().to_string(),
        reason: err.to_string(),
    })
}

pub fn save_config_to(path: &Path, config: &CreatorConfig) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            SkinPackError::Io(format!(
                "could not create config directory {}: {err}",
                parent.display()
            ))
        })?;
    }

    let raw = serde_json::to_string_pretty(config).map_err(|err| SkinPackError::InvalidDocument {
        member: path.display().to_string(),
        reason: err.to_string(),
    })?;

    fs::write(path, raw).map_err(|err| {
        SkinPackError::Io(format!("could not write config {}: {err}", path.display()))
    })
}
