use crate::gui::board::LayoutConfig;
use crate::gui::theme::{ColorConfig, FontSpec};
use config::FileFormat;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    pub colors: ColorConfig,
    pub font: FontSpec,
}

impl Config {
    /// The built-in board, ignoring user files and the environment.
    pub fn embedded() -> Result<Self, ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()?;
        Ok(s.try_deserialize()?)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "dartboard", "dartboard").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Layers the built-in defaults, the user's config file and `DARTBOARD_*` variables.
/// Nested keys use `__`, e.g. `DARTBOARD_COLORS__WIRE=gold`.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path()?,
    };
    log::info!("Loading configuration from {}", config_path.display());

    let s = config::Config::builder()
        .add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        // an explicitly named file has to exist
        .add_source(config::File::from(config_path).required(path.is_some()))
        .add_source(
            config::Environment::with_prefix("DARTBOARD")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let config: Config = s.try_deserialize()?;
    log::debug!("Board font: {}, labels: {:?}", config.font, config.layout.numbers);
    Ok(config)
}

/// Writes the built-in config to `path`, or to the user config directory, unless a file
/// is already there.
pub fn write_default_config(path: Option<&Path>) -> std::io::Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
        log::info!("Wrote default configuration to {}", path.display());
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
