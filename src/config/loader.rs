//! Configuration loading and discovery for `spritestack.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::SpriteConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "spritestack.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse spritestack.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override sprites folder
    pub sprites: Option<PathBuf>,
    /// Override sheets output folder
    pub sheets: Option<PathBuf>,
    /// Override stylesheets output folder
    pub styles: Option<PathBuf>,
    /// Override URL prefix
    pub uri: Option<String>,
    /// Override SCSS generation
    pub scss: Option<bool>,
    /// Override timestamp checking
    pub check_timestamps: Option<bool>,
}

/// Find spritestack.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    find_config_from(cwd)
}

/// Find spritestack.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a spritestack.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns a default
/// configuration.
///
/// Relative folders in a discovered file are resolved against the file's
/// directory.
pub fn load_config(path: Option<&Path>) -> Result<SpriteConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<SpriteConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: SpriteConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    config.output.sheets_as_written = Some(config.output.sheets.to_string_lossy().into_owned());
    if let Some(root) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        resolve_relative(&mut config, root);
    }

    Ok(config)
}

fn resolve_relative(config: &mut SpriteConfig, root: &Path) {
    for folder in [
        &mut config.sprites.folder,
        &mut config.output.sheets,
        &mut config.output.styles,
    ] {
        if folder.is_relative() {
            *folder = root.join(&*folder);
        }
    }
}

/// Configuration used when no spritestack.toml is found.
pub fn default_config() -> SpriteConfig {
    SpriteConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut SpriteConfig, overrides: &CliOverrides) {
    if let Some(ref sprites) = overrides.sprites {
        config.sprites.folder = sprites.clone();
    }
    if let Some(ref sheets) = overrides.sheets {
        config.output.sheets = sheets.clone();
        config.output.sheets_as_written = None;
    }
    if let Some(ref styles) = overrides.styles {
        config.output.styles = styles.clone();
    }
    if let Some(ref uri) = overrides.uri {
        config.output.uri = Some(uri.clone());
    }
    if let Some(scss) = overrides.scss {
        config.generate.scss = scss;
    }
    if let Some(check) = overrides.check_timestamps {
        config.generate.check_timestamps = check;
    }
}
