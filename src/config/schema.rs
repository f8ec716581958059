//! Configuration schema types for `spritestack.toml`
//!
//! Defines the structure and validation rules for a sprite project.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::stylesheet::StyleFormat;

/// Where the sprite images live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpritesConfig {
    /// Folder containing one subfolder per sprite sheet
    #[serde(default = "default_sprites_folder")]
    pub folder: PathBuf,
}

fn default_sprites_folder() -> PathBuf {
    PathBuf::from(".")
}

impl Default for SpritesConfig {
    fn default() -> Self {
        Self { folder: default_sprites_folder() }
    }
}

/// Where generated files go
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Folder for generated sprite sheet images
    #[serde(default = "default_output_folder")]
    pub sheets: PathBuf,
    /// Folder for generated stylesheets
    #[serde(default = "default_output_folder")]
    pub styles: PathBuf,
    /// URL prefix for the sheet images in stylesheets (defaults to `sheets`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// `sheets` as written in the config file, before it is resolved
    /// against the file's directory
    #[serde(skip)]
    pub sheets_as_written: Option<String>,
}

fn default_output_folder() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sheets: default_output_folder(),
            styles: default_output_folder(),
            uri: None,
            sheets_as_written: None,
        }
    }
}

/// Generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Emit SCSS variables and mixins in addition to CSS classes
    #[serde(default = "default_true")]
    pub scss: bool,
    /// Skip sheets that are newer than all of their sprites
    #[serde(default = "default_true")]
    pub check_timestamps: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { scss: true, check_timestamps: true }
    }
}

/// Complete spritestack.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteConfig {
    #[serde(default)]
    pub sprites: SpritesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "output.sheets")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "spritestack.toml: '{}' {}", self.field, self.message)
    }
}

impl SpriteConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        let folders = [
            ("sprites.folder", &self.sprites.folder),
            ("output.sheets", &self.output.sheets),
            ("output.styles", &self.output.styles),
        ];
        for (field, path) in folders {
            if path.as_os_str().is_empty() {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be a non-empty path".to_string(),
                });
            }
        }

        errors
    }

    /// URL prefix written into stylesheets.
    ///
    /// Falls back to the sheets folder as the user wrote it when no `uri` is
    /// configured, never to the resolved filesystem path.
    pub fn effective_uri(&self) -> String {
        let uri = match (&self.output.uri, &self.output.sheets_as_written) {
            (Some(uri), _) => uri.clone(),
            (None, Some(sheets)) => sheets.clone(),
            (None, None) => self.output.sheets.to_string_lossy().into_owned(),
        };
        uri.trim_end_matches('/').to_string()
    }

    pub fn style_format(&self) -> StyleFormat {
        StyleFormat::from_scss_flag(self.generate.scss)
    }
}
