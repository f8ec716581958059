//! Error type for reading sprites and writing sheets

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors from the layer around the layout core.
///
/// The layout and projection themselves cannot fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpriteError {
    /// File system error on a specific path
    #[error("{context} '{}': {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A sprite image could not be decoded
    #[error("Problem decoding image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The sheet image could not be encoded or saved
    #[error("Problem writing sprite-sheet to '{}': {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// A path that must be a folder is something else
    #[error("'{}' must be a folder", .0.display())]
    NotAFolder(PathBuf),
    /// The sprites folder does not exist
    #[error("Sprite folder '{}' does not exist", .0.display())]
    MissingFolder(PathBuf),
    /// Invalid glob pattern built from a folder path
    #[error("Invalid folder pattern '{0}': {1}")]
    Pattern(String, #[source] glob::PatternError),
    /// Configuration loading error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SpriteError {
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SpriteError::Io { context, path: path.into(), source }
    }
}
