//! PNG and stylesheet output and file path generation

use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::SpriteError;
use crate::stylesheet::StyleFormat;

/// Path of the sheet image for `name` in `dir`.
pub fn sheet_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.png", name))
}

/// Path of the stylesheet for `name` in `dir`.
pub fn stylesheet_path(dir: &Path, name: &str, format: StyleFormat) -> PathBuf {
    dir.join(format!("{}.{}", name, format.extension()))
}

/// Create the parent folder of `path` if it is missing.
fn ensure_parent(path: &Path) -> Result<(), SpriteError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| SpriteError::io("Unable to create output folder", parent, e))?;
            info!("Created output folder '{}'", parent.display());
        }
    }
    Ok(())
}

/// Save an RGBA image to a PNG file, replacing any existing file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), SpriteError> {
    ensure_parent(path)?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| SpriteError::Encode { path: path.to_path_buf(), source })
}

/// Write stylesheet text to a file, replacing any existing file.
pub fn write_stylesheet(text: &str, path: &Path) -> Result<(), SpriteError> {
    ensure_parent(path)?;
    fs::write(path, text).map_err(|e| SpriteError::io("Problem writing styles to", path, e))
}
