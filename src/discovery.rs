//! Sprite folder discovery
//!
//! Reads the images in a sprite folder in a canonical (sorted) order so the
//! generated sheet is the same on every platform.

use glob::glob;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

use crate::error::SpriteError;
use crate::layout::NamedImage;

/// Check if a path has a supported sprite image extension.
pub fn is_sprite_file(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg"),
        None => false,
    }
}

/// List the immediate entries of a folder, sorted by file name.
fn list_entries(folder: &Path) -> Result<Vec<PathBuf>, SpriteError> {
    let pattern = glob::Pattern::escape(&folder.to_string_lossy());
    let pattern = format!("{}/*", pattern);

    let paths = glob(&pattern).map_err(|e| SpriteError::Pattern(pattern.clone(), e))?;

    let mut entries = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => entries.push(path),
            Err(e) => warn!("Error reading path in '{}': {}", folder.display(), e),
        }
    }

    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

/// Check that `folder` exists and is a directory.
///
/// Returns `Ok(false)` for a path that exists but is not a directory.
fn check_folder(folder: &Path) -> Result<bool, SpriteError> {
    let meta = std::fs::metadata(folder)
        .map_err(|e| SpriteError::io("Couldn't open folder", folder, e))?;
    Ok(meta.is_dir())
}

/// Read all sprite images in a folder.
///
/// Entries are visited in file-name order. Subfolders are skipped, as are
/// files with unsupported extensions. Images that fail to open or decode are
/// logged and skipped. A path that is not a folder yields no images.
pub fn read_image_folder(folder: &Path) -> Result<Vec<NamedImage>, SpriteError> {
    if !check_folder(folder)? {
        return Ok(Vec::new());
    }

    let mut images = Vec::new();
    for path in list_entries(folder)? {
        if path.is_dir() {
            continue;
        }
        if !is_sprite_file(&path) {
            debug!("Ignoring unrecognized file '{}'", path.display());
            continue;
        }

        match decode(&path) {
            Ok(image) => images.push(image),
            Err(e) => error!("{}", e),
        }
    }

    if images.is_empty() {
        warn!(
            "Folder '{}' contains no images; no sprite-sheet will be generated",
            folder.display()
        );
    }

    Ok(images)
}

fn decode(path: &Path) -> Result<NamedImage, SpriteError> {
    let image = image::open(path)
        .map_err(|source| SpriteError::Decode { path: path.to_path_buf(), source })?
        .to_rgba8();

    let name = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    Ok(NamedImage::new(name, image))
}

/// List the sprite folders (immediate subfolders) of `root`, sorted by name.
pub fn list_sprite_folders(root: &Path) -> Result<Vec<PathBuf>, SpriteError> {
    if !root.exists() {
        return Err(SpriteError::MissingFolder(root.to_path_buf()));
    }
    if !check_folder(root)? {
        return Err(SpriteError::NotAFolder(root.to_path_buf()));
    }

    Ok(list_entries(root)?.into_iter().filter(|p| p.is_dir()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, w: u32, h: u32) {
        RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255])).save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_is_sprite_file() {
        assert!(is_sprite_file(Path::new("a.png")));
        assert!(is_sprite_file(Path::new("a@2x.PNG")));
        assert!(is_sprite_file(Path::new("a.jpeg")));
        assert!(is_sprite_file(Path::new("a.JPG")));
        assert!(!is_sprite_file(Path::new("a.gif")));
        assert!(!is_sprite_file(Path::new("README")));
    }

    #[test]
    fn test_reads_images_sorted() {
        let temp = TempDir::new().unwrap();
        write_png(temp.path(), "b.png", 2, 2);
        write_png(temp.path(), "a@2x.png", 4, 4);
        write_png(temp.path(), "c.png", 1, 3);

        let images = read_image_folder(temp.path()).unwrap();
        let names: Vec<&str> = images.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a@2x", "b", "c"]);
        assert_eq!(images[2].image.dimensions(), (1, 3));
    }

    #[test]
    fn test_skips_non_images_and_subfolders() {
        let temp = TempDir::new().unwrap();
        write_png(temp.path(), "icon.png", 2, 2);
        fs::write(temp.path().join("notes.txt"), "hello").unwrap();
        fs::create_dir(temp.path().join("nested.png")).unwrap();

        let images = read_image_folder(temp.path()).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].name, "icon");
    }

    #[test]
    fn test_skips_undecodable_image() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("broken.png"), b"not a png").unwrap();
        write_png(temp.path(), "ok.png", 1, 1);

        let images = read_image_folder(temp.path()).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].name, "ok");
    }

    #[test]
    fn test_empty_folder() {
        let temp = TempDir::new().unwrap();
        assert!(read_image_folder(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_file_instead_of_folder() {
        let temp = TempDir::new().unwrap();
        write_png(temp.path(), "solo.png", 1, 1);
        assert!(read_image_folder(&temp.path().join("solo.png")).unwrap().is_empty());
    }

    #[test]
    fn test_missing_folder_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(read_image_folder(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_list_sprite_folders() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("icons")).unwrap();
        fs::create_dir(temp.path().join("buttons")).unwrap();
        fs::write(temp.path().join("stray.png"), b"").unwrap();

        let folders = list_sprite_folders(temp.path()).unwrap();
        let names: Vec<_> =
            folders.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
        assert_eq!(names, vec!["buttons", "icons"]);
    }

    #[test]
    fn test_list_sprite_folders_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = list_sprite_folders(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, SpriteError::MissingFolder(_)));
    }
}
