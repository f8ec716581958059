//! Timestamp-based staleness check
//!
//! A sheet needs regenerating when it is missing, or when its sprite folder
//! or any file in it was modified after the sheet was written.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use crate::error::SpriteError;

fn modified(path: &Path) -> std::io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}

/// Check whether the sprites in `folder` changed since `sheet` was written.
///
/// Entries in the folder that cannot be inspected are ignored.
pub fn sprites_modified(folder: &Path, sheet: &Path) -> Result<bool, SpriteError> {
    let sheet_time = match modified(sheet) {
        Ok(time) => time,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(SpriteError::io("Couldn't check sprite-sheet", sheet, e)),
    };

    let folder_time =
        modified(folder).map_err(|e| SpriteError::io("Couldn't check folder", folder, e))?;
    if folder_time > sheet_time {
        return Ok(true);
    }

    let entries =
        fs::read_dir(folder).map_err(|e| SpriteError::io("Couldn't open folder", folder, e))?;
    for entry in entries.flatten() {
        if let Ok(time) = modified(&entry.path()) {
            if time > sheet_time {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;
    use tempfile::TempDir;

    fn set_mtime(path: &Path, time: SystemTime) {
        File::options().write(true).open(path).unwrap().set_modified(time).unwrap();
    }

    fn setup() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let folder = temp.path().join("icons");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("a.png"), b"").unwrap();
        let sheet = temp.path().join("icons.png");
        (temp, folder, sheet)
    }

    #[test]
    fn test_missing_sheet_is_modified() {
        let (_temp, folder, sheet) = setup();
        assert!(sprites_modified(&folder, &sheet).unwrap());
    }

    #[test]
    fn test_sheet_newer_than_sprites() {
        let (_temp, folder, sheet) = setup();
        let past = SystemTime::now() - Duration::from_secs(3600);
        set_mtime(&folder.join("a.png"), past);
        let folder_file = File::open(&folder).unwrap();
        folder_file.set_modified(past).ok();
        fs::write(&sheet, b"").unwrap();

        // Folder mtimes cannot be set on every platform; only assert when it took.
        if modified(&folder).unwrap() <= modified(&sheet).unwrap() {
            assert!(!sprites_modified(&folder, &sheet).unwrap());
        }
    }

    #[test]
    fn test_sprite_newer_than_sheet() {
        let (_temp, folder, sheet) = setup();
        fs::write(&sheet, b"").unwrap();
        set_mtime(&sheet, SystemTime::now() - Duration::from_secs(3600));
        set_mtime(&folder.join("a.png"), SystemTime::now());

        assert!(sprites_modified(&folder, &sheet).unwrap());
    }

    #[test]
    fn test_missing_folder_is_error() {
        let (temp, _folder, sheet) = setup();
        fs::write(&sheet, b"").unwrap();
        assert!(sprites_modified(&temp.path().join("gone"), &sheet).is_err());
    }
}
