//! Sprite folder → sprite sheet + stylesheet.
//!
//! Each sprite folder becomes one sheet named after the folder. Folders are
//! independent, so a folder of folders is generated in parallel.

use image::RgbaImage;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, warn};

use crate::composite::compose;
use crate::config::SpriteConfig;
use crate::discovery::{list_sprite_folders, read_image_folder};
use crate::error::SpriteError;
use crate::generate::{GenerateReport, SheetResult};
use crate::layout::{layout, LayoutWarning, NamedImage};
use crate::output::{save_png, sheet_path, stylesheet_path, write_stylesheet};
use crate::staleness::sprites_modified;
use crate::stylesheet::{render_stylesheet, StyleContext, StyleFormat};

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Folder the sheet images are written to
    pub sheets_dir: PathBuf,
    /// Folder the stylesheets are written to
    pub styles_dir: PathBuf,
    /// URL prefix of the sheet images in stylesheets
    pub output_uri: String,
    pub format: StyleFormat,
    /// Skip sheets that are newer than their sprites
    pub check_timestamps: bool,
}

impl GenerateOptions {
    pub fn from_config(config: &SpriteConfig) -> Self {
        Self {
            sheets_dir: config.output.sheets.clone(),
            styles_dir: config.output.styles.clone(),
            output_uri: config.effective_uri(),
            format: config.style_format(),
            check_timestamps: config.generate.check_timestamps,
        }
    }
}

/// A sheet built in memory, ready to be written.
#[derive(Debug, Clone)]
pub struct GeneratedSheet {
    pub name: String,
    pub image: RgbaImage,
    pub stylesheet: String,
    pub warnings: Vec<LayoutWarning>,
}

/// Why a folder produced no sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The sprite folder does not exist
    MissingFolder,
    /// The sheet is newer than every sprite
    UpToDate,
    /// The folder has no decodable images
    NoImages,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingFolder => write!(f, "folder does not exist"),
            SkipReason::UpToDate => write!(f, "up to date"),
            SkipReason::NoImages => write!(f, "no images"),
        }
    }
}

/// Outcome of generating one folder.
#[derive(Debug)]
pub enum FolderOutcome {
    Generated(GeneratedSheet),
    Skipped(SkipReason),
}

/// Lay out, compose and style a set of sprites as sheet `name`.
pub fn build_sheet(
    name: &str,
    images: &[NamedImage],
    output_uri: &str,
    format: StyleFormat,
) -> GeneratedSheet {
    let sheet = layout(images);
    for warning in &sheet.warnings {
        warn!("{}", warning);
    }

    let image = compose(&sheet, images);
    let ctx = StyleContext {
        sheet_name: name,
        url_prefix: output_uri,
        width: sheet.width,
        height: sheet.height,
    };
    let stylesheet = render_stylesheet(&ctx, &sheet.placements, format);

    GeneratedSheet { name: name.to_string(), image, stylesheet, warnings: sheet.warnings }
}

fn folder_name(folder: &Path) -> String {
    folder.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| {
        // "." or a root path; fall back to the canonical name
        folder
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "sprites".to_string())
    })
}

/// Generate the sheet for one sprite folder without writing anything.
pub fn generate_folder(
    folder: &Path,
    opts: &GenerateOptions,
) -> Result<FolderOutcome, SpriteError> {
    let name = folder_name(folder);

    if !folder.exists() {
        info!(
            "Specified sprite folder '{}' does not exist; not generating anything",
            folder.display()
        );
        return Ok(FolderOutcome::Skipped(SkipReason::MissingFolder));
    }
    if !folder.is_dir() {
        return Err(SpriteError::NotAFolder(folder.to_path_buf()));
    }

    if opts.check_timestamps && !sprites_modified(folder, &sheet_path(&opts.sheets_dir, &name))? {
        info!(
            "No sprites have been added or modified since '{}.png' was generated; skipping generation",
            name
        );
        return Ok(FolderOutcome::Skipped(SkipReason::UpToDate));
    }

    let images = read_image_folder(folder)?;
    if images.is_empty() {
        return Ok(FolderOutcome::Skipped(SkipReason::NoImages));
    }

    Ok(FolderOutcome::Generated(build_sheet(&name, &images, &opts.output_uri, opts.format)))
}

/// Write a generated sheet's image and stylesheet.
///
/// Returns the paths written.
pub fn write_outputs(
    sheet: &GeneratedSheet,
    opts: &GenerateOptions,
) -> Result<Vec<PathBuf>, SpriteError> {
    let image_path = sheet_path(&opts.sheets_dir, &sheet.name);
    save_png(&sheet.image, &image_path)?;
    info!("Generated sprite-sheet '{}'", image_path.display());

    let style_path = stylesheet_path(&opts.styles_dir, &sheet.name, opts.format);
    write_stylesheet(&sheet.stylesheet, &style_path)?;
    info!("Generated stylesheet '{}'", style_path.display());

    Ok(vec![image_path, style_path])
}

/// Generate and write one folder, recording the outcome.
#[tracing::instrument(skip(folder, opts), fields(folder = %folder.display()))]
pub fn run_folder(folder: &Path, opts: &GenerateOptions) -> SheetResult {
    let start = Instant::now();
    let name = folder_name(folder);

    let failed = |e: SpriteError| {
        error!("{}", e);
        SheetResult::failed(name.clone(), e.to_string(), start.elapsed())
    };

    match generate_folder(folder, opts) {
        Ok(FolderOutcome::Generated(sheet)) => match write_outputs(&sheet, opts) {
            Ok(outputs) => SheetResult::generated(name.clone(), outputs, start.elapsed())
                .with_warnings(sheet.warnings.iter().map(|w| w.to_string()).collect()),
            Err(e) => failed(e),
        },
        Ok(FolderOutcome::Skipped(reason)) => SheetResult::skipped(name.clone(), reason.to_string()),
        Err(e) => failed(e),
    }
}

/// Generate a single sheet from one sprite folder.
pub fn generate_one(folder: &Path, opts: &GenerateOptions) -> GenerateReport {
    let start = Instant::now();
    let mut report = GenerateReport::new();
    report.add_result(run_folder(folder, opts));
    report.with_duration(start.elapsed())
}

/// Generate one sheet per subfolder of `root`, in parallel.
///
/// A failing folder does not stop the others; its failure is recorded in the
/// report.
pub fn generate_all(root: &Path, opts: &GenerateOptions) -> Result<GenerateReport, SpriteError> {
    let start = Instant::now();
    let folders = list_sprite_folders(root)?;

    let results: Vec<SheetResult> = folders.par_iter().map(|f| run_folder(f, opts)).collect();

    let mut report = GenerateReport::new();
    for result in results {
        report.add_result(result);
    }
    Ok(report.with_duration(start.elapsed()))
}
