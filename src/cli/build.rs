//! Generation command implementations (build, sheet)

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use super::{OutputArgs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::config::{find_config, load_config, merge_cli_overrides, CliOverrides, SpriteConfig};
use crate::generate::{generate_all, generate_one, GenerateOptions, GenerateReport};

/// Load the config file (explicit, discovered, or defaults) and apply CLI flags.
fn resolve_config(
    config_path: Option<&Path>,
    sprites: Option<PathBuf>,
    output: &OutputArgs,
) -> Result<SpriteConfig, ExitCode> {
    let path = config_path.map(Path::to_path_buf).or_else(find_config);
    match &path {
        Some(p) => debug!("Using config: {}", p.display()),
        None => debug!("No spritestack.toml found, using defaults"),
    }

    let mut config = match load_config(path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };

    let overrides = CliOverrides {
        sprites,
        sheets: output.sheets.clone(),
        styles: output.styles.clone(),
        uri: output.uri.clone(),
        scss: output.css.then_some(false),
        check_timestamps: output.force.then_some(false),
    };
    merge_cli_overrides(&mut config, &overrides);

    Ok(config)
}

fn finish(report: GenerateReport) -> ExitCode {
    if report.is_success() {
        println!("{}", report.summary());
        ExitCode::from(EXIT_SUCCESS)
    } else {
        eprintln!("{}", report.summary());
        ExitCode::from(EXIT_ERROR)
    }
}

/// Run the build command
pub fn run_build(config_path: Option<&Path>, sprites: Option<PathBuf>, output: &OutputArgs) -> ExitCode {
    let config = match resolve_config(config_path, sprites, output) {
        Ok(cfg) => cfg,
        Err(code) => return code,
    };
    let opts = GenerateOptions::from_config(&config);

    match generate_all(&config.sprites.folder, &opts) {
        Ok(report) => finish(report),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the sheet command
pub fn run_sheet(folder: &Path, config_path: Option<&Path>, output: &OutputArgs) -> ExitCode {
    let config = match resolve_config(config_path, None, output) {
        Ok(cfg) => cfg,
        Err(code) => return code,
    };
    let opts = GenerateOptions::from_config(&config);

    finish(generate_one(folder, &opts))
}
