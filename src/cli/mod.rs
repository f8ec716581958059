//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod build;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// spritestack - Stack sprite images into sprite sheets with CSS/SCSS
#[derive(Parser)]
#[command(name = "spritestack")]
#[command(about = "Stack folders of sprite images into sprite sheets and generate CSS/SCSS for them")]
#[command(version)]
pub struct Cli {
    /// Show debug output (ignored files, per-folder decisions)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one sprite sheet per subfolder of the sprites folder
    Build {
        /// Path to spritestack.toml (default: search upward from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Folder containing one subfolder of sprites per sheet
        #[arg(long)]
        sprites: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a single sprite sheet from one folder of sprites
    Sheet {
        /// Folder of sprite images; the sheet is named after it
        folder: PathBuf,

        /// Path to spritestack.toml (default: search upward from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Output flags shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Folder to write sprite sheet images to
    #[arg(long)]
    pub sheets: Option<PathBuf>,

    /// Folder to write stylesheets to
    #[arg(long)]
    pub styles: Option<PathBuf>,

    /// URL prefix of the sheet images in generated stylesheets
    #[arg(long)]
    pub uri: Option<String>,

    /// Generate plain CSS classes instead of SCSS variables, mixins and classes
    #[arg(long)]
    pub css: bool,

    /// Regenerate even when sheets are newer than their sprites
    #[arg(long)]
    pub force: bool,
}

/// Install the log subscriber.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // A second initialisation only happens in tests; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Build { config, sprites, output } => {
            build::run_build(config.as_deref(), sprites, &output)
        }
        Commands::Sheet { folder, config, output } => {
            build::run_sheet(&folder, config.as_deref(), &output)
        }
    }
}
