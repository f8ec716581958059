//! spritestack - Library for stacking sprites into sprite sheets
//!
//! This library provides functionality to:
//! - Parse `@2x`-style magnification suffixes from sprite names
//! - Lay out sprites in a single column with gutters for magnified sprites
//! - Project sheet pixels back to logical CSS pixels
//! - Compose the sheet image and generate CSS classes, SCSS variables and mixins
//! - Read sprite folders, skip up-to-date sheets and write the results

pub mod cli;
pub mod composite;
pub mod config;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod layout;
pub mod magnification;
pub mod output;
pub mod project;
pub mod staleness;
pub mod stylesheet;

pub use error::SpriteError;
pub use layout::{layout, NamedImage, Placement, SheetLayout};
pub use magnification::{parse_sprite_name, Magnification};
pub use project::{project, LogicalRect};
