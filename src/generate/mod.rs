//! Generation pipeline for spritestack
//!
//! Turns sprite folders into sheet images and stylesheets:
//! - **Discovery**: read each folder's images in file-name order
//! - **Staleness**: skip sheets that are newer than their sprites
//! - **Layout + compositing**: stack the sprites into one image
//! - **Output**: write `NAME.png` and `NAME.scss` / `NAME.css`
//!
//! # Example
//!
//! ```ignore
//! use spritestack::config::load_config;
//! use spritestack::generate::{generate_all, GenerateOptions};
//!
//! let config = load_config(None)?;
//! let opts = GenerateOptions::from_config(&config);
//! let report = generate_all(&config.sprites.folder, &opts)?;
//! println!("{}", report.summary());
//! ```

pub mod pipeline;
pub mod result;

pub use pipeline::*;
pub use result::*;
