//! Configuration module for spritestack
//!
//! Provides types and parsing for `spritestack.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
