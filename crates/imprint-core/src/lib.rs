//! Core types for the Imprint bootstrap tool.
//!
//! Configuration is loaded once from `imprint.toml`, has its placeholder
//! tokens resolved over the whole document, and is then read through typed
//! section views. Nothing in this crate touches the repository being
//! bootstrapped; that is the operations crate's job.

pub mod config;
pub mod placeholder;

pub use config::{Config, Section, CONFIG_FILE};
