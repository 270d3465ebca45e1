//! Storage infrastructure: the plugin's config file.
//!
//! The `config` sub-module handles:
//!
//! - Reading `config.jsonc` from the mod directory.
//! - Filling in defaults for missing keys.
//! - Writing the commented template when the file is missing or broken.

pub mod config;
