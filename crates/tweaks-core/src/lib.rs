//! # tweaks-core
//!
//! Shared types for the Bela Tweaks server plugin.
//!
//! - **`domain::config`** – the [`TweaksConfig`] record, its defaults, and the
//!   commented template document written to `config.jsonc`.
//! - **`domain::tables`** – the parts of the server database the plugin edits:
//!   globals, locations, items, and the core config.
//! - **`domain::metadata`** – plugin identity reported to the mod loader.
//! - **`jsonc`** – `//` comment stripping so the config can be parsed as JSON.
//!
//! The crate has no file-system or logging dependencies.

pub mod domain;
pub mod jsonc;

pub use domain::config::{config_keys, render_template, TweaksConfig};
pub use domain::metadata::{ModMetadata, LOG_PREFIX, MOD_METADATA};
pub use domain::tables::{
    CoreConfig, Globals, GlobalsConfig, Item, ItemProps, Items, Location, LocationBase,
    Locations, AMMO_PARENT_ID,
};
pub use jsonc::strip_line_comments;
