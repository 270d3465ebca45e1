//! Application layer of the plugin.
//!
//! # Sub-modules
//!
//! - **`host`** – The ports the plugin needs from the server: table access
//!   ([`host::ServerHost`]) and the mod directory ([`host::ModLocator`]).
//!
//! - **`apply_tweaks`** – The on-load use case.  Loads the config and edits
//!   the host tables in place.  Use cases depend on the traits only, so tests
//!   run against an in-memory host.

pub mod apply_tweaks;
pub mod host;
