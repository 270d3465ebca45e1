//! Infrastructure layer for the plugin.
//!
//! Contains the file-facing adapters: the config file loader and the
//! in-memory host used outside of a live server.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `tweaks_core`, but MUST NOT be imported by the domain types.

pub mod host;
pub mod storage;
