//! Ports the plugin needs from the server it runs inside.
//!
//! The server owns the database and the mod directory.  The use cases only see
//! these two traits, so tests can hand in an in-memory host and a mocked
//! locator instead of a live server.

use std::path::PathBuf;

use tweaks_core::{CoreConfig, Globals, Items, Locations};

/// Mutable access to the server tables the plugin edits.
pub trait ServerHost {
    /// Global settings.
    fn globals_mut(&mut self) -> &mut Globals;
    /// All locations, keyed by table name.
    fn locations_mut(&mut self) -> &mut Locations;
    /// All item templates, keyed by template id.
    fn items_mut(&mut self) -> &mut Items;
    /// Core server config holding the profile-repair switches.
    fn core_config_mut(&mut self) -> &mut CoreConfig;
}

/// Resolves the directory the plugin was installed into.
#[cfg_attr(test, mockall::automock)]
pub trait ModLocator {
    fn mod_dir(&self) -> PathBuf;
}

/// A [`ModLocator`] for a directory known up front.
#[derive(Debug, Clone)]
pub struct FixedModDir(pub PathBuf);

impl ModLocator for FixedModDir {
    fn mod_dir(&self) -> PathBuf {
        self.0.clone()
    }
}
