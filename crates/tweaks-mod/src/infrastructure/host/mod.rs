//! Host infrastructure: an owned copy of the server tables.
//!
//! Inside the live server the tables belong to its database service.  Outside
//! of it (tests, the offline runner) [`InMemoryHost`] owns them instead and
//! implements the same [`ServerHost`] port.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tweaks_core::{CoreConfig, Globals, Items, Locations};

use crate::application::host::ServerHost;

pub mod snapshot;

/// A [`ServerHost`] holding its tables in memory.
///
/// The serde shape doubles as the database snapshot file format.  Top-level
/// keys other than the four tables are carried along in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InMemoryHost {
    #[serde(default)]
    pub globals: Globals,
    #[serde(default)]
    pub locations: Locations,
    #[serde(default)]
    pub items: Items,
    #[serde(rename = "coreConfig", default)]
    pub core_config: CoreConfig,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InMemoryHost {
    /// Creates a host with empty tables and default globals.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ServerHost for InMemoryHost {
    fn globals_mut(&mut self) -> &mut Globals {
        &mut self.globals
    }

    fn locations_mut(&mut self) -> &mut Locations {
        &mut self.locations
    }

    fn items_mut(&mut self) -> &mut Items {
        &mut self.items
    }

    fn core_config_mut(&mut self) -> &mut CoreConfig {
        &mut self.core_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tweaks_core::{Item, ItemProps};

    #[test]
    fn test_in_memory_host_exposes_its_own_tables() {
        // Arrange
        let mut host = InMemoryHost::new();

        // Act
        host.items_mut().insert(
            "a".to_string(),
            Item {
                id: "a".to_string(),
                props: ItemProps {
                    stack_max_size: 1,
                    ..ItemProps::default()
                },
                ..Item::default()
            },
        );
        host.core_config_mut().remove_mod_items_from_profile = true;
        host.globals_mut().config.base_load_time = 0.1;

        // Assert
        assert_eq!(host.items.len(), 1);
        assert!(host.core_config.remove_mod_items_from_profile);
        assert_eq!(host.globals.config.base_load_time, 0.1);
        assert!(host.locations_mut().is_empty());
    }

    #[test]
    fn test_in_memory_host_deserializes_with_missing_tables() {
        let host: InMemoryHost = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(host, InMemoryHost::default());
    }
}
