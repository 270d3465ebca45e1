//! The slice of the server's in-memory database this plugin touches.
//!
//! Only the fields the plugin reads or writes are modelled.  The serde names
//! follow the server's own JSON so a database snapshot can be read directly.
//! Every struct keeps the keys it does not model in a flattened `extra` map,
//! so writing a table back reproduces everything the plugin did not touch.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parent template id shared by every ammo item in the items table.
pub const AMMO_PARENT_ID: &str = "5485a8684bdc2da71d8b4567";

/// Global settings (`globals.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Globals {
    #[serde(default)]
    pub config: GlobalsConfig,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `config` block of the global settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalsConfig {
    /// Seconds per round when loading a magazine.
    #[serde(rename = "BaseLoadTime")]
    pub base_load_time: f64,
    /// Seconds per round when unloading a magazine.
    #[serde(rename = "BaseUnloadTime")]
    pub base_unload_time: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for GlobalsConfig {
    fn default() -> Self {
        Self {
            base_load_time: 0.85,
            base_unload_time: 0.3,
            extra: Map::new(),
        }
    }
}

/// One entry of the locations table.  Some entries (loot tables, base
/// metadata) carry no `base` and are not maps in the raid sense.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<LocationBase>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Time limits of a raid location, all in minutes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationBase {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "exit_access_time", default)]
    pub exit_access_time: i32,
    #[serde(rename = "EscapeTimeLimit", default)]
    pub escape_time_limit: i32,
    #[serde(rename = "EscapeTimeLimitCoop", default)]
    pub escape_time_limit_coop: i32,
    #[serde(rename = "EscapeTimeLimitPVE", default)]
    pub escape_time_limit_pve: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocationBase {
    /// Sets every raid time limit to `minutes`.
    pub fn set_raid_time(&mut self, minutes: i32) {
        self.exit_access_time = minutes;
        self.escape_time_limit = minutes;
        self.escape_time_limit_coop = minutes;
        self.escape_time_limit_pve = minutes;
    }
}

/// One item template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_parent", default)]
    pub parent: String,
    #[serde(rename = "_props", default)]
    pub props: ItemProps,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Returns `true` for ammo templates.
    pub fn is_ammo(&self) -> bool {
        self.parent == AMMO_PARENT_ID
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemProps {
    #[serde(rename = "StackMaxSize", default)]
    pub stack_max_size: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Profile-repair switches from the server's core config.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    #[serde(rename = "removeModItemsFromProfile", default)]
    pub remove_mod_items_from_profile: bool,
    #[serde(rename = "removeInvalidTradersFromProfile", default)]
    pub remove_invalid_traders_from_profile: bool,
    #[serde(rename = "fixProfileBreakingInventoryItemIssues", default)]
    pub fix_profile_breaking_inventory_item_issues: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Locations keyed by their table name (`bigmap`, `woods`, ...).
pub type Locations = BTreeMap<String, Location>;

/// Item templates keyed by template id.
pub type Items = HashMap<String, Item>;
