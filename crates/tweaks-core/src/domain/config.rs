//! The plugin configuration record and its commented template document.
//!
//! The file on disk is JSON with `//` line comments (`config.jsonc`).  Keys use
//! the PascalCase names the server community already knows from other mods,
//! so the serde attributes map them explicitly onto snake_case fields.
//!
//! # Serde default values
//!
//! The struct carries `#[serde(default)]`, so any key missing from the file is
//! filled in from [`TweaksConfig::default()`].  An old config file written
//! before a field existed keeps working and simply picks up the new default.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Configuration for a single server start.
///
/// Built once by the loader and only ever borrowed immutably afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TweaksConfig {
    #[serde(rename = "RemoveModItemsFromProfile")]
    pub remove_mod_items_from_profile: bool,
    #[serde(rename = "RemoveInvalidTradersFromProfile")]
    pub remove_invalid_traders_from_profile: bool,
    #[serde(rename = "FixProfileBreakingInventoryItemIssues")]
    pub fix_profile_breaking_inventory_item_issues: bool,
    /// Gates the two load-time overrides below.
    #[serde(rename = "EnableAmmoLoadTweaks")]
    pub enable_ammo_load_tweaks: bool,
    /// Seconds per round when loading a magazine.
    #[serde(rename = "BaseLoadTime")]
    pub base_load_time: f64,
    /// Seconds per round when unloading a magazine.
    #[serde(rename = "BaseUnLoadTime")]
    pub base_unload_time: f64,
    /// Raid length in minutes, applied to every location.
    #[serde(rename = "RaidTimeMinutes")]
    pub raid_time_minutes: i32,
    /// Ammo stack size multiplier.  Values of 1 or less leave stacks untouched.
    #[serde(rename = "AmmoStackMultiplier")]
    pub ammo_stack_multiplier: i32,
}

impl Default for TweaksConfig {
    fn default() -> Self {
        Self {
            remove_mod_items_from_profile: false,
            remove_invalid_traders_from_profile: false,
            fix_profile_breaking_inventory_item_issues: false,
            enable_ammo_load_tweaks: true,
            base_load_time: 0.05,
            base_unload_time: 0.05,
            raid_time_minutes: 120,
            ammo_stack_multiplier: 6,
        }
    }
}

impl TweaksConfig {
    /// Returns `true` when ammo stacks should be scaled at all.
    pub fn scales_ammo_stacks(&self) -> bool {
        self.ammo_stack_multiplier > 1
    }
}

// ── Template document ─────────────────────────────────────────────────────────

/// One key of the template: its JSON name, the comment written above it, and
/// the value rendered from a [`TweaksConfig`].
struct TemplateEntry {
    key: &'static str,
    comment: &'static str,
    value: String,
}

fn template_entries(config: &TweaksConfig) -> [TemplateEntry; 8] {
    [
        TemplateEntry {
            key: "RemoveModItemsFromProfile",
            comment: "Remove items that belong to uninstalled mods from player profiles on server start (true/false).",
            value: config.remove_mod_items_from_profile.to_string(),
        },
        TemplateEntry {
            key: "RemoveInvalidTradersFromProfile",
            comment: "Remove traders that no longer exist from player profiles on server start (true/false).",
            value: config.remove_invalid_traders_from_profile.to_string(),
        },
        TemplateEntry {
            key: "FixProfileBreakingInventoryItemIssues",
            comment: "Let the server repair inventory items that would otherwise break a profile (true/false).",
            value: config.fix_profile_breaking_inventory_item_issues.to_string(),
        },
        TemplateEntry {
            key: "EnableAmmoLoadTweaks",
            comment: "Apply BaseLoadTime and BaseUnLoadTime below (true/false).",
            value: config.enable_ammo_load_tweaks.to_string(),
        },
        TemplateEntry {
            key: "BaseLoadTime",
            comment: "Time to load one round into a magazine, in seconds.",
            value: format_float(config.base_load_time),
        },
        TemplateEntry {
            key: "BaseUnLoadTime",
            comment: "Time to unload one round from a magazine, in seconds.",
            value: format_float(config.base_unload_time),
        },
        TemplateEntry {
            key: "RaidTimeMinutes",
            comment: "Raid duration for every location, in minutes.",
            value: config.raid_time_minutes.to_string(),
        },
        TemplateEntry {
            key: "AmmoStackMultiplier",
            comment: "Multiplier for the maximum stack size of every ammo item. 1 or less keeps the original stacks.",
            value: config.ammo_stack_multiplier.to_string(),
        },
    ]
}

/// Header lines written above the opening brace of the template.
const TEMPLATE_HEADER: [&str; 3] = [
    "Bela Tweaks configuration.",
    "Only // line comments are supported. A file containing /* */ block comments",
    "is treated as invalid and replaced with this default template on the next start.",
];

/// Renders a float so it always reads back as a JSON number.
fn format_float(value: f64) -> String {
    if value.is_finite() {
        format!("{value:?}")
    } else {
        "0.0".to_string()
    }
}

/// Renders the commented JSON document for `config`.
///
/// The document opens with a header noting that only `//` comments are
/// understood.  Every key is preceded by a `//` comment describing its effect
/// and unit.
///
/// The loader writes `render_template(&TweaksConfig::default())` whenever the
/// file is missing or unreadable.
pub fn render_template(config: &TweaksConfig) -> String {
    let entries = template_entries(config);
    let last = entries.len() - 1;

    // Writing into a String cannot fail.
    let mut out = String::new();
    for line in TEMPLATE_HEADER {
        let _ = writeln!(out, "// {line}");
    }
    out.push_str("{\n");
    for (i, entry) in entries.iter().enumerate() {
        let separator = if i == last { "" } else { "," };
        let _ = writeln!(out, "  // {}", entry.comment);
        let _ = writeln!(out, "  \"{}\": {}{}", entry.key, entry.value, separator);
        if i != last {
            out.push('\n');
        }
    }
    out.push_str("}\n");
    out
}

/// JSON keys of every configuration field, in template order.
pub fn config_keys() -> Vec<&'static str> {
    template_entries(&TweaksConfig::default())
        .iter()
        .map(|e| e.key)
        .collect()
}
