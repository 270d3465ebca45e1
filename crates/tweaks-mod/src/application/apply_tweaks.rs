//! ApplyTweaksUseCase: the plugin's on-load sequence.
//!
//! [`TweaksPlugin::on_load`] runs once when the server has finished loading its
//! database.  It loads `config.jsonc` from the mod directory and hands the
//! result to [`apply_tweaks`], which edits the host tables in place:
//!
//! 1. copies the three profile-repair switches into the core config,
//! 2. overrides magazine load/unload times when `EnableAmmoLoadTweaks` is set,
//! 3. sets every raid time limit of every location to `RaidTimeMinutes`,
//! 4. scales the stack size of every ammo item when `AmmoStackMultiplier > 1`.

use tracing::{debug, info};
use tweaks_core::{TweaksConfig, LOG_PREFIX};

use crate::application::host::{ModLocator, ServerHost};
use crate::infrastructure::storage::config::{config_file_path, load_config, ConfigSource};

/// What a single [`apply_tweaks`] call changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TweakCounts {
    pub load_times_applied: bool,
    pub locations_updated: usize,
    /// Locations without a raid `base`, left untouched.
    pub locations_skipped: usize,
    pub ammo_items_scaled: usize,
}

/// Outcome of [`TweaksPlugin::on_load`].
#[derive(Debug, Clone, PartialEq)]
pub struct TweakReport {
    pub config: TweaksConfig,
    pub source: ConfigSource,
    pub counts: TweakCounts,
}

/// The plugin entry point.
pub struct TweaksPlugin<L: ModLocator> {
    locator: L,
}

impl<L: ModLocator> TweaksPlugin<L> {
    pub fn new(locator: L) -> Self {
        Self { locator }
    }

    /// Loads the config and applies it to `host`.
    ///
    /// Never fails: a missing or broken config file falls back to defaults.
    pub fn on_load(&self, host: &mut dyn ServerHost) -> TweakReport {
        info!("{LOG_PREFIX}: loading...");

        let path = config_file_path(&self.locator.mod_dir());
        let loaded = load_config(&path);
        let counts = apply_tweaks(&loaded.config, host);

        info!("{LOG_PREFIX}: Done!");

        TweakReport {
            config: loaded.config,
            source: loaded.source,
            counts,
        }
    }
}

/// Applies `config` to the host tables.
pub fn apply_tweaks(config: &TweaksConfig, host: &mut dyn ServerHost) -> TweakCounts {
    apply_profile_flags(config, host);
    let load_times_applied = apply_load_times(config, host);
    let (locations_updated, locations_skipped) = apply_raid_time(config, host);
    let ammo_items_scaled = apply_ammo_stack_multiplier(config, host);

    TweakCounts {
        load_times_applied,
        locations_updated,
        locations_skipped,
        ammo_items_scaled,
    }
}

/// Copies the profile-repair switches.  Always applied.
fn apply_profile_flags(config: &TweaksConfig, host: &mut dyn ServerHost) {
    let core = host.core_config_mut();
    core.remove_mod_items_from_profile = config.remove_mod_items_from_profile;
    core.remove_invalid_traders_from_profile = config.remove_invalid_traders_from_profile;
    core.fix_profile_breaking_inventory_item_issues =
        config.fix_profile_breaking_inventory_item_issues;
    debug!(
        "{LOG_PREFIX}: profile repair flags set (mod items: {}, traders: {}, inventory: {})",
        config.remove_mod_items_from_profile,
        config.remove_invalid_traders_from_profile,
        config.fix_profile_breaking_inventory_item_issues
    );
}

fn apply_load_times(config: &TweaksConfig, host: &mut dyn ServerHost) -> bool {
    if !config.enable_ammo_load_tweaks {
        return false;
    }

    let globals = &mut host.globals_mut().config;
    globals.base_load_time = config.base_load_time;
    globals.base_unload_time = config.base_unload_time;
    info!(
        "{LOG_PREFIX}: BaseLoadTime = {} seconds, BaseUnloadTime = {} seconds",
        config.base_load_time, config.base_unload_time
    );
    true
}

/// Returns `(updated, skipped)` location counts.
fn apply_raid_time(config: &TweaksConfig, host: &mut dyn ServerHost) -> (usize, usize) {
    let minutes = config.raid_time_minutes;
    let mut updated = 0;
    let mut skipped = 0;

    for location in host.locations_mut().values_mut() {
        match location.base.as_mut() {
            Some(base) => {
                base.set_raid_time(minutes);
                info!("{LOG_PREFIX}: {} EscapeTimeLimit set to {minutes}", base.id);
                updated += 1;
            }
            None => skipped += 1,
        }
    }

    (updated, skipped)
}

fn apply_ammo_stack_multiplier(config: &TweaksConfig, host: &mut dyn ServerHost) -> usize {
    if !config.scales_ammo_stacks() {
        return 0;
    }

    let multiplier = i64::from(config.ammo_stack_multiplier);
    let mut scaled = 0;
    for item in host.items_mut().values_mut().filter(|item| item.is_ammo()) {
        item.props.stack_max_size = item.props.stack_max_size.saturating_mul(multiplier);
        scaled += 1;
    }

    info!(
        "{LOG_PREFIX}: The bullet stack has been adjusted by {} times",
        config.ammo_stack_multiplier
    );
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::host::MockModLocator;
    use crate::infrastructure::host::InMemoryHost;
    use std::path::PathBuf;
    use tweaks_core::{Item, ItemProps, Location, LocationBase, AMMO_PARENT_ID};
    use uuid::Uuid;

    fn make_item(id: &str, parent: &str, stack: i64) -> Item {
        Item {
            id: id.to_string(),
            parent: parent.to_string(),
            props: ItemProps {
                stack_max_size: stack,
                ..ItemProps::default()
            },
            ..Item::default()
        }
    }

    fn make_location(id: &str, minutes: i32) -> Location {
        Location {
            base: Some(LocationBase {
                id: id.to_string(),
                exit_access_time: minutes,
                escape_time_limit: minutes,
                escape_time_limit_coop: minutes,
                escape_time_limit_pve: minutes,
                ..LocationBase::default()
            }),
            ..Location::default()
        }
    }

    fn make_host() -> InMemoryHost {
        let mut host = InMemoryHost::new();
        host.locations
            .insert("bigmap".to_string(), make_location("bigmap", 40));
        host.locations
            .insert("woods".to_string(), make_location("woods", 45));
        host.locations
            .insert("base".to_string(), Location::default());
        host.items.insert(
            "ammo".to_string(),
            make_item("ammo", AMMO_PARENT_ID, 60),
        );
        host.items.insert(
            "rifle".to_string(),
            make_item("rifle", "5447b5f14bdc2d61278b4567", 1),
        );
        host
    }

    #[test]
    fn test_apply_copies_profile_flags_both_ways() {
        // Arrange
        let mut host = make_host();
        host.core_config.remove_mod_items_from_profile = true;
        let cfg = TweaksConfig {
            remove_invalid_traders_from_profile: true,
            ..TweaksConfig::default()
        };

        // Act
        apply_tweaks(&cfg, &mut host);

        // Assert
        assert!(!host.core_config.remove_mod_items_from_profile);
        assert!(host.core_config.remove_invalid_traders_from_profile);
        assert!(!host.core_config.fix_profile_breaking_inventory_item_issues);
    }

    #[test]
    fn test_apply_sets_load_times_from_config_when_enabled() {
        let mut host = make_host();
        let cfg = TweaksConfig {
            base_load_time: 0.1,
            base_unload_time: 0.2,
            ..TweaksConfig::default()
        };

        let counts = apply_tweaks(&cfg, &mut host);

        assert!(counts.load_times_applied);
        assert_eq!(host.globals.config.base_load_time, 0.1);
        assert_eq!(host.globals.config.base_unload_time, 0.2);
    }

    #[test]
    fn test_apply_leaves_load_times_when_disabled() {
        // Arrange
        let mut host = make_host();
        let before = host.globals.clone();
        let cfg = TweaksConfig {
            enable_ammo_load_tweaks: false,
            ..TweaksConfig::default()
        };

        // Act
        let counts = apply_tweaks(&cfg, &mut host);

        // Assert
        assert!(!counts.load_times_applied);
        assert_eq!(host.globals, before);
    }

    #[test]
    fn test_apply_sets_raid_time_and_skips_locations_without_base() {
        let mut host = make_host();
        let cfg = TweaksConfig {
            raid_time_minutes: 75,
            ..TweaksConfig::default()
        };

        let counts = apply_tweaks(&cfg, &mut host);

        assert_eq!(counts.locations_updated, 2);
        assert_eq!(counts.locations_skipped, 1);
        for key in ["bigmap", "woods"] {
            let base = host.locations[key].base.as_ref().unwrap();
            assert_eq!(base.exit_access_time, 75);
            assert_eq!(base.escape_time_limit, 75);
            assert_eq!(base.escape_time_limit_coop, 75);
            assert_eq!(base.escape_time_limit_pve, 75);
        }
        assert!(host.locations["base"].base.is_none());
    }

    #[test]
    fn test_apply_scales_only_ammo_items() {
        let mut host = make_host();

        let counts = apply_tweaks(&TweaksConfig::default(), &mut host);

        assert_eq!(counts.ammo_items_scaled, 1);
        assert_eq!(host.items["ammo"].props.stack_max_size, 360);
        assert_eq!(host.items["rifle"].props.stack_max_size, 1);
    }

    #[test]
    fn test_apply_multiplier_of_one_or_less_is_a_no_op() {
        for multiplier in [1, 0, -2] {
            let mut host = make_host();
            let before = host.items.clone();
            let cfg = TweaksConfig {
                ammo_stack_multiplier: multiplier,
                ..TweaksConfig::default()
            };

            let counts = apply_tweaks(&cfg, &mut host);

            assert_eq!(counts.ammo_items_scaled, 0, "multiplier {multiplier}");
            assert_eq!(host.items, before, "multiplier {multiplier}");
        }
    }

    #[test]
    fn test_apply_stack_multiplication_saturates() {
        let mut host = InMemoryHost::new();
        host.items.insert(
            "huge".to_string(),
            make_item("huge", AMMO_PARENT_ID, i64::MAX / 2),
        );

        apply_tweaks(&TweaksConfig::default(), &mut host);

        assert_eq!(host.items["huge"].props.stack_max_size, i64::MAX);
    }

    #[test]
    fn test_on_load_resolves_config_through_locator() {
        // Arrange
        let dir: PathBuf = std::env::temp_dir().join(format!("bela_plugin_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("config.jsonc"),
            "{\n  // short raids\n  \"RaidTimeMinutes\": 30,\n  \"AmmoStackMultiplier\": 2\n}\n",
        )
        .unwrap();

        let mut locator = MockModLocator::new();
        let mod_dir = dir.clone();
        locator
            .expect_mod_dir()
            .times(1)
            .returning(move || mod_dir.clone());
        let plugin = TweaksPlugin::new(locator);
        let mut host = make_host();

        // Act
        let report = plugin.on_load(&mut host);

        // Assert
        assert_eq!(report.source, ConfigSource::File);
        assert_eq!(report.config.raid_time_minutes, 30);
        assert_eq!(report.counts.locations_updated, 2);
        assert_eq!(host.items["ammo"].props.stack_max_size, 120);

        std::fs::remove_dir_all(&dir).ok();
    }
}
