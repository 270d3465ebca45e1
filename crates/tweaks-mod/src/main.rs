//! Offline runner for the Bela Tweaks plugin.
//!
//! Runs the same on-load sequence the server would, against a database
//! snapshot file instead of a live server, then writes the edited snapshot
//! back in place.
//!
//! ```text
//! tweaks-mod <mod-dir> <snapshot.json>
//!
//! main()
//!  └─ load_snapshot()          -- globals, locations, items, core config
//!  └─ TweaksPlugin::on_load()  -- loads <mod-dir>/config.jsonc, edits tables
//!  └─ save_snapshot()
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tweaks_core::{LOG_PREFIX, MOD_METADATA};
use tweaks_mod::application::apply_tweaks::TweaksPlugin;
use tweaks_mod::application::host::FixedModDir;
use tweaks_mod::infrastructure::host::snapshot::{load_snapshot, save_snapshot};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args_os().skip(1);
    let (Some(mod_dir), Some(snapshot_path)) = (args.next(), args.next()) else {
        bail!("usage: tweaks-mod <mod-dir> <snapshot.json>");
    };
    let mod_dir = PathBuf::from(mod_dir);
    let snapshot_path = PathBuf::from(snapshot_path);

    info!(
        "{LOG_PREFIX} {} {} by {} (server {})",
        MOD_METADATA.name, MOD_METADATA.version, MOD_METADATA.author, MOD_METADATA.server_version
    );
    info!(
        "{LOG_PREFIX} guid {}, license {}, bundle mod: {}",
        MOD_METADATA.guid, MOD_METADATA.license, MOD_METADATA.is_bundle_mod
    );

    let mut host = load_snapshot(&snapshot_path)
        .with_context(|| format!("loading snapshot {}", snapshot_path.display()))?;

    let plugin = TweaksPlugin::new(FixedModDir(mod_dir));
    let report = plugin.on_load(&mut host);
    info!(
        "{LOG_PREFIX} config source {:?}: {} locations updated, {} skipped, {} ammo items scaled",
        report.source,
        report.counts.locations_updated,
        report.counts.locations_skipped,
        report.counts.ammo_items_scaled
    );

    save_snapshot(&host, &snapshot_path)
        .with_context(|| format!("saving snapshot {}", snapshot_path.display()))?;

    Ok(())
}
