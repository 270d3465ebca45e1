//! Identity the plugin reports to the server's mod loader.

/// Static plugin metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModMetadata {
    pub guid: &'static str,
    pub name: &'static str,
    pub author: &'static str,
    pub version: &'static str,
    /// Semver range of server versions this build supports.
    pub server_version: &'static str,
    pub license: &'static str,
    pub is_bundle_mod: bool,
}

/// Metadata of this plugin.
pub const MOD_METADATA: ModMetadata = ModMetadata {
    guid: "com.sp-tarkov.Bela.Tweaks",
    name: "Tweaks",
    author: "Bela",
    version: "1.2.0",
    server_version: "~4.0.0",
    license: "AGPL-3.0",
    is_bundle_mod: false,
};

/// Prefix for every log line, so the plugin's output is easy to find in the
/// server console.
pub const LOG_PREFIX: &str = "[Bela Tweaks]";
