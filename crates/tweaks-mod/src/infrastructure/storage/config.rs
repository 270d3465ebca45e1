//! Loading `config.jsonc` from the mod directory.
//!
//! The loader never fails.  Whatever happens on disk, the server gets a
//! complete [`TweaksConfig`] back:
//!
//! | File state          | Result                    | Side effect                  |
//! |---------------------|---------------------------|------------------------------|
//! | valid               | parsed values + defaults  | none                         |
//! | missing             | defaults                  | template written (`warn!`)   |
//! | unreadable / broken | defaults                  | template rewritten (`error!`)|
//!
//! Template writes are best-effort: a read-only mod folder only costs a log
//! line, never the server start.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, warn};
use tweaks_core::{render_template, strip_line_comments, TweaksConfig, LOG_PREFIX};

/// File name of the config inside the mod directory.
pub const CONFIG_FILE_NAME: &str = "config.jsonc";

/// Error type for the individual file operations of the loader.
///
/// These never leave [`load_config`]; they only decide which fallback runs
/// and what gets logged.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON after comment stripping.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the values of a [`LoadedConfig`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from the existing file.
    File,
    /// The file did not exist; defaults were used and a template written.
    CreatedDefault,
    /// The file could not be read or parsed; defaults were used and the file
    /// replaced with a fresh template.
    RecoveredFromInvalid,
}

/// Result of [`load_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: TweaksConfig,
    pub source: ConfigSource,
}

/// Resolves the config path for a mod directory.
pub fn config_file_path(mod_dir: &Path) -> PathBuf {
    mod_dir.join(CONFIG_FILE_NAME)
}

/// Loads the config at `path`, falling back to defaults on any failure.
///
/// Performs at most one write: the template, when the file is missing or
/// invalid.
pub fn load_config(path: &Path) -> LoadedConfig {
    match read_config(path) {
        Ok(Some(config)) => {
            debug!("{LOG_PREFIX} loaded config from {}", path.display());
            LoadedConfig {
                config,
                source: ConfigSource::File,
            }
        }
        Ok(None) => {
            warn!(
                "{LOG_PREFIX} {} not found, using defaults and writing a template",
                path.display()
            );
            write_template_best_effort(path);
            LoadedConfig {
                config: TweaksConfig::default(),
                source: ConfigSource::CreatedDefault,
            }
        }
        Err(e) => {
            error!("{LOG_PREFIX} {e}; using defaults and regenerating the file");
            write_template_best_effort(path);
            LoadedConfig {
                config: TweaksConfig::default(),
                source: ConfigSource::RecoveredFromInvalid,
            }
        }
    }
}

/// Reads and parses `path`.  Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the document is malformed.
pub fn read_config(path: &Path) -> Result<Option<TweaksConfig>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

/// Parses a JSON-with-comments document.  Missing keys take their defaults.
pub fn parse_config(content: &str) -> Result<TweaksConfig, serde_json::Error> {
    serde_json::from_str(&strip_line_comments(content))
}

/// Writes the default template to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the directory or the file cannot be written.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    std::fs::write(path, render_template(&TweaksConfig::default())).map_err(|source| {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_template_best_effort(path: &Path) {
    match write_template(path) {
        Ok(()) => info!("{LOG_PREFIX} wrote default config to {}", path.display()),
        Err(e) => warn!("{LOG_PREFIX} could not write default config: {e}"),
    }
}
