//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.fbrowse/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::listing::{FsLister, SortOrder};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FbrowseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub show_hidden: Option<bool>,
    pub directories_first: Option<bool>,
    pub log_level: Option<String>,
}

/// Values taken from CLI flags. `None` means the flag was not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub show_hidden: Option<bool>,
    pub directories_first: Option<bool>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SHOW_HIDDEN: bool = true;
pub const DEFAULT_DIRECTORIES_FIRST: bool = false;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub show_hidden: bool,
    pub sort_order: SortOrder,
    pub log_level: LevelFilter,
}

impl ResolvedConfig {
    pub fn lister(&self) -> FsLister {
        FsLister::new(self.show_hidden, self.sort_order)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.fbrowse`, where the config and log file live.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".fbrowse"))
}

/// Returns the path to `~/.fbrowse/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `explicit` if given, else from `~/.fbrowse/config.toml`.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an error. A malformed file is `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<FbrowseConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FbrowseConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FbrowseConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<FbrowseConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FbrowseConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# fbrowse Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# show_hidden = true          # List dotfiles (FBROWSE_SHOW_HIDDEN, --hidden/--no-hidden)
# directories_first = false   # Group directories above files (FBROWSE_DIRS_FIRST, --dirs-first)
# log_level = "info"          # "off", "error", "warn", "info", "debug", "trace" (FBROWSE_LOG)
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FbrowseConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &FbrowseConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Hidden files: CLI → env → config → default
    let show_hidden = cli
        .show_hidden
        .or_else(|| env("FBROWSE_SHOW_HIDDEN").and_then(|v| parse_bool(&v)))
        .or(config.general.show_hidden)
        .unwrap_or(DEFAULT_SHOW_HIDDEN);

    // Grouping: CLI → env → config → default
    let directories_first = cli
        .directories_first
        .or_else(|| env("FBROWSE_DIRS_FIRST").and_then(|v| parse_bool(&v)))
        .or(config.general.directories_first)
        .unwrap_or(DEFAULT_DIRECTORIES_FIRST);

    // Log level: CLI → env → config → default. Unknown names fall through.
    let log_level = [
        cli.log_level.clone(),
        env("FBROWSE_LOG"),
        config.general.log_level.clone(),
    ]
    .into_iter()
    .flatten()
    .find_map(|name| name.parse::<LevelFilter>().ok())
    .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        show_hidden,
        sort_order: if directories_first {
            SortOrder::DirectoriesFirst
        } else {
            SortOrder::Name
        },
        log_level,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
