//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.waypoint/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading runs before the logger exists, so nothing here logs directly.
//! What happened is returned as [`ConfigNote`]s and `main` logs them once
//! the file logger is up.

use log::{info, warn};
use serde::Deserialize;
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct WaypointConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub notices: NoticeConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginConfig {
    /// Prefilled into the email field when the Login screen mounts.
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NoticeConfig {
    pub enabled: Option<bool>,
    pub duration_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "waypoint.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 2000;

// ============================================================================
// CLI Overrides
// ============================================================================

/// Values taken from command-line flags. `None` means the flag was not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub email: Option<String>,
    pub log_file: Option<String>,
    pub no_notices: bool,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub prefill_email: Option<String>,
    pub notices_enabled: bool,
    pub notice_duration: Duration,
    /// Anything resolution had to fall back on
    pub notes: Vec<ConfigNote>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            prefill_email: None,
            notices_enabled: true,
            notice_duration: Duration::from_millis(DEFAULT_NOTICE_DURATION_MS),
            notes: Vec::new(),
        }
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
// Notes (logged after the logger is initialized)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigNote {
    Loaded(PathBuf),
    Generated(PathBuf),
    GenerateFailed { path: PathBuf, reason: String },
    NoHomeDir,
    UnknownLogLevel(String),
}

impl ConfigNote {
    pub fn log(&self) {
        match self {
            ConfigNote::Loaded(path) => info!("Loaded config from {}", path.display()),
            ConfigNote::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigNote::GenerateFailed { path, reason } => {
                warn!("Failed to write default config to {}: {}", path.display(), reason)
            }
            ConfigNote::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
            ConfigNote::UnknownLogLevel(name) => {
                warn!("Unknown log level '{}', using {}", name, DEFAULT_LOG_LEVEL)
            }
        }
    }
}

/// A parsed config file and the notes from finding it.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: WaypointConfig,
    pub notes: Vec<ConfigNote>,
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.waypoint/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".waypoint").join("config.toml"))
}

/// Load config from `override_path`, or `~/.waypoint/config.toml` when `None`.
///
/// A missing default file is generated (commented out) and yields
/// `WaypointConfig::default()`. An explicitly given path that doesn't exist
/// is an I/O error. A malformed file is `ConfigError::Parse`.
pub fn load_config(override_path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = override_path {
        return load_from(path);
    }

    match config_path() {
        Some(path) => load_or_generate(&path),
        None => Ok(LoadedConfig {
            config: WaypointConfig::default(),
            notes: vec![ConfigNote::NoHomeDir],
        }),
    }
}

fn load_or_generate(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if path.exists() {
        return load_from(path);
    }

    let note = match generate_default_config(path) {
        Ok(()) => ConfigNote::Generated(path.to_path_buf()),
        Err(e) => ConfigNote::GenerateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    };
    Ok(LoadedConfig {
        config: WaypointConfig::default(),
        notes: vec![note],
    })
}

fn load_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WaypointConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok(LoadedConfig {
        config,
        notes: vec![ConfigNote::Loaded(path.to_path_buf())],
    })
}

const DEFAULT_CONFIG_TOML: &str = r#"# Waypoint Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "waypoint.log"          # Or set WAYPOINT_LOG_FILE

# [login]
# email = "user@example.com"         # Prefill for the email field

# [notices]
# enabled = true                     # Or set WAYPOINT_NOTICES=0
# duration_ms = 2000
"#;

/// Writes the commented-out default config, creating parent directories.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG_TOML)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WaypointConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &WaypointConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut notes = Vec::new();

    // Log level: env → config → default. Unknown names fall back to default.
    let log_level = match env("WAYPOINT_LOG_LEVEL").or_else(|| config.general.log_level.clone()) {
        Some(name) => match LevelFilter::from_str(&name) {
            Ok(level) => level,
            Err(_) => {
                notes.push(ConfigNote::UnknownLogLevel(name));
                DEFAULT_LOG_LEVEL
            }
        },
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("WAYPOINT_LOG_FILE"))
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Prefill email: CLI → env → config
    let prefill_email = cli
        .email
        .clone()
        .or_else(|| env("WAYPOINT_EMAIL"))
        .or_else(|| config.login.email.clone());

    // Notices: CLI switch wins, then env, then config
    let notices_enabled = if cli.no_notices {
        false
    } else {
        env("WAYPOINT_NOTICES")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .or(config.notices.enabled)
            .unwrap_or(true)
    };

    let notice_duration = Duration::from_millis(
        config
            .notices
            .duration_ms
            .unwrap_or(DEFAULT_NOTICE_DURATION_MS),
    );

    ResolvedConfig {
        log_level,
        log_file: PathBuf::from(log_file),
        prefill_email,
        notices_enabled,
        notice_duration,
        notes,
    }
}
