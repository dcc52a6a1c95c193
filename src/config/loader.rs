//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Application directory name under the platform config/state dirs.
pub const APP_DIR: &str = "transcript-stepper";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "STEPPER_CONFIG";
/// Environment variable overriding the highlight theme.
pub const THEME_ENV: &str = "STEPPER_THEME";
/// Environment variable overriding the transcript location.
pub const TRANSCRIPT_ENV: &str = "STEPPER_TRANSCRIPT";

/// Transcript location used when nothing else is configured.
pub const DEFAULT_TRANSCRIPT: &str = "claude.jsonl";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/transcript-stepper/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Transcript location: path, URL, or `-` for stdin.
    #[serde(default)]
    pub transcript_path: Option<String>,

    /// Page title.
    #[serde(default)]
    pub page_title: Option<String>,

    /// Custom page shell containing `{{stepper}}`.
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    /// Highlight theme name (e.g., "base16-ocean-dark", "monokai").
    #[serde(default)]
    pub theme: Option<String>,

    /// Whether code blocks are syntax highlighted.
    #[serde(default)]
    pub highlight: Option<bool>,

    /// Pixels kept between viewport top and content after a step.
    #[serde(default)]
    pub scroll_offset: Option<u32>,

    /// HTTP fetch timeout in seconds.
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Transcript location.
    pub transcript_path: String,
    /// Page title.
    pub page_title: String,
    /// Custom page shell, if any.
    pub template_path: Option<PathBuf>,
    /// Highlight theme name.
    pub theme: String,
    /// Highlighting enabled.
    pub highlight: bool,
    /// Scroll header offset.
    pub scroll_offset: u32,
    /// HTTP fetch timeout; `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            transcript_path: DEFAULT_TRANSCRIPT.to_string(),
            page_title: crate::view::page::DEFAULT_TITLE.to_string(),
            template_path: None,
            theme: crate::view::highlight::DEFAULT_THEME.to_string(),
            highlight: true,
            scroll_offset: crate::view::DEFAULT_SCROLL_OFFSET,
            fetch_timeout: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Command-line values that override everything else.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Positional `SOURCE`.
    pub transcript_path: Option<String>,
    /// `--title`.
    pub page_title: Option<String>,
    /// `--template`.
    pub template_path: Option<PathBuf>,
    /// `--theme`.
    pub theme: Option<String>,
    /// `Some(false)` when `--no-highlight` was passed.
    pub highlight: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/transcript-stepper/transcript-stepper.log` on Linux,
/// or the platform equivalent. Falls back to the current directory when no
/// state directory exists (macOS, Windows).
pub fn default_log_path() -> PathBuf {
    let file_name = format!("{APP_DIR}.log");
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join(APP_DIR).join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/transcript-stepper/config.toml` on Linux.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `STEPPER_CONFIG` environment variable
/// 3. Default path `~/.config/transcript-stepper/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        transcript_path: config.transcript_path.unwrap_or(defaults.transcript_path),
        page_title: config.page_title.unwrap_or(defaults.page_title),
        template_path: config.template_path.or(defaults.template_path),
        theme: config.theme.unwrap_or(defaults.theme),
        highlight: config.highlight.unwrap_or(defaults.highlight),
        scroll_offset: config.scroll_offset.unwrap_or(defaults.scroll_offset),
        fetch_timeout: config
            .fetch_timeout_secs
            .map(Duration::from_secs)
            .or(defaults.fetch_timeout),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `STEPPER_THEME`: Override theme
/// - `STEPPER_TRANSCRIPT`: Override transcript location
pub fn apply_env_overrides(config: ResolvedConfig) -> ResolvedConfig {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Env override logic with an injectable lookup, so tests need not touch the
/// process environment.
fn apply_overrides_from(
    mut config: ResolvedConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    if let Some(theme) = lookup(THEME_ENV) {
        config.theme = theme;
    }
    if let Some(transcript) = lookup(TRANSCRIPT_ENV) {
        config.transcript_path = transcript;
    }
    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(transcript) = cli.transcript_path {
        config.transcript_path = transcript;
    }
    if let Some(title) = cli.page_title {
        config.page_title = title;
    }
    if let Some(template) = cli.template_path {
        config.template_path = Some(template);
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(highlight) = cli.highlight {
        config.highlight = highlight;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
