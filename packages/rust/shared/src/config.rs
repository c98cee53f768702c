//! Application configuration for the resume screener.
//!
//! User config lives at `~/.resume-screener/screener.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScreenerError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "screener.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".resume-screener";

// ---------------------------------------------------------------------------
// Config structs (matching screener.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Screening log settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Resume preview highlighting.
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Skill extraction tuning.
    #[serde(default)]
    pub skills: SkillsConfig,
}

/// `[log]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Path of the tabular screening log (CSV).
    #[serde(default = "default_log_path")]
    pub path: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: default_log_path(),
        }
    }
}

fn default_log_path() -> String {
    "screening_results.csv".into()
}

/// `[highlight]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Marker style: "ansi", "html", "markdown", or "none".
    #[serde(default = "default_highlight_style")]
    pub style: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            style: default_highlight_style(),
        }
    }
}

fn default_highlight_style() -> String {
    "ansi".into()
}

/// `[skills]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Extra words the tagger must never treat as nouns.
    #[serde(default)]
    pub stop_words: Vec<String>,
}

// ---------------------------------------------------------------------------
// Screener config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime screener configuration — merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct ScreenerConfig {
    /// Screening log location.
    pub log_path: PathBuf,
    /// Whether completed screenings are appended to the log.
    pub record: bool,
    /// Marker style name for the resume preview.
    pub highlight_style: String,
    /// Extra tagger stop words.
    pub stop_words: Vec<String>,
}

impl From<&AppConfig> for ScreenerConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            log_path: PathBuf::from(&config.log.path),
            record: true,
            highlight_style: config.highlight.style.clone(),
            stop_words: config.skills.stop_words.clone(),
        }
    }
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.resume-screener/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ScreenerError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.resume-screener/screener.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ScreenerError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| ScreenerError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ScreenerError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ScreenerError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ScreenerError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
