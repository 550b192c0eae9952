use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ui;

const CONFIG_DIR: &str = "moltarena";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_ENV: &str = "MOLTARENA_CLI_CONFIG";

pub const DEFAULT_REPO_URL: &str = "https://github.com/andrewkim-gif/moltarena_skill.git";
pub const DEFAULT_ARENA_URL: &str = "https://moltarena.crosstoken.io";
pub const DEFAULT_API_URL: &str = "https://moltarena.crosstoken.io/api";
pub const DEFAULT_HEALTH_URL: &str = "https://moltarena.crosstoken.io/api/health";
pub const DEFAULT_SETTINGS_URL: &str = "https://moltarena.crosstoken.io/settings/api";
pub const DEFAULT_REGISTER_URL: &str = "https://moltbotskill.com";

/// Remote endpoints and version string shared by every command.
///
/// Loaded once at startup and passed by reference afterwards. Every field
/// except `version` may be overridden from `config.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    #[serde(skip)]
    pub version: String,
    pub repo_url: String,
    pub arena_url: String,
    pub api_url: String,
    pub health_url: String,
    pub settings_url: String,
    pub register_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            repo_url: DEFAULT_REPO_URL.to_string(),
            arena_url: DEFAULT_ARENA_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            health_url: DEFAULT_HEALTH_URL.to_string(),
            settings_url: DEFAULT_SETTINGS_URL.to_string(),
            register_url: DEFAULT_REGISTER_URL.to_string(),
        }
    }
}

/// Returns the config file path, honoring `MOLTARENA_CLI_CONFIG` first.
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let config_home = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home.join(".config"));
    config_home.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Reads settings from disk, returning defaults if the file is missing.
pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    let settings = parse_settings(&content)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(settings)
}

/// Parses settings from TOML text; unset keys keep their defaults.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let mut settings: Settings = toml::from_str(content)?;
    settings.version = env!("CARGO_PKG_VERSION").to_string();
    Ok(settings)
}

/// Reads settings, warning and falling back to defaults if the file is unusable.
pub fn read_settings_or_default(path: &Path) -> Settings {
    read_settings(path).unwrap_or_else(|err| {
        ui::warn(&format!(
            "Ignoring config at {}: {}",
            path.display(),
            err
        ));
        Settings::default()
    })
}

/// Loads settings from the default config location.
pub fn load_settings() -> Settings {
    read_settings_or_default(&config_path())
}
