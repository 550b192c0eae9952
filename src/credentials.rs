use std::path::{Path, PathBuf};

use crate::error::Result;

pub const ENV_FILE: &str = ".env";
pub const LIVE_PREFIX: &str = "pk_live_";
pub const TEST_PREFIX: &str = "pk_test_";

/// API endpoint and key written to the skill's `.env`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_url: String,
    pub api_key: String,
}

/// Whether a key talks to production or the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    Live,
    Test,
}

impl KeyMode {
    pub fn label(self) -> &'static str {
        match self {
            KeyMode::Live => "live",
            KeyMode::Test => "test",
        }
    }
}

impl Credentials {
    pub fn mode(&self) -> Option<KeyMode> {
        key_mode(&self.api_key)
    }
}

pub fn key_mode(key: &str) -> Option<KeyMode> {
    if key.starts_with(LIVE_PREFIX) {
        Some(KeyMode::Live)
    } else if key.starts_with(TEST_PREFIX) {
        Some(KeyMode::Test)
    } else {
        None
    }
}

/// Returns true if the key carries a live or test prefix.
pub fn validate_api_key(key: &str) -> bool {
    key_mode(key).is_some()
}

/// Prompt-level check with the message to show on rejection.
pub fn check_api_key(input: &str) -> std::result::Result<(), String> {
    if input.trim().is_empty() {
        return Err("API Key is required".to_string());
    }
    if !validate_api_key(input) {
        return Err(format!(
            "API Key should start with {} or {}",
            LIVE_PREFIX, TEST_PREFIX
        ));
    }
    Ok(())
}

pub fn generate_env_content(credentials: &Credentials) -> String {
    format!(
        "# MoltArena API Configuration\n# Generated by npx moltarena init\n\nMOLTARENA_API_URL={}\nMOLTARENA_API_KEY={}\n",
        credentials.api_url, credentials.api_key
    )
}

pub fn env_path(skill_path: &Path) -> PathBuf {
    skill_path.join(ENV_FILE)
}

/// Writes the `.env` file, replacing any previous content.
pub fn write_env_file(skill_path: &Path, credentials: &Credentials) -> Result<PathBuf> {
    let path = env_path(skill_path);
    std::fs::write(&path, generate_env_content(credentials))?;
    tracing::debug!(path = %path.display(), "wrote env file");
    Ok(path)
}
