use std::path::{Path, PathBuf};

use reqwest::StatusCode;

use crate::config::Settings;
use crate::credentials::env_path;
use crate::install::{SKILL_DIR, is_installed};
use crate::ui;

/// Reachability of the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiHealth {
    Healthy,
    Unhealthy(StatusCode),
    Unreachable(String),
}

impl ApiHealth {
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            ApiHealth::Healthy
        } else {
            ApiHealth::Unhealthy(status)
        }
    }
}

/// Where (and whether) the skill lives locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalInstall {
    NotInstalled,
    Installed { path: PathBuf, configured: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub api: ApiHealth,
    pub local: LocalInstall,
}

/// Single GET against the health endpoint with the client's default timeout.
pub fn check_api(url: &str) -> ApiHealth {
    match reqwest::blocking::get(url) {
        Ok(res) => {
            tracing::debug!(url, status = %res.status(), "health check answered");
            ApiHealth::from_status(res.status())
        }
        Err(err) => {
            tracing::debug!(url, error = %err, "health check failed");
            ApiHealth::Unreachable(err.to_string())
        }
    }
}

/// Candidate install directories, in lookup order.
pub fn candidate_paths(base: &Path) -> Vec<PathBuf> {
    vec![base.to_path_buf(), base.join(SKILL_DIR)]
}

/// Finds the first candidate holding the entry script.
///
/// The `.env` check only happens for a matched candidate.
pub fn locate_install(base: &Path) -> LocalInstall {
    for candidate in candidate_paths(base) {
        if is_installed(&candidate) {
            let configured = env_path(&candidate).exists();
            let path = std::path::absolute(&candidate).unwrap_or(candidate);
            return LocalInstall::Installed { path, configured };
        }
    }
    LocalInstall::NotInstalled
}

/// Reports API reachability and local install state without changing anything.
pub fn status(settings: &Settings, base: &Path) -> StatusReport {
    let spinner = ui::spinner("Checking MoltArena status...");
    let api = check_api(&settings.health_url);
    match &api {
        ApiHealth::Healthy => ui::spinner_success(&spinner, "MoltArena API is online"),
        ApiHealth::Unhealthy(_) => {
            ui::spinner_warn(&spinner, "MoltArena API may be experiencing issues")
        }
        ApiHealth::Unreachable(_) => ui::spinner_fail(&spinner, "Cannot reach MoltArena API"),
    }

    let local = locate_install(base);
    match &local {
        LocalInstall::Installed { path, configured } => {
            ui::success(&format!("✓ Skill installed at: {}", path.display()));
            if *configured {
                ui::success("✓ API configuration found");
            } else {
                ui::warn("⚠ No .env file. Run \"moltarena init\"");
            }
        }
        LocalInstall::NotInstalled => {
            ui::warn("⚠ Skill not installed. Run \"moltarena install\"");
        }
    }

    StatusReport { api, local }
}
