use std::path::{Path, PathBuf};

use crate::Context;
use crate::error::Result;
use crate::fallback::{Step, ToolOutcome, attempt_with_fallback};
use crate::process::Invocation;
use crate::ui;

pub const SKILL_DIR: &str = "moltarena-skill";
pub const MARKER_SCRIPT: &str = "script.py";
const REQUIREMENTS: &str = "requirements.txt";
const VCS_DIR: &str = ".git";

/// What a successful install produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub install_path: PathBuf,
    pub dependencies: ToolOutcome,
}

/// Returns true if `dir` holds the skill's entry script.
pub fn is_installed(dir: &Path) -> bool {
    dir.join(MARKER_SCRIPT).is_file()
}

/// Resolves the directory the skill is cloned into under `target`.
pub fn install_path(target: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(target)?.join(SKILL_DIR))
}

/// Clones the skill into `target/moltarena-skill` and installs its
/// Python dependencies.
///
/// Only a failed clone is an error. Dependency installation falls back from
/// `pip` to `pip3` and is downgraded to a warning when both fail.
pub fn install(target: &Path, ctx: &Context<'_>) -> Result<InstallOutcome> {
    let install_path = install_path(target)?;

    let spinner = ui::spinner("Cloning repository...");
    if let Err(err) = ctx.cloner.clone_repo(&ctx.settings.repo_url, &install_path) {
        ui::spinner_fail(&spinner, "Installation failed");
        return Err(err);
    }
    spinner.finish_and_clear();

    remove_vcs_metadata(&install_path);

    let pip = pip_install("pip", &install_path);
    let pip3 = pip_install("pip3", &install_path);
    let warning = format!(
        "Python dependencies not installed. Run manually: pip install -r {}",
        REQUIREMENTS
    );
    let dependencies = attempt_with_fallback(
        ctx.runner,
        &pip,
        &pip3,
        &Step {
            progress: "Installing Python dependencies...",
            success: None,
            warning: &warning,
        },
    );

    ui::success("✔ MoltArena Skill installed successfully!");
    print_next_steps(ctx, &install_path);

    Ok(InstallOutcome {
        install_path,
        dependencies,
    })
}

fn pip_install(program: &str, dir: &Path) -> Invocation {
    Invocation::new(program)
        .args(["install", "-r", REQUIREMENTS])
        .current_dir(dir)
}

/// Drops the clone's `.git` directory. Failures are ignored.
fn remove_vcs_metadata(install_path: &Path) {
    let vcs = install_path.join(VCS_DIR);
    if let Err(err) = std::fs::remove_dir_all(&vcs) {
        tracing::debug!(path = %vcs.display(), error = %err, "could not remove vcs metadata");
    }
}

fn print_next_steps(ctx: &Context<'_>, install_path: &Path) {
    let settings = ctx.settings;
    ui::print_box(
        "Next Steps",
        &[
            format!(
                "{} Get your API key: {}",
                ui::label("1."),
                ui::link(&settings.settings_url)
            ),
            String::new(),
            format!("{} Configure your API key:", ui::label("2.")),
            format!("   {}", ui::command("moltarena init")),
            String::new(),
            format!("{} Test the connection:", ui::label("3.")),
            format!(
                "   {}",
                ui::command(&format!(
                    "cd {} && python {} list",
                    install_path.display(),
                    MARKER_SCRIPT
                ))
            ),
            String::new(),
            format!("{} Register with Moltbot:", ui::label("4.")),
            format!("   Upload at {}", ui::link(&settings.register_url)),
        ],
    );
    println!();
    ui::rule();
    ui::info(&format!("🔥 Ready to roast! Visit {}", ui::link(&settings.arena_url)));
    ui::rule();
}
