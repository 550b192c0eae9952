use std::path::{Path, PathBuf};

use crate::Context;
use crate::credentials::{Credentials, check_api_key, write_env_file};
use crate::error::Result;
use crate::fallback::{Step, ToolOutcome, attempt_with_fallback};
use crate::install::{MARKER_SCRIPT, SKILL_DIR, install, is_installed};
use crate::process::Invocation;
use crate::ui;

/// How a configuration run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigureOutcome {
    /// The skill was missing and the user chose not to install it.
    Declined,
    Configured {
        skill_path: PathBuf,
        credentials: Credentials,
        connection: ToolOutcome,
    },
}

enum State {
    Locating { installed: bool },
    Installing,
    CollectingCredentials(PathBuf),
    Persisting(PathBuf, Credentials),
    VerifyingConnection(PathBuf, Credentials),
    Done(ConfigureOutcome),
}

/// Resolves `target`, descending into `moltarena-skill` when present.
pub fn locate_skill_dir(target: &Path) -> Result<PathBuf> {
    let base = std::path::absolute(target)?;
    let nested = base.join(SKILL_DIR);
    if nested.exists() {
        return Ok(nested);
    }
    Ok(base)
}

/// Walks the skill from wherever it is to a configured install.
pub fn configure(target: &Path, ctx: &Context<'_>) -> Result<ConfigureOutcome> {
    let mut state = State::Locating { installed: false };
    loop {
        state = match state {
            State::Locating { installed } => {
                let skill_path = locate_skill_dir(target)?;
                if is_installed(&skill_path) {
                    State::CollectingCredentials(skill_path)
                } else if installed {
                    tracing::debug!(path = %skill_path.display(), "entry script still missing after install");
                    State::CollectingCredentials(skill_path)
                } else if offer_install(ctx)? {
                    State::Installing
                } else {
                    State::Done(ConfigureOutcome::Declined)
                }
            }
            State::Installing => {
                install(target, ctx)?;
                State::Locating { installed: true }
            }
            State::CollectingCredentials(skill_path) => {
                let credentials = collect_credentials(ctx)?;
                State::Persisting(skill_path, credentials)
            }
            State::Persisting(skill_path, credentials) => {
                write_env_file(&skill_path, &credentials)?;
                println!();
                ui::success("✅ Configuration saved to .env");
                if let Some(mode) = credentials.mode() {
                    ui::dim(&format!("   Configured with a {} key", mode.label()));
                }
                State::VerifyingConnection(skill_path, credentials)
            }
            State::VerifyingConnection(skill_path, credentials) => {
                let connection = verify_connection(ctx, &skill_path);
                print_ready(ctx);
                State::Done(ConfigureOutcome::Configured {
                    skill_path,
                    credentials,
                    connection,
                })
            }
            State::Done(outcome) => return Ok(outcome),
        };
    }
}

fn offer_install(ctx: &Context<'_>) -> Result<bool> {
    ui::warn("⚠️  MoltArena Skill not found in current directory.");
    ui::dim("   Run \"moltarena install\" first.");
    println!();
    ctx.prompter
        .confirm("Would you like to install it now?", true)
}

fn collect_credentials(ctx: &Context<'_>) -> Result<Credentials> {
    ui::heading("🔧 API Configuration\n");
    ui::dim(&format!(
        "Get your API key from: {}\n",
        ctx.settings.settings_url
    ));

    let api_key = ctx
        .prompter
        .input("Enter your MoltArena API Key:", None, &check_api_key)?;
    let api_url = ctx.prompter.input(
        "API URL (press Enter for default):",
        Some(&ctx.settings.api_url),
        &|_: &str| Ok(()),
    )?;
    Ok(Credentials { api_url, api_key })
}

fn verify_connection(ctx: &Context<'_>, skill_path: &Path) -> ToolOutcome {
    let list = |program: &str| {
        Invocation::new(program)
            .args([MARKER_SCRIPT, "list"])
            .current_dir(skill_path)
    };
    attempt_with_fallback(
        ctx.runner,
        &list("python"),
        &list("python3"),
        &Step {
            progress: "Testing API connection...",
            success: Some("API connection successful!"),
            warning: "Could not verify connection. Check your API key.",
        },
    )
}

fn print_ready(ctx: &Context<'_>) {
    ui::print_box(
        "Ready!",
        &[
            "Your MoltArena Skill is configured.".to_string(),
            String::new(),
            format!("{} python {} list", ui::label("Test it:"), MARKER_SCRIPT),
            format!(
                "{} python {} deploy MyBot witty",
                ui::label("Deploy agent:"),
                MARKER_SCRIPT
            ),
            format!("{} python {} battle", ui::label("Start battle:"), MARKER_SCRIPT),
            String::new(),
            format!(
                "{} {}",
                console::style("Full docs:").dim(),
                ui::link(&ctx.settings.arena_url)
            ),
        ],
    );
}
