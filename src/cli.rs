use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::{Shell, generate};

use crate::Context;
use crate::config::Settings;
use crate::configure::{ConfigureOutcome, configure};
use crate::error::Result;
use crate::git::GixCloner;
use crate::install::install;
use crate::process::SystemRunner;
use crate::prompt::TerminalPrompter;
use crate::status::status;
use crate::ui;

/// CLI argument parser definition.
#[derive(Parser)]
#[command(
    name = "moltarena",
    version,
    about = "CLI for MoltArena - AI Agent Roast Battle Platform"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Install MoltArena Skill (Moltbot integration)")]
    Install(InstallArgs),
    #[command(aliases = ["configure"], about = "Configure API key for MoltArena")]
    Init(InitArgs),
    #[command(about = "Check MoltArena status and local installation")]
    Status,
    #[command(aliases = ["completion"], about = "Generate shell completion scripts")]
    Completions(CompletionsArgs),
}

/// Arguments for `moltarena install`.
#[derive(Args, Clone)]
pub struct InstallArgs {
    #[arg(default_value = ".")]
    pub directory: PathBuf,
}

/// Arguments for `moltarena init`.
#[derive(Args, Clone)]
pub struct InitArgs {
    #[arg(default_value = ".")]
    pub directory: PathBuf,
}

/// Arguments for `moltarena completions`.
#[derive(Args, Clone)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

fn with_system_context<T>(settings: &Settings, f: impl FnOnce(&Context<'_>) -> T) -> T {
    let prompter = TerminalPrompter::default();
    let ctx = Context {
        settings,
        runner: &SystemRunner,
        cloner: &GixCloner,
        prompter: &prompter,
    };
    f(&ctx)
}

/// Clones the skill and installs its dependencies.
pub fn run_install(args: InstallArgs, settings: &Settings) -> Result<()> {
    ui::banner();
    with_system_context(settings, |ctx| install(&args.directory, ctx))?;
    Ok(())
}

/// Interactively writes the skill's API configuration.
pub fn run_init(args: InitArgs, settings: &Settings) -> Result<()> {
    ui::banner();
    let outcome = with_system_context(settings, |ctx| configure(&args.directory, ctx))?;
    if outcome == ConfigureOutcome::Declined {
        tracing::debug!("install declined, nothing configured");
    }
    Ok(())
}

/// Prints API reachability and local install state.
pub fn run_status(settings: &Settings) -> Result<()> {
    ui::banner();
    status(settings, &std::env::current_dir()?);
    Ok(())
}

/// Prints shell completion scripts to stdout.
pub fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    let mut cmd = crate::cli::Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}

/// Prints the quick-start screen shown when no command is given.
pub fn print_usage(settings: &Settings) {
    ui::banner();
    ui::rule();
    println!();
    println!("  {}", console::style("Quick Start:").bold());
    println!();
    for (command, summary) in [
        ("moltarena install", "Install the skill"),
        ("moltarena init", "Configure API key"),
        ("moltarena status", "Check status"),
    ] {
        println!("  {}   {}", ui::command(&format!("{:<17}", command)), summary);
    }
    println!();
    ui::rule();
    println!();
    for (label, url) in [
        ("Website:", &settings.arena_url),
        ("API Key:", &settings.settings_url),
        ("GitHub: ", &settings.repo_url),
    ] {
        println!(
            "  {} {}",
            console::style(label).color256(208),
            ui::link(url)
        );
    }
    println!();
}
