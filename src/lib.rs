#![allow(clippy::result_large_err)]

mod cli;
pub mod config;
pub mod configure;
pub mod credentials;
mod error;
pub mod fallback;
pub mod git;
pub mod install;
pub mod process;
pub mod prompt;
pub mod status;
pub mod ui;

pub use error::{MoltArenaError, Result};

use config::Settings;
use git::RepoCloner;
use process::ProcessRunner;
use prompt::Prompter;

/// Collaborators shared by the install and configure workflows.
pub struct Context<'a> {
    pub settings: &'a Settings,
    pub runner: &'a dyn ProcessRunner,
    pub cloner: &'a dyn RepoCloner,
    pub prompter: &'a dyn Prompter,
}

/// Entry point for the CLI command dispatch.
pub fn run() -> Result<()> {
    use clap::Parser;
    let cli = cli::Cli::parse();
    let settings = config::load_settings();

    match cli.command {
        None => {
            cli::print_usage(&settings);
            Ok(())
        }
        Some(cli::Command::Install(args)) => cli::run_install(args, &settings),
        Some(cli::Command::Init(args)) => cli::run_init(args, &settings),
        Some(cli::Command::Status) => cli::run_status(&settings),
        Some(cli::Command::Completions(args)) => cli::run_completions(args),
    }
}
