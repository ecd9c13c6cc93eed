mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use sprig_core::{
    config::{self, Config},
    git::{CliGitProvider, GitProvider},
    state::AppState,
};
use sprig_tui::Theme;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about = "Fuzzy-search and switch git branches")]
struct Cli {
    /// Switch straight to the closest-matching branch instead of opening the picker
    pattern: Option<String>,

    /// Fetch from remotes before listing branches
    #[arg(short, long)]
    update: bool,

    /// Run `git pull` after switching
    #[arg(short, long)]
    pull: bool,

    /// Only consider local branches
    #[arg(short, long)]
    local: bool,

    /// Enable debug logging
    #[arg(long)]
    log: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = logging::init(cli.log) {
        eprintln!("Warning: failed to initialise logging: {error}");
    }

    let config = match config::load_config() {
        Ok(config) => config,
        Err(error) => {
            let cli_error = crate::cli::CliError::system(error.to_string());
            crate::cli::print_error(&cli_error);
            return ExitCode::from(2);
        }
    };

    let update = cli.update || config.update;
    let pull = cli.pull || config.pull;
    let local_only = cli.local || config.local;

    let git = match CliGitProvider::discover() {
        Ok(git) => git,
        Err(error) => {
            let cli_error = crate::cli::CliError::system(error.to_string());
            crate::cli::print_error(&cli_error);
            return ExitCode::from(2);
        }
    };

    if update && let Err(error) = git.fetch() {
        // A dead remote should not block switching between existing branches.
        log::warn!("fetch failed: {error}");
        eprintln!("Warning: fetch failed: {error}");
    }

    let result = match cli.pattern {
        Some(pattern) => crate::cli::cmd_switch(&git, &pattern, pull, local_only),
        None => run_tui(&config, &git, pull, local_only).map_err(crate::cli::CliError::from),
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(error) => {
            crate::cli::print_error(&error);
            let code: u8 = match error.code() {
                1 => 1,
                _ => 2,
            };
            ExitCode::from(code)
        }
    }
}

fn run_tui(
    config: &Config,
    git: &dyn GitProvider,
    pull: bool,
    local_only: bool,
) -> Result<()> {
    // Load before touching the terminal so a broken repo fails with a plain
    // error message instead of a corrupted screen.
    let branches = sprig_core::branch::BranchSet::load(git, local_only)?;
    let mut state = AppState::new(branches, local_only);

    let theme = Theme::from_config(&config.theme);

    let mut terminal = ratatui::init();
    let result = sprig_tui::run(&mut terminal, &mut state, git, &theme);
    ratatui::restore();

    match result? {
        sprig_core::state::ExitAction::Switch { branch } => {
            git.checkout(&branch)?;
            println!("Switched to branch '{branch}'");
            if pull {
                git.pull()?;
            }
        }
        sprig_core::state::ExitAction::Quit => {}
    }

    Ok(())
}
