//! Fitprep - data preparation for the workout app.

mod cli;
mod config;
mod error;
mod logger;
mod media;
mod svg;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::FitprepConfig;
use error::IndexError;
use owo_colors::OwoColorize;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if let Err(err) = run(&cli) {
        eprintln!("{} {err:#}", "error:".bright_red().bold());
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = FitprepConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Index { args } => cli::index::run_index(args, &config),
        Commands::Media { args } => cli::media::run_media(args, &config),
    }
}

/// Missing inputs and malformed XML exit with 2; anything else with 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<IndexError>()
        .map_or(1, IndexError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_selection() {
        let not_found = anyhow::Error::new(IndexError::NotFound(PathBuf::from("x.svg")));
        assert_eq!(exit_code(&not_found), 2);

        let parse = anyhow::Error::new(IndexError::Parse {
            path: PathBuf::from("x.svg"),
            detail: "boom".into(),
        });
        assert_eq!(exit_code(&parse), 2);

        let other = anyhow::anyhow!("config trouble");
        assert_eq!(exit_code(&other), 1);
    }
}
