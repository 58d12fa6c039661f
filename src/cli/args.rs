//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::svg::side::Side;

/// Fitprep data-preparation CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: fitprep.toml)
    #[arg(short = 'C', long, default_value = "fitprep.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the muscle-group index from the two anatomy SVGs
    #[command(visible_alias = "i")]
    Index {
        #[command(flatten)]
        args: IndexArgs,
    },

    /// Convert an exercise CSV export into a demo-video media map
    #[command(visible_alias = "m")]
    Media {
        #[command(flatten)]
        args: MediaArgs,
    },
}

/// Index command arguments. Each flag overrides its `[index]` config value.
#[derive(clap::Args, Debug, Clone)]
pub struct IndexArgs {
    /// Front-view SVG path
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub front: Option<PathBuf>,

    /// Back-view SVG path
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub back: Option<PathBuf>,

    /// Combined JSON output path
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Side label for the front document (default: infer from file name)
    #[arg(long, value_enum)]
    pub front_side: Option<Side>,

    /// Side label for the back document (default: infer from file name)
    #[arg(long, value_enum)]
    pub back_side: Option<Side>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Media command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct MediaArgs {
    /// Exercise catalog CSV export
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub csv: PathBuf,

    /// Media map output path (overrides `[media]` config)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Header of the exercise-name column
    #[arg(long)]
    pub exercise_column: Option<String>,

    /// Header of the demo-video URL column
    #[arg(long)]
    pub youtube_column: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_index(&self) -> bool {
        matches!(self.command, Commands::Index { .. })
    }
    pub const fn is_media(&self) -> bool {
        matches!(self.command, Commands::Media { .. })
    }
}
