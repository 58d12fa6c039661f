//! Tool configuration for `fitprep.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                             |
//! |-----------|-----------------------------------------------------|
//! | `[index]` | SVG index inputs/output and optional side hints     |
//! | `[media]` | Media-map output path and CSV column names          |
//!
//! The file is optional: when it is absent every field falls back to its
//! built-in default, and CLI flags override file values either way. Paths
//! are passed through as written (relative paths resolve against the
//! working directory), so the pipelines stay testable against injected
//! fixture paths rather than ambient constants.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::debug;
use crate::media::MediaColumns;
use crate::svg::side::Side;

/// Root configuration structure representing fitprep.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FitprepConfig {
    /// SVG index settings
    pub index: IndexConfig,

    /// Exercise media map settings
    pub media: MediaConfig,
}

/// Settings for the `index` command: the two source diagrams, the output
/// artifact, and optional side-label overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Front-view diagram path.
    pub front: PathBuf,
    /// Back-view diagram path.
    pub back: PathBuf,
    /// Combined JSON artifact path.
    pub output: PathBuf,
    /// Side label for the front document; `None` = infer from file name.
    pub front_side: Option<Side>,
    /// Side label for the back document; `None` = infer from file name.
    pub back_side: Option<Side>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            front: PathBuf::from("assets/torso.svg"),
            back: PathBuf::from("assets/torso_back.svg"),
            output: PathBuf::from("assets/muscles_index.json"),
            front_side: None,
            back_side: None,
        }
    }
}

/// Settings for the `media` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaConfig {
    /// Media map output path.
    pub output: PathBuf,
    /// Header of the exercise-name column.
    pub exercise_column: String,
    /// Header of the demo-video URL column.
    pub youtube_column: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("exercise_media.json"),
            exercise_column: "Exercise".to_owned(),
            youtube_column: "YouTube".to_owned(),
        }
    }
}

impl MediaConfig {
    /// The configured column headers.
    pub fn columns(&self) -> MediaColumns {
        MediaColumns {
            exercise: self.exercise_column.clone(),
            youtube: self.youtube_column.clone(),
        }
    }
}

impl FitprepConfig {
    /// Load configuration from `path`, or defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            debug!("config"; "{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }
}
