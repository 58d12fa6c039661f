//! The `media` command: CSV catalog export -> slug-keyed media map.

use anyhow::{Context, Result};
use std::fs;

use super::args::MediaArgs;
use crate::config::FitprepConfig;
use crate::log;
use crate::media::build_media_map;

/// Run the media-map conversion with CLI overrides applied.
pub fn run_media(args: &MediaArgs, config: &FitprepConfig) -> Result<()> {
    crate::logger::set_verbose(args.verbose);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.media.output.clone());
    let mut columns = config.media.columns();
    if let Some(column) = &args.exercise_column {
        columns.exercise = column.clone();
    }
    if let Some(column) = &args.youtube_column {
        columns.youtube = column.clone();
    }

    let text = fs::read_to_string(&args.csv)
        .with_context(|| format!("failed to read {}", args.csv.display()))?;
    let map = build_media_map(&text, &columns)?;

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut json = serde_json::to_string_pretty(&map)?;
    json.push('\n');
    fs::write(&output, json).with_context(|| format!("failed to write {}", output.display()))?;

    log!("media"; "wrote {} with {} entries", output.display(), map.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn media_args(csv: std::path::PathBuf, output: std::path::PathBuf) -> MediaArgs {
        MediaArgs {
            csv,
            output: Some(output),
            exercise_column: None,
            youtube_column: None,
            verbose: false,
        }
    }

    #[test]
    fn test_media_command_end_to_end() {
        let dir = TempDir::new().unwrap();
        let csv = dir.path().join("exercises.csv");
        let output = dir.path().join("maps/exercise_media.json");
        fs::write(
            &csv,
            "Exercise,YouTube\n\
             Goblet Squat,https://youtu.be/dQw4w9WgXcQ\n\
             \"Row, Inverted\",https://www.youtube.com/watch?v=abcdef123\n",
        )
        .unwrap();

        run_media(
            &media_args(csv, output.clone()),
            &FitprepConfig::default(),
        )
        .unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.ends_with('\n'));
        let map: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(map["goblet-squat"]["youtubeShort"], "dQw4w9WgXcQ");
        assert_eq!(map["row-inverted"]["youtubeShort"], "abcdef123");
    }

    #[test]
    fn test_media_command_missing_csv() {
        let dir = TempDir::new().unwrap();
        let args = media_args(
            dir.path().join("missing.csv"),
            dir.path().join("out.json"),
        );
        assert!(run_media(&args, &FitprepConfig::default()).is_err());
    }

    #[test]
    fn test_media_command_column_overrides() {
        let dir = TempDir::new().unwrap();
        let csv = dir.path().join("export.csv");
        let output = dir.path().join("out.json");
        fs::write(&csv, "Name,Demo\nSquat,https://youtu.be/dQw4w9WgXcQ\n").unwrap();

        let mut args = media_args(csv, output.clone());
        args.exercise_column = Some("Name".to_owned());
        args.youtube_column = Some("Demo".to_owned());

        run_media(&args, &FitprepConfig::default()).unwrap();

        let map: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(map["squat"]["youtubeShort"], "dQw4w9WgXcQ");
    }
}
