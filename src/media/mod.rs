//! Exercise media map construction.
//!
//! Converts a CSV export of the exercise catalog (name + demo-video URL
//! columns) into a JSON map keyed by slug:
//!
//! ```json
//! { "stability-ball-russian-twist": { "youtubeShort": "dQw4w9WgXcQ" } }
//! ```
//!
//! The map shares only the slug naming convention with the muscle-group
//! index; the consuming app joins the two downstream.

pub mod csv;
pub mod slug;
pub mod youtube;

use anyhow::{Result, bail};
use serde_json::{Map, Value, json};

use crate::log;

/// Header names of the two columns the export must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaColumns {
    pub exercise: String,
    pub youtube: String,
}

/// Build the slug -> media-reference map from CSV text.
///
/// Rows with a blank name or URL are skipped silently; rows whose URL yields
/// no recognizable video id are skipped with a warning. Later rows that slug
/// to the same key overwrite earlier ones.
pub fn build_media_map(csv_text: &str, columns: &MediaColumns) -> Result<Map<String, Value>> {
    let table = csv::CsvTable::parse(csv_text)?;

    let (Some(name_col), Some(url_col)) = (
        table.column(&columns.exercise),
        table.column(&columns.youtube),
    ) else {
        bail!(
            "CSV must have columns '{}' and '{}'. Found: {:?}",
            columns.exercise,
            columns.youtube,
            table.headers
        );
    };

    let mut map = Map::new();
    for row in &table.rows {
        let name = row.get(name_col).map(|s| s.trim()).unwrap_or_default();
        let url = row.get(url_col).map(|s| s.trim()).unwrap_or_default();
        if name.is_empty() || url.is_empty() {
            continue;
        }

        let Some(id) = youtube::video_id(url) else {
            log!("warning"; "could not parse YouTube id: {url} ({name})");
            continue;
        };

        map.insert(slug::slugify(name), json!({ "youtubeShort": id }));
    }

    Ok(map)
}
