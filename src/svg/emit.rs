//! Combined index serialization.

use anyhow::Result;
use std::fs;
use std::path::Path;

use super::index::CombinedIndex;
use crate::error::IndexError;

/// Write the combined index as pretty-printed UTF-8 JSON.
///
/// Parent directories are created if absent. Key ordering is whatever the
/// builder established (document-order elements, insertion-ordered `byId`,
/// sorted `classToIds`), so unchanged input yields byte-identical output.
///
/// The write is not atomic: a failure mid-write may leave a truncated file,
/// and no partial success is claimed either way.
pub fn emit(index: &CombinedIndex, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| IndexError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut json = serde_json::to_string_pretty(index)?;
    json.push('\n');

    fs::write(path, json).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
