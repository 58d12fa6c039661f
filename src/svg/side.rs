//! Anatomical viewpoint label.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The anatomical viewpoint of one source diagram.
///
/// Every element extracted from a document carries the document's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Front,
    Back,
}

impl Side {
    /// Infer a side from a document's file name.
    ///
    /// A base name containing `back` or `posterior` (case-insensitive) is the
    /// back view; everything else is the front. This is a naming heuristic,
    /// not a schema guarantee - callers with better knowledge pass an
    /// explicit hint instead.
    pub fn infer(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if name.contains("back") || name.contains("posterior") {
            Self::Back
        } else {
            Self::Front
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_from_file_name() {
        assert_eq!(Side::infer(Path::new("/dev/wrkt/torso.svg")), Side::Front);
        assert_eq!(Side::infer(Path::new("torso_back.svg")), Side::Back);
        assert_eq!(Side::infer(Path::new("Posterior-View.svg")), Side::Back);
        // Only the base name matters, not parent directories
        assert_eq!(Side::infer(Path::new("back-views/torso.svg")), Side::Front);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Front).unwrap(), "\"front\"");
        assert_eq!(serde_json::to_string(&Side::Back).unwrap(), "\"back\"");
    }

    #[test]
    fn test_display_matches_serialization() {
        assert_eq!(Side::Front.to_string(), "front");
        assert_eq!(Side::Back.to_string(), "back");
    }
}
