//! Error types for the indexing pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal, non-retried failures of the SVG index pipeline.
///
/// All variants are deterministic filesystem conditions: either the run
/// succeeds completely and one combined file is written, or it aborts with
/// one of these and a non-zero exit status.
#[derive(Debug, Error)]
pub enum IndexError {
    /// An input document path does not reference an existing file.
    #[error("input file not found: {0}")]
    NotFound(PathBuf),

    /// An input document is not well-formed XML.
    #[error("failed to parse {path}: {detail}")]
    Parse { path: PathBuf, detail: String },

    /// Reading an input or writing the output artifact failed.
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    /// Process exit code for this error.
    ///
    /// Missing inputs and malformed XML exit with 2; everything else is a
    /// generic failure.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) | Self::Parse { .. } => 2,
            Self::Io { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_display_includes_path() {
        let err = IndexError::NotFound(PathBuf::from("assets/torso.svg"));
        assert!(format!("{err}").contains("assets/torso.svg"));

        let err = IndexError::Parse {
            path: PathBuf::from("torso.svg"),
            detail: "unexpected end of stream".into(),
        };
        let display = format!("{err}");
        assert!(display.contains("torso.svg"));
        assert!(display.contains("unexpected end of stream"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(IndexError::NotFound(PathBuf::new()).exit_code(), 2);
        assert_eq!(
            IndexError::Parse {
                path: PathBuf::new(),
                detail: String::new(),
            }
            .exit_code(),
            2
        );
        assert_eq!(
            IndexError::Io {
                path: PathBuf::new(),
                source: Error::new(ErrorKind::PermissionDenied, "denied"),
            }
            .exit_code(),
            1
        );
    }
}
