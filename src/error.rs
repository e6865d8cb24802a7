//! Startup failures of the question loader.
//!
//! All variants are fatal: the viewer never starts with a partial set.

use std::path::PathBuf;

/// Underlying cause of a [`LoadError::MalformedInput`].
#[derive(Debug, thiserror::Error)]
pub enum MalformedCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] ::csv::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A configured source file does not exist.
    #[error("Could not find file: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// No row survived filtering across all sources.
    #[error("No questions were loaded")]
    EmptyResult,

    /// The file exists but could not be read or parsed.
    #[error("Error loading {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: MalformedCause,
    },
}

impl LoadError {
    pub fn malformed(path: impl Into<PathBuf>, source: impl Into<MalformedCause>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Whether the operator should be reminded of the expected CSV columns.
    pub fn wants_format_hint(&self) -> bool {
        !matches!(self, Self::FileNotFound { .. })
    }
}
