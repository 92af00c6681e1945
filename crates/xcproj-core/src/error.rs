//! Error types for descriptor persistence and structural checks.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem failure while writing the project bundle.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistError {
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Path the failed operation was applied to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }
}

/// A descriptor that is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("descriptor does not start with the UTF-8 marker line")]
    MissingHeader,

    #[error("line {line}: unexpected '{found}'")]
    UnexpectedClose { line: usize, found: char },

    #[error("line {line}: expected '{expected}' but found '{found}'")]
    MismatchedClose {
        line: usize,
        expected: char,
        found: char,
    },

    #[error("{count} delimiter(s) left open at end of input")]
    Unclosed { count: usize },

    #[error("unterminated string starting on line {line}")]
    UnterminatedString { line: usize },

    #[error("unterminated comment starting on line {line}")]
    UnterminatedComment { line: usize },

    #[error("no rootObject assignment")]
    MissingRootObject,

    #[error("{count} rootObject assignments")]
    MultipleRootObjects { count: usize },

    #[error("rootObject {id} is not declared as a PBXProject")]
    RootObjectNotProject { id: String },
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistError>;
