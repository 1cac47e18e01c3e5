//! Error types raised by datafile sinks.

use std::path::PathBuf;

use adventure_core::{CompileError, ErrorSeverity};
use thiserror::Error;

/// Errors surfaced by sink implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("datafile sink lock was poisoned")]
    LockPoisoned,

    #[error("cannot create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot move {} into place", .path.display())]
    Rename {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{0}` is not a plain file name")]
    InvalidName(String),
}

impl CompileError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidName(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "SINK_LOCK_POISONED",
            Self::CreateDir { .. } => "SINK_CREATE_DIR",
            Self::Write { .. } => "SINK_WRITE",
            Self::Rename { .. } => "SINK_RENAME",
            Self::InvalidName(_) => "SINK_INVALID_NAME",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
