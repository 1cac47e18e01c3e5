//! Errors surfaced by a compiler run.
use adventure_core::{CompileError, EncodingError, ErrorSeverity, ValidationFailure};
use thiserror::Error;

use crate::{compiler::EncodeStage, repository::RepositoryError};

pub type Result<T> = std::result::Result<T, RunError>;

/// Why a run aborted.
///
/// Validation and encoding failures leave the destination untouched. A sink
/// failure may leave earlier files of the set already replaced.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("encoding {stage} failed")]
    Encoding {
        stage: EncodeStage,
        #[source]
        source: EncodingError,
    },

    #[error("writing datafiles failed")]
    Repository(#[from] RepositoryError),
}

impl CompileError for RunError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation(failure) => failure.severity(),
            Self::Encoding { source, .. } => source.severity(),
            Self::Repository(source) => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(failure) => failure.error_code(),
            Self::Encoding { source, .. } => source.error_code(),
            Self::Repository(source) => source.error_code(),
        }
    }
}
