use thiserror::Error;

use super::condition::ConditionError;
use crate::{
    error::{CompileError, ErrorSeverity, Subject},
    model::{LootToken, LootTokenError},
    registry::SpriteClass,
};

/// A value that passed validation but still does not fit its wire slot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("{subject}: {field} is {len} bytes, wider than {max}")]
    FieldTooWide {
        subject: Subject,
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{subject}: {field}, {source}")]
    Condition {
        subject: Subject,
        field: String,
        #[source]
        source: ConditionError,
    },

    #[error("{subject}: loot {token}, {source}")]
    Loot {
        subject: Subject,
        token: LootToken,
        #[source]
        source: LootTokenError,
    },

    #[error("{subject}: bitmap `{filename}` has no {class} ID")]
    UnassignedBitmap {
        subject: Subject,
        class: SpriteClass,
        filename: String,
    },

    #[error("{datafile}: record {index} is {len} bytes, more than an index entry can describe")]
    RecordTooLarge {
        datafile: String,
        index: usize,
        len: usize,
    },

    #[error("{datafile}: offset {offset} does not fit a 4-byte index entry")]
    OffsetOverflow { datafile: String, offset: usize },

    #[error(
        "{class}: `{filename}` packs to {actual} bytes, other bitmaps of the class pack to {expected}"
    )]
    SpriteSizeMismatch {
        class: SpriteClass,
        filename: String,
        expected: usize,
        actual: usize,
    },
}

impl CompileError for EncodingError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::FieldTooWide { .. } => "ENCODE_FIELD_TOO_WIDE",
            Self::Condition { .. } => "ENCODE_CONDITION",
            Self::Loot { .. } => "ENCODE_LOOT",
            Self::UnassignedBitmap { .. } => "ENCODE_UNASSIGNED_BITMAP",
            Self::RecordTooLarge { .. } => "ENCODE_RECORD_TOO_LARGE",
            Self::OffsetOverflow { .. } => "ENCODE_OFFSET_OVERFLOW",
            Self::SpriteSizeMismatch { .. } => "ENCODE_SPRITE_SIZE_MISMATCH",
        }
    }
}
