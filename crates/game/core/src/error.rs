//! Common error infrastructure for adventure-core.
//!
//! Domain errors live next to the code that raises them: condition clauses in
//! [`crate::encode::condition`], referential integrity in [`crate::validate`],
//! wire-width overflows in [`crate::encode`], bitmap access in [`crate::bitmap`].
//! Each implements [`CompileError`] so callers can classify a failure without
//! matching on every variant.

/// Severity level of an error, used to decide how a run reacts to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Authored content is inconsistent. Collected and reported; the run
    /// aborts before any datafile is written.
    ///
    /// Examples: dangling exit, unknown registry key, stat out of bounds
    Validation,

    /// A validated value failed to fit its wire width. Validation should have
    /// rejected it, so this indicates a bug.
    ///
    /// Examples: list of 256 monsters reaching the encoder
    Internal,

    /// The filesystem or a bitmap source failed underneath the run.
    ///
    /// Examples: unreadable bitmap, failed rename
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug rather than bad content.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all adventure-core errors.
pub trait CompileError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Entity a diagnostic is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subject {
    Location(crate::model::LocationId),
    Character(crate::model::CharacterTable, crate::model::CharacterId),
    Text(crate::model::TextId),
}

impl core::fmt::Display for Subject {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Location(id) => write!(f, "{id}"),
            Self::Character(table, id) => write!(f, "{table} {}", id.0),
            Self::Text(id) => write!(f, "{id}"),
        }
    }
}
