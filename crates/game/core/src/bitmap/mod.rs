//! Sprite bitmaps: lookup, deduplication and per-class blob assembly.
//!
//! The compiler never decodes pixels itself. A [`BitmapOracle`] locates a
//! bitmap by filename, reports its dimensions and hands back the packed
//! bytes for the selected target. Validation converts every bitmap it
//! accepts, so encoding only concatenates stored bytes.
mod sheet;
mod table;

pub use sheet::{SpriteSheet, assemble_sprite_sheets};
pub use table::{BitmapTable, ClassTable};

use thiserror::Error;

use crate::{
    error::{CompileError, ErrorSeverity},
    registry::Dimensions,
};

/// A located bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitmapInfo {
    /// Where the bitmap was found, for diagnostics.
    pub origin: String,
    pub dimensions: Dimensions,
}

/// Source of sprite bitmaps for one target.
pub trait BitmapOracle {
    /// Locates `filename` and reads its dimensions without decoding pixels.
    fn inspect(&self, filename: &str) -> Result<BitmapInfo, BitmapError>;

    /// Converts `filename` into the target's packed pixel bytes.
    fn convert(&self, filename: &str) -> Result<Vec<u8>, BitmapError>;
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BitmapError {
    #[error("`{filename}` not found in {}", .searched.join(", "))]
    NotFound {
        filename: String,
        searched: Vec<String>,
    },

    #[error("`{filename}` is unreadable: {reason}")]
    Unreadable { filename: String, reason: String },

    #[error("`{filename}` is not an indexed bitmap: {reason}")]
    Unsupported { filename: String, reason: String },

    #[error("`{filename}` pixel {offset} has value {value}, outside the target palette")]
    PixelOutOfRange {
        filename: String,
        offset: usize,
        value: u8,
    },

    #[error("`{filename}` has {pixels} pixels, not a multiple of {group}")]
    NotPackable {
        filename: String,
        pixels: usize,
        group: usize,
    },
}

impl CompileError for BitmapError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::Validation,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "BITMAP_NOT_FOUND",
            Self::Unreadable { .. } => "BITMAP_UNREADABLE",
            Self::Unsupported { .. } => "BITMAP_UNSUPPORTED",
            Self::PixelOutOfRange { .. } => "BITMAP_PIXEL_OUT_OF_RANGE",
            Self::NotPackable { .. } => "BITMAP_NOT_PACKABLE",
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory oracle for tests.
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    #[derive(Default)]
    pub struct MemoryOracle {
        pub bitmaps: HashMap<String, (Dimensions, Vec<u8>)>,
        pub conversions: RefCell<Vec<String>>,
        /// Bitmaps whose header reads fine but whose pixels cannot be packed.
        pub unpackable: Vec<String>,
    }

    impl MemoryOracle {
        pub fn with(mut self, filename: &str, width: u32, height: u32) -> Self {
            let len = (width * height / 4) as usize;
            let fill = filename.bytes().fold(0u8, u8::wrapping_add);
            self.bitmaps.insert(
                filename.to_owned(),
                (Dimensions::new(width, height), vec![fill; len]),
            );
            self
        }

        pub fn unpackable(mut self, filename: &str, width: u32, height: u32) -> Self {
            self = self.with(filename, width, height);
            self.unpackable.push(filename.to_owned());
            self
        }
    }

    impl BitmapOracle for MemoryOracle {
        fn inspect(&self, filename: &str) -> Result<BitmapInfo, BitmapError> {
            self.bitmaps
                .get(filename)
                .map(|(dimensions, _)| BitmapInfo {
                    origin: format!("memory/{filename}"),
                    dimensions: *dimensions,
                })
                .ok_or_else(|| BitmapError::NotFound {
                    filename: filename.to_owned(),
                    searched: vec!["memory".into()],
                })
        }

        fn convert(&self, filename: &str) -> Result<Vec<u8>, BitmapError> {
            self.conversions.borrow_mut().push(filename.to_owned());
            if self.unpackable.iter().any(|name| name == filename) {
                return Err(BitmapError::Unsupported {
                    filename: filename.to_owned(),
                    reason: "24 bits per pixel, expected 8".into(),
                });
            }
            self.bitmaps
                .get(filename)
                .map(|(_, bytes)| bytes.clone())
                .ok_or_else(|| BitmapError::NotFound {
                    filename: filename.to_owned(),
                    searched: vec!["memory".into()],
                })
        }
    }
}
