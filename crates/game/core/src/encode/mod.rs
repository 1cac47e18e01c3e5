//! Record encoders.
//!
//! Encoding is only reachable through [`Encoder::new`], which takes the
//! [`Validated`] proof produced by a fully passing validation run.
pub mod condition;

mod character;
mod error;
mod location;
mod story;
mod wire;

pub use character::encode_character;
pub use condition::{
    ClauseError, ClauseFault, Condition, ConditionError, DecodeError, encode_condition,
    encode_condition_list,
};
pub use error::EncodingError;
pub use location::encode_location;
pub use story::{encode_text, first_unprintable};

use crate::{
    bitmap::{BitmapTable, SpriteSheet, assemble_sprite_sheets},
    datafile::IndexedDatafile,
    model::{Adventure, CharacterTable},
    validate::Validated,
};

/// Turns validated content into datafiles.
#[derive(Clone, Copy, Debug)]
pub struct Encoder<'a> {
    adventure: &'a Adventure,
    bitmaps: &'a BitmapTable,
}

impl<'a> Encoder<'a> {
    pub fn new(validated: &'a Validated<'a>) -> Self {
        Self {
            adventure: validated.adventure(),
            bitmaps: validated.bitmaps(),
        }
    }

    /// `world.dat`/`world.idx`: locations in ascending ID order.
    pub fn world(&self) -> Result<IndexedDatafile, EncodingError> {
        let mut file = IndexedDatafile::new("world");
        for (id, location) in &self.adventure.world {
            file.push(&encode_location(*id, location, self.adventure)?)?;
        }
        tracing::debug!(records = file.len(), bytes = file.data().len(), "encoded world");
        Ok(file)
    }

    /// `story.dat`/`story.idx`: texts in ascending ID order.
    pub fn story(&self) -> Result<IndexedDatafile, EncodingError> {
        let mut file = IndexedDatafile::new("story");
        for text in self.adventure.story.values() {
            file.push(&encode_text(text))?;
        }
        tracing::debug!(records = file.len(), bytes = file.data().len(), "encoded story");
        Ok(file)
    }

    /// Character datafile for `table`, or `None` for tables that are not written.
    pub fn characters(
        &self,
        table: CharacterTable,
    ) -> Result<Option<IndexedDatafile>, EncodingError> {
        let Some(stem) = table.datafile_stem() else {
            return Ok(None);
        };
        let mut file = IndexedDatafile::new(stem);
        for (id, character) in self.adventure.characters(table) {
            file.push(&encode_character(table, *id, character, self.bitmaps)?)?;
        }
        tracing::debug!(%table, records = file.len(), "encoded characters");
        Ok(Some(file))
    }

    /// One sheet per sprite class from the bitmaps packed during validation.
    pub fn sprites(&self) -> Result<Vec<SpriteSheet>, EncodingError> {
        assemble_sprite_sheets(self.bitmaps)
    }
}
