use thiserror::Error;

use crate::{
    bitmap::BitmapError,
    encode::ConditionError,
    error::{CompileError, ErrorSeverity, Subject},
    model::{CharacterId, CharacterTable, ItemId, LocationId, LootToken, LootTokenError, TextId},
    registry::{Dimensions, EquipSlot, SlotClass, SpriteClass, Stat},
};

/// Table a reference points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RefKind {
    Location,
    Text,
    Monster,
    Npc,
    Item,
    Weapon,
}

/// Referential integrity or range violation in authored content.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("{subject}: {field} is {len} bytes, longer than {max}")]
    TooLong {
        subject: Subject,
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{subject}: {stat} {value} outside {min}..={max}")]
    StatOutOfBounds {
        subject: Subject,
        stat: Stat,
        value: u16,
        min: u16,
        max: u16,
    },

    #[error("{table} table holds {count} characters, at most {max} allowed")]
    TooManyCharacters {
        table: CharacterTable,
        count: usize,
        max: usize,
    },

    #[error("{subject}: {field} names `{filename}` but the sprite class is {class}")]
    SpriteWithoutClass {
        subject: Subject,
        field: String,
        class: SpriteClass,
        filename: String,
    },

    #[error(
        "{subject}: {field} bitmap `{filename}` is {actual}, {class} requires {expected}"
    )]
    BitmapDimensions {
        subject: Subject,
        field: String,
        filename: String,
        class: SpriteClass,
        expected: Dimensions,
        actual: Dimensions,
    },

    #[error("{subject}: {field}, {source}")]
    Bitmap {
        subject: Subject,
        field: String,
        #[source]
        source: BitmapError,
    },

    #[error("{subject}: {field} refers to missing {target} {id}")]
    Dangling {
        subject: Subject,
        field: String,
        target: RefKind,
        id: u16,
    },

    #[error("{subject}: {field} uses {target} ID 0, which the engine reads as none")]
    ReservedId {
        subject: Subject,
        field: String,
        target: RefKind,
    },

    #[error("{subject}: {item} is {class} and cannot be worn in the {slot} slot")]
    SlotMismatch {
        subject: Subject,
        slot: EquipSlot,
        item: ItemId,
        class: SlotClass,
    },

    #[error("{subject}: {field} chance {chance}% is above 100%")]
    ChanceOutOfRange {
        subject: Subject,
        field: &'static str,
        chance: u8,
    },

    #[error("{id}: character {character:?} at position {position} is not printable ASCII")]
    Unprintable {
        id: TextId,
        position: usize,
        character: char,
    },

    #[error("{id}: {len} bytes, must be shorter than {max}")]
    TextTooLong { id: TextId, len: usize, max: usize },

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

    #[error("{subject}: npc{slot} dialogue {dialogue} outside 1..={max}")]
    DialogueOutOfRange {
        subject: Subject,
        slot: usize,
        dialogue: u8,
        max: u8,
    },

    #[error("npc {}: dialogue {dialogue} used at both {first} and {second}", .npc.get())]
    DuplicateDialogue {
        npc: CharacterId,
        dialogue: u8,
        first: LocationId,
        second: LocationId,
    },
}

impl CompileError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Bitmap { source, .. } => source.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooLong { .. } => "CONTENT_TOO_LONG",
            Self::StatOutOfBounds { .. } => "CONTENT_STAT_OUT_OF_BOUNDS",
            Self::TooManyCharacters { .. } => "CONTENT_TOO_MANY_CHARACTERS",
            Self::SpriteWithoutClass { .. } => "CONTENT_SPRITE_WITHOUT_CLASS",
            Self::BitmapDimensions { .. } => "CONTENT_BITMAP_DIMENSIONS",
            Self::Bitmap { .. } => "CONTENT_BITMAP",
            Self::Dangling { .. } => "CONTENT_DANGLING",
            Self::ReservedId { .. } => "CONTENT_RESERVED_ID",
            Self::SlotMismatch { .. } => "CONTENT_SLOT_MISMATCH",
            Self::ChanceOutOfRange { .. } => "CONTENT_CHANCE_OUT_OF_RANGE",
            Self::Unprintable { .. } => "CONTENT_UNPRINTABLE",
            Self::TextTooLong { .. } => "CONTENT_TEXT_TOO_LONG",
            Self::Condition { .. } => "CONTENT_CONDITION",
            Self::Loot { .. } => "CONTENT_LOOT",
            Self::DialogueOutOfRange { .. } => "CONTENT_DIALOGUE_OUT_OF_RANGE",
            Self::DuplicateDialogue { .. } => "CONTENT_DUPLICATE_DIALOGUE",
        }
    }
}
