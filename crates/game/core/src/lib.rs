//! Adventure content compiler core.
//!
//! `adventure-core` turns an in-memory [`model::Adventure`] into the binary
//! datafiles the game engine loads at runtime. It owns the registry of engine
//! codes, the typed content model, the cross-reference [`validate::Validator`]
//! and the record encoders. Nothing here touches the filesystem: bitmaps are
//! reached through [`bitmap::BitmapOracle`] and finished datafiles are handed
//! back as bytes for the runtime to persist.
//!
//! Encoding is gated on validation: [`encode::Encoder`] can only be built from
//! the [`validate::Validated`] value a fully passing run returns.
pub mod bitmap;
pub mod config;
pub mod datafile;
pub mod encode;
pub mod error;
pub mod model;
pub mod registry;
pub mod validate;

pub use bitmap::{BitmapError, BitmapOracle, BitmapInfo, BitmapTable, SpriteSheet};
pub use config::FormatLimits;
pub use datafile::{IndexEntry, IndexedDatafile};
pub use encode::{
    ConditionError, Encoder, EncodingError, encode_character, encode_condition,
    encode_condition_list, encode_location, encode_text,
};
pub use error::{CompileError, ErrorSeverity, Subject};
pub use model::{
    Adventure, Character, CharacterId, CharacterTable, ConditionClause, ConditionList, ItemId,
    Location, LocationId, Param, TextId, WeaponId,
};
pub use registry::{RegistryKey, SpriteClass, Target, UnknownKey};
pub use validate::{ContentError, Phase, Validated, ValidationFailure, Validator};
