//! Authored adventure content: loaders and bitmap sources.
//!
//! This crate reads an adventure directory into the in-memory model defined
//! by `adventure-core`:
//! - Content tables (data-driven via RON)
//! - Adventure manifest (data-driven via TOML)
//! - Sprite bitmaps (indexed BMP, packed per target)
//!
//! Nothing here validates cross references; that is the validator's job.

pub mod bitmap;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bitmap::{FileBitmapOracle, IndexedBitmap, MASTER_DIR};

#[cfg(feature = "loaders")]
pub use loaders::{
    AdventureManifest, CharacterCatalog, CharacterLoader, ContentFactory, ItemLoader, LoadError,
    LoadResult, ManifestLoader, StoryLoader, WeaponLoader, WorldLoader,
};
