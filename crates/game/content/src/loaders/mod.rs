//! Content loaders for reading authored adventure data from files.
//!
//! Every table lives in its own RON file; the optional `adventure.toml`
//! manifest names them. Registry keys stay in their authored string form
//! (`"COND_EVAL_AND"`, `"SPRITE_CLASS_NORMAL"`) and are resolved while
//! deserializing, so an unknown key fails the load with its file named.

pub mod catalog;
pub mod characters;
pub mod factory;
pub mod manifest;
pub mod story;
pub mod world;

pub use catalog::{ItemLoader, WeaponLoader};
pub use characters::{CharacterCatalog, CharacterLoader};
pub use factory::ContentFactory;
pub use manifest::{AdventureManifest, ManifestLoader};
pub use story::StoryLoader;
pub use world::WorldLoader;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure to read or parse one content file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Ron {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LoadError {
    /// File the failure is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Ron { path, .. } | Self::Toml { path, .. } => path,
        }
    }
}

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, LoadError>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Reads and deserializes one RON file.
pub(crate) fn read_ron<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content).map_err(|source| LoadError::Ron {
        path: path.to_owned(),
        source,
    })
}
