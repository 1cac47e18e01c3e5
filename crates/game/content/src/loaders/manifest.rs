//! Adventure manifest loader.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadError, LoadResult, read_file};

/// File name of the manifest inside an adventure directory.
pub const MANIFEST_FILE: &str = "adventure.toml";

/// Where each content table of an adventure lives, relative to its directory.
///
/// Every key is optional:
///
/// ```toml
/// title = "Leafy Glade"
/// world = "world.ron"
/// bitmaps = "bmp"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdventureManifest {
    pub title: Option<String>,
    pub world: PathBuf,
    pub story: PathBuf,
    pub characters: PathBuf,
    pub items: PathBuf,
    pub weapons: PathBuf,
    /// Holds `master/` plus one directory per target suffix.
    pub bitmaps: PathBuf,
    /// Holds one directory of datafiles per target suffix.
    pub out: PathBuf,
}

impl Default for AdventureManifest {
    fn default() -> Self {
        Self {
            title: None,
            world: "world.ron".into(),
            story: "story.ron".into(),
            characters: "characters.ron".into(),
            items: "items.ron".into(),
            weapons: "weapons.ron".into(),
            bitmaps: "bmp".into(),
            out: "out".into(),
        }
    }
}

/// Loader for adventure manifests from TOML files.
pub struct ManifestLoader;

impl ManifestLoader {
    pub fn load(path: &Path) -> LoadResult<AdventureManifest> {
        let content = read_file(path)?;
        toml::from_str(&content).map_err(|source| LoadError::Toml {
            path: path.to_owned(),
            source,
        })
    }

    /// Loads `adventure.toml` from `dir`, or the defaults when it is absent.
    pub fn load_or_default(dir: &Path) -> LoadResult<AdventureManifest> {
        let path = dir.join(MANIFEST_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "no manifest, using default layout");
            Ok(AdventureManifest::default())
        }
    }
}
