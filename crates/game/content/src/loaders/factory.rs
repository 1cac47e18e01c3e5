//! Content factory for assembling a whole adventure from its directory.

use std::path::{Path, PathBuf};

use adventure_core::{Adventure, Target};

use crate::bitmap::FileBitmapOracle;
use crate::loaders::{
    AdventureManifest, CharacterLoader, ItemLoader, LoadResult, ManifestLoader, StoryLoader,
    WeaponLoader, WorldLoader,
};

/// Content factory that loads all adventure content from one directory.
///
/// # Directory Structure
///
/// ```text
/// leafy_glade/
/// ├── adventure.toml      (optional)
/// ├── world.ron
/// ├── story.ron
/// ├── characters.ron
/// ├── items.ron
/// ├── weapons.ron
/// ├── bmp/
/// │   ├── master/
/// │   └── ql/
/// └── out/
///     └── ql/             (written by the compiler)
/// ```
pub struct ContentFactory {
    root: PathBuf,
    manifest: AdventureManifest,
}

impl ContentFactory {
    /// Opens an adventure directory, reading its manifest if present.
    pub fn open(root: impl Into<PathBuf>) -> LoadResult<Self> {
        let root = root.into();
        let manifest = ManifestLoader::load_or_default(&root)?;
        Ok(Self { root, manifest })
    }

    pub fn with_manifest(root: impl Into<PathBuf>, manifest: AdventureManifest) -> Self {
        Self {
            root: root.into(),
            manifest,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &AdventureManifest {
        &self.manifest
    }

    /// Adventure title, falling back to the directory name.
    pub fn title(&self) -> String {
        self.manifest.title.clone().unwrap_or_else(|| {
            self.root
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.root.display().to_string())
        })
    }

    /// Loads every content table into one [`Adventure`].
    pub fn load_adventure(&self) -> LoadResult<Adventure> {
        let world = WorldLoader::load(&self.root.join(&self.manifest.world))?;
        let story = StoryLoader::load(&self.root.join(&self.manifest.story))?;
        let characters = CharacterLoader::load(&self.root.join(&self.manifest.characters))?;
        let items = ItemLoader::load(&self.root.join(&self.manifest.items))?;
        let weapons = WeaponLoader::load(&self.root.join(&self.manifest.weapons))?;

        tracing::info!(
            title = %self.title(),
            locations = world.len(),
            texts = story.len(),
            "adventure loaded"
        );
        Ok(Adventure {
            world,
            story,
            party: characters.party,
            npcs: characters.npcs,
            monsters: characters.monsters,
            items,
            weapons,
        })
    }

    /// Bitmap source for `target`.
    pub fn bitmap_oracle(&self, target: Target) -> FileBitmapOracle {
        FileBitmapOracle::new(self.root.join(&self.manifest.bitmaps), target)
    }

    /// Default output directory for `target`: `<out>/<suffix>`.
    pub fn out_dir(&self, target: Target) -> PathBuf {
        self.root.join(&self.manifest.out).join(target.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_paths() {
        let factory = ContentFactory::with_manifest("/tmp/leafy_glade", AdventureManifest::default());
        assert_eq!(factory.title(), "leafy_glade");
        assert_eq!(
            factory.out_dir(Target::SinclairQl),
            Path::new("/tmp/leafy_glade/out/ql")
        );
        assert_eq!(
            factory.bitmap_oracle(Target::SinclairQl).search_path(),
            [
                PathBuf::from("/tmp/leafy_glade/bmp/ql"),
                PathBuf::from("/tmp/leafy_glade/bmp/master"),
            ]
        );
    }
}
