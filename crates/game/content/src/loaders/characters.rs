//! Character roster loader.

use std::collections::BTreeMap;
use std::path::Path;

use adventure_core::{Character, CharacterId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

/// Character roster structure for RON files. Every table is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharacterCatalog {
    pub party: BTreeMap<CharacterId, Character>,
    pub npcs: BTreeMap<CharacterId, Character>,
    pub monsters: BTreeMap<CharacterId, Character>,
}

/// Loader for the character roster from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    pub fn load(path: &Path) -> LoadResult<CharacterCatalog> {
        let catalog: CharacterCatalog = read_ron(path)?;
        tracing::debug!(
            path = %path.display(),
            party = catalog.party.len(),
            npcs = catalog.npcs.len(),
            monsters = catalog.monsters.len(),
            "loaded characters"
        );
        Ok(catalog)
    }
}
