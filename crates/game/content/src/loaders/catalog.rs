//! Item and weapon catalog loaders.

use std::collections::BTreeMap;
use std::path::Path;

use adventure_core::{
    ItemId, WeaponId,
    model::{Item, Weapon},
};

use crate::loaders::{LoadResult, read_ron};

/// Loader for the item catalog from RON files.
///
/// ```ron
/// {
///     1: (name: "Leather cap", slot: "SLOT_TYPE_HEAD"),
/// }
/// ```
pub struct ItemLoader;

impl ItemLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<ItemId, Item>> {
        let items: BTreeMap<ItemId, Item> = read_ron(path)?;
        tracing::debug!(path = %path.display(), items = items.len(), "loaded items");
        Ok(items)
    }
}

/// Loader for the weapon catalog from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<WeaponId, Weapon>> {
        let weapons: BTreeMap<WeaponId, Weapon> = read_ron(path)?;
        tracing::debug!(path = %path.display(), weapons = weapons.len(), "loaded weapons");
        Ok(weapons)
    }
}
