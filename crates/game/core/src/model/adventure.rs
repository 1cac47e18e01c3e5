use std::collections::BTreeMap;

use super::{
    Character, CharacterId, CharacterTable, Item, ItemId, Location, LocationId, TextId, Weapon,
    WeaponId,
};

/// ID lookups a condition clause resolves its references against.
pub trait ContentRefs {
    fn has_location(&self, id: LocationId) -> bool;
    fn has_party_member(&self, id: CharacterId) -> bool;
    fn has_npc(&self, id: CharacterId) -> bool;
    fn has_item(&self, id: ItemId) -> bool;
    fn has_weapon(&self, id: WeaponId) -> bool;
}

/// Complete authored content of one adventure.
///
/// Every table is keyed by ID in a `BTreeMap`, so iteration is always in
/// ascending ID order and encoding is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adventure {
    pub world: BTreeMap<LocationId, Location>,
    pub story: BTreeMap<TextId, String>,
    pub party: BTreeMap<CharacterId, Character>,
    pub npcs: BTreeMap<CharacterId, Character>,
    pub monsters: BTreeMap<CharacterId, Character>,
    pub items: BTreeMap<ItemId, Item>,
    pub weapons: BTreeMap<WeaponId, Weapon>,
}

impl Adventure {
    pub fn characters(&self, table: CharacterTable) -> &BTreeMap<CharacterId, Character> {
        match table {
            CharacterTable::Npc => &self.npcs,
            CharacterTable::Party => &self.party,
            CharacterTable::Monster => &self.monsters,
        }
    }

    pub fn characters_mut(
        &mut self,
        table: CharacterTable,
    ) -> &mut BTreeMap<CharacterId, Character> {
        match table {
            CharacterTable::Npc => &mut self.npcs,
            CharacterTable::Party => &mut self.party,
            CharacterTable::Monster => &mut self.monsters,
        }
    }

    pub fn has_text(&self, id: TextId) -> bool {
        self.story.contains_key(&id)
    }

    pub fn has_monster(&self, id: CharacterId) -> bool {
        self.monsters.contains_key(&id)
    }
}

impl ContentRefs for Adventure {
    fn has_location(&self, id: LocationId) -> bool {
        self.world.contains_key(&id)
    }

    fn has_party_member(&self, id: CharacterId) -> bool {
        self.party.contains_key(&id)
    }

    fn has_npc(&self, id: CharacterId) -> bool {
        self.npcs.contains_key(&id)
    }

    fn has_item(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    fn has_weapon(&self, id: WeaponId) -> bool {
        self.weapons.contains_key(&id)
    }
}
