//! Typed content model.
//!
//! One record type per authored entity. Absent references are `Option`s and
//! only become the wire sentinel `0` at the encoding boundary.
mod adventure;
mod catalog;
mod character;
mod condition;
mod ids;
mod location;

pub use adventure::{Adventure, ContentRefs};
pub use catalog::{Item, Weapon};
pub use character::{
    Animations, Attributes, Character, CharacterTable, Equipment, FrameList, SpellList, is_blank,
};
pub use condition::{ConditionClause, ConditionList, Param};
pub use ids::{CharacterId, ItemId, LocationId, TextId, WeaponId};
pub use location::{
    Direction, Exit, Exits, Location, LootEntry, LootList, LootTable, LootToken, LootTokenError,
    MonsterList, NarrativeHooks, NpcSlot, SpawnTable,
};

use arrayvec::ArrayVec;
use thiserror::Error;

/// More entries than a fixed-capacity list can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{len} entries exceed capacity {capacity}")]
pub struct CapacityExceeded {
    pub capacity: usize,
    pub len: usize,
}

/// Collects `items` into a bounded list, rejecting the whole list on overflow.
pub fn bounded<T, const N: usize>(
    items: impl IntoIterator<Item = T>,
) -> Result<ArrayVec<T, N>, CapacityExceeded> {
    let items: Vec<T> = items.into_iter().collect();
    let len = items.len();
    if len > N {
        return Err(CapacityExceeded { capacity: N, len });
    }
    Ok(items.into_iter().collect())
}

/// Serde adapter for bounded list fields; an overflow names both sizes.
#[cfg(feature = "serde")]
pub(crate) fn deserialize_bounded<'de, D, T, const N: usize>(
    deserializer: D,
) -> Result<ArrayVec<T, N>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    use serde::{Deserialize, de::Error as _};

    let items = Vec::<T>::deserialize(deserializer)?;
    bounded(items).map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_list_accepts_capacity_and_rejects_overflow() {
        let full: Result<MonsterList, _> = bounded((0..255).map(|i| CharacterId(i as u8)));
        assert_eq!(full.unwrap().len(), 255);

        let over: Result<MonsterList, _> = bounded((0..256).map(|i| CharacterId(i as u8)));
        assert_eq!(
            over.unwrap_err(),
            CapacityExceeded {
                capacity: 255,
                len: 256
            }
        );
    }

    #[test]
    fn condition_lists_follow_record_order() {
        let mut location = Location::named("Glade");
        location.npcs[2] = Some(NpcSlot {
            npc: CharacterId(1),
            require: ConditionList::default(),
            dialogue: 1,
            text: None,
        });
        let paths: Vec<String> = location
            .condition_lists()
            .into_iter()
            .map(|(path, _)| path)
            .collect();
        assert_eq!(
            paths,
            [
                "north.require",
                "south.require",
                "east.require",
                "west.require",
                "spawn.require",
                "respawn.require",
                "loot.require",
                "npc3.require",
            ]
        );
    }
}
