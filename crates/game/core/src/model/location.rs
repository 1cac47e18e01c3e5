use arrayvec::ArrayVec;
use thiserror::Error;

use super::{CharacterId, ConditionList, ItemId, LocationId, TextId, WeaponId};
use crate::{config::FormatLimits, registry::LootKind};

/// Monster IDs of one spawn category; the wire count prefix is one byte.
pub type MonsterList = ArrayVec<CharacterId, { FormatLimits::MAX_LIST_ENTRIES }>;

/// Loot tokens of a location; the wire count prefix is one byte.
pub type LootList = ArrayVec<LootToken, { FormatLimits::MAX_LIST_ENTRIES }>;

/// Map node.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<TextId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exits: Exits,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spawn: SpawnTable,
    #[cfg_attr(feature = "serde", serde(default))]
    pub respawn: SpawnTable,
    #[cfg_attr(feature = "serde", serde(default))]
    pub loot: LootTable,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hooks: NarrativeHooks,
    #[cfg_attr(feature = "serde", serde(default))]
    pub npcs: [Option<NpcSlot>; FormatLimits::NPC_SLOTS],
}

impl Location {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Every condition list on this location paired with its field path, in record order.
    pub fn condition_lists(&self) -> Vec<(String, &ConditionList)> {
        let mut lists: Vec<(String, &ConditionList)> = Direction::ALL
            .iter()
            .map(|&dir| (format!("{dir}.require"), &self.exits.get(dir).require))
            .collect();
        lists.push(("spawn.require".into(), &self.spawn.require));
        lists.push(("respawn.require".into(), &self.respawn.require));
        lists.push(("loot.require".into(), &self.loot.require));
        for (slot, npc) in self.npc_slots() {
            lists.push((format!("npc{slot}.require"), &npc.require));
        }
        lists
    }

    /// Occupied NPC slots, numbered from 1.
    pub fn npc_slots(&self) -> impl Iterator<Item = (usize, &NpcSlot)> {
        self.npcs
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|npc| (index + 1, npc)))
    }
}

/// Exit direction, in record order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Exits {
    pub north: Exit,
    pub south: Exit,
    pub east: Exit,
    pub west: Exit,
}

impl Exits {
    pub fn get(&self, direction: Direction) -> &Exit {
        match direction {
            Direction::North => &self.north,
            Direction::South => &self.south,
            Direction::East => &self.east,
            Direction::West => &self.west,
        }
    }

    pub fn get_mut(&mut self, direction: Direction) -> &mut Exit {
        match direction {
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Exit {
    pub destination: Option<LocationId>,
    pub text: Option<TextId>,
    pub require: ConditionList,
}

impl Exit {
    pub fn to(destination: LocationId) -> Self {
        Self {
            destination: Some(destination),
            ..Self::default()
        }
    }
}

/// Encounter category: spawn (primary) or respawn (secondary).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnTable {
    /// Percentage in `0..=100`; absent encodes as 0.
    pub chance: Option<u8>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "super::deserialize_bounded"))]
    pub monsters: MonsterList,
    pub require: ConditionList,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LootTable {
    pub chance: Option<u8>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "super::deserialize_bounded"))]
    pub entries: LootList,
    pub require: ConditionList,
}

/// Authored loot reference: a type letter followed by a decimal ID, e.g. `"w1"`, `"i12"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LootToken(pub String);

impl From<&str> for LootToken {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl core::fmt::Display for LootToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "`{}`", self.0)
    }
}

/// Text shown around encounters.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NarrativeHooks {
    pub spawn: Option<TextId>,
    pub after_spawn: Option<TextId>,
    pub respawn: Option<TextId>,
    pub after_respawn: Option<TextId>,
}

impl NarrativeHooks {
    /// Hooks in record order, named.
    pub fn iter(&self) -> [(&'static str, Option<TextId>); 4] {
        [
            ("hooks.spawn", self.spawn),
            ("hooks.after_spawn", self.after_spawn),
            ("hooks.respawn", self.respawn),
            ("hooks.after_respawn", self.after_respawn),
        ]
    }
}

/// NPC placed at a location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcSlot {
    pub npc: CharacterId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub require: ConditionList,
    /// Dialogue sequence number, unique per NPC across the whole world.
    pub dialogue: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<TextId>,
}

/// Parsed loot reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LootEntry {
    Weapon(WeaponId),
    Item(ItemId),
}

impl LootEntry {
    pub const fn kind(self) -> LootKind {
        match self {
            Self::Weapon(_) => LootKind::Weapon,
            Self::Item(_) => LootKind::Item,
        }
    }

    /// Wire form: type letter then one ID byte.
    pub const fn encode(self) -> [u8; 2] {
        match self {
            Self::Weapon(id) => [LootKind::Weapon.letter(), id.0],
            Self::Item(id) => [LootKind::Item.letter(), id.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LootTokenError {
    #[error("token is empty")]
    Empty,
    #[error("`{0}` is not a loot type letter, expected `w` or `i`")]
    UnknownLetter(char),
    #[error("`{0}` is not an ID in 1..=255")]
    BadId(String),
}

impl LootToken {
    pub fn parse(&self) -> Result<LootEntry, LootTokenError> {
        let mut chars = self.0.chars();
        let letter = chars.next().ok_or(LootTokenError::Empty)?;
        let kind = u8::try_from(letter)
            .ok()
            .and_then(LootKind::from_letter)
            .ok_or(LootTokenError::UnknownLetter(letter))?;
        let digits = chars.as_str();
        let id = digits
            .parse::<u8>()
            .ok()
            .filter(|id| *id != 0 && digits.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| LootTokenError::BadId(digits.to_owned()))?;
        Ok(match kind {
            LootKind::Weapon => LootEntry::Weapon(WeaponId(id)),
            LootKind::Item => LootEntry::Item(ItemId(id)),
        })
    }
}
