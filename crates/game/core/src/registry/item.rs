use bitflags::bitflags;

use super::registry_key;

bitflags! {
    /// Equipment slots an item may occupy.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SlotSet: u8 {
        const HEAD = 1 << 0;
        const BODY = 1 << 2;
        const OPTION = 1 << 3;
    }
}

/// Slot-compatibility class declared by an item.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(u8)]
pub enum SlotClass {
    /// Cannot be equipped.
    #[default]
    #[strum(to_string = "SLOT_TYPE_NONE")]
    None = 0x00,
    #[strum(to_string = "SLOT_TYPE_HEAD")]
    Head = 0x01,
    #[strum(to_string = "SLOT_TYPE_BODY")]
    Body = 0x04,
    #[strum(to_string = "SLOT_TYPE_OPTION")]
    Option = 0x08,
}
registry_key!(SlotClass, "item slot class");

impl SlotClass {
    pub fn accepts(self) -> SlotSet {
        SlotSet::from_bits_truncate(self as u8)
    }

    pub fn fits(self, slot: EquipSlot) -> bool {
        self.accepts().contains(slot.bit())
    }
}

/// Armour slot on a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EquipSlot {
    Head,
    Body,
    Option,
}

impl EquipSlot {
    pub const fn bit(self) -> SlotSet {
        match self {
            Self::Head => SlotSet::HEAD,
            Self::Body => SlotSet::BODY,
            Self::Option => SlotSet::OPTION,
        }
    }
}

/// Weapon hand on a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum WeaponSlot {
    #[strum(to_string = "weapon_r")]
    Right,
    #[strum(to_string = "weapon_l")]
    Left,
}

/// Type letter prefixed to every loot entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LootKind {
    Weapon,
    Item,
}

impl LootKind {
    pub const fn letter(self) -> u8 {
        match self {
            Self::Weapon => b'w',
            Self::Item => b'i',
        }
    }

    pub const fn from_letter(letter: u8) -> Option<Self> {
        match letter {
            b'w' => Some(Self::Weapon),
            b'i' => Some(Self::Item),
            _ => None,
        }
    }
}
