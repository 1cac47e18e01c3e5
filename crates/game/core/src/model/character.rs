use arrayvec::ArrayVec;

use super::{ItemId, WeaponId};
use crate::{
    config::FormatLimits,
    registry::{AnimationState, CharacterClass, CharacterType, EquipSlot, SpriteClass, Stat, WeaponSlot},
};

/// Bitmap filenames of one animation state; a blank entry means "no sprite".
pub type FrameList = ArrayVec<String, { FormatLimits::ANIMATION_FRAMES }>;

pub type SpellList = ArrayVec<u8, { FormatLimits::MAX_SPELLS }>;

/// Which character table a record belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum CharacterTable {
    Npc,
    Party,
    Monster,
}

impl CharacterTable {
    /// Output datafile base name; the party table is validated but not written.
    pub const fn datafile_stem(self) -> Option<&'static str> {
        match self {
            Self::Npc => Some("npc"),
            Self::Monster => Some("monster"),
            Self::Party => None,
        }
    }
}

/// Party member, NPC or monster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub kind: CharacterType,
    pub sprite_class: SpriteClass,
    #[cfg_attr(feature = "serde", serde(default))]
    pub animations: Animations,
    #[cfg_attr(feature = "serde", serde(default))]
    pub portrait: Option<String>,
    pub class: CharacterClass,
    pub level: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile: u16,
    pub attributes: Attributes,
    pub hp: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Equipment,
    #[cfg_attr(feature = "serde", serde(default))]
    pub formation: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spells: SpellList,
}

impl Character {
    /// Value of a bounded statistic.
    pub fn stat(&self, stat: Stat) -> u16 {
        let a = &self.attributes;
        match stat {
            Stat::Str => a.str.into(),
            Stat::Dex => a.dex.into(),
            Stat::Con => a.con.into(),
            Stat::Wis => a.wis.into(),
            Stat::Int => a.int.into(),
            Stat::Chr => a.chr.into(),
            Stat::Hp => self.hp,
            Stat::Level => self.level.into(),
        }
    }

    /// Non-blank portrait filename.
    pub fn portrait(&self) -> Option<&str> {
        self.portrait.as_deref().filter(|name| !is_blank(name))
    }
}

/// Returns true for a filename that stands for "no sprite".
pub fn is_blank(filename: &str) -> bool {
    filename.trim().is_empty()
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Animations {
    pub resting: FrameList,
    pub attack: FrameList,
    pub magic: FrameList,
    pub wounded: FrameList,
    pub death: FrameList,
}

impl Animations {
    pub fn frames(&self, state: AnimationState) -> &FrameList {
        match state {
            AnimationState::Resting => &self.resting,
            AnimationState::Attack => &self.attack,
            AnimationState::Magic => &self.magic,
            AnimationState::Wounded => &self.wounded,
            AnimationState::Death => &self.death,
        }
    }

    pub fn frames_mut(&mut self, state: AnimationState) -> &mut FrameList {
        match state {
            AnimationState::Resting => &mut self.resting,
            AnimationState::Attack => &mut self.attack,
            AnimationState::Magic => &mut self.magic,
            AnimationState::Wounded => &mut self.wounded,
            AnimationState::Death => &mut self.death,
        }
    }
}

/// The six core attributes, in record order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub str: u8,
    pub dex: u8,
    pub con: u8,
    pub wis: u8,
    pub int: u8,
    pub chr: u8,
}

impl Attributes {
    pub const fn uniform(value: u8) -> Self {
        Self {
            str: value,
            dex: value,
            con: value,
            wis: value,
            int: value,
            chr: value,
        }
    }

    pub const fn to_bytes(self) -> [u8; 6] {
        [self.str, self.dex, self.con, self.wis, self.int, self.chr]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Equipment {
    pub head: Option<ItemId>,
    pub body: Option<ItemId>,
    pub option: Option<ItemId>,
    pub weapon_r: Option<WeaponId>,
    pub weapon_l: Option<WeaponId>,
}

impl Equipment {
    pub fn item(&self, slot: EquipSlot) -> Option<ItemId> {
        match slot {
            EquipSlot::Head => self.head,
            EquipSlot::Body => self.body,
            EquipSlot::Option => self.option,
        }
    }

    pub fn weapon(&self, slot: WeaponSlot) -> Option<WeaponId> {
        match slot {
            WeaponSlot::Right => self.weapon_r,
            WeaponSlot::Left => self.weapon_l,
        }
    }
}
