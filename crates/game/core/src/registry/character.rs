use core::{fmt, ops::RangeInclusive};

use super::registry_key;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(u8)]
pub enum CharacterType {
    #[strum(to_string = "CHARACTER_TYPE_MONSTER")]
    Monster = 0x00,
    #[strum(to_string = "CHARACTER_TYPE_NPC")]
    Npc = 0x01,
    #[strum(to_string = "CHARACTER_TYPE_BOSS")]
    Boss = 0x02,
}
registry_key!(CharacterType, "character type");

/// Bitmap size category; each class with dimensions owns one sprite datafile.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
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
pub enum SpriteClass {
    #[strum(to_string = "SPRITE_CLASS_NONE")]
    None = 0x00,
    #[strum(to_string = "SPRITE_CLASS_NORMAL")]
    Normal = 0x01,
    #[strum(to_string = "SPRITE_CLASS_LARGE")]
    Large = 0x02,
    #[strum(to_string = "SPRITE_CLASS_PORTRAIT")]
    Portrait = 0x03,
}
registry_key!(SpriteClass, "sprite class");

impl SpriteClass {
    /// Required pixel dimensions, `None` for the class that carries no bitmaps.
    pub const fn dimensions(self) -> Option<Dimensions> {
        match self {
            Self::None => None,
            Self::Normal | Self::Portrait => Some(Dimensions::new(32, 32)),
            Self::Large => Some(Dimensions::new(96, 96)),
        }
    }

    /// Output blob holding every bitmap of this class.
    pub const fn datafile(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Normal => Some("sprite.dat"),
            Self::Large => Some("boss.dat"),
            Self::Portrait => Some("portrait.dat"),
        }
    }

    /// First ID handed out by bitmap deduplication.
    ///
    /// Portraits number from 0; every other class reserves 0 for "no sprite".
    pub const fn first_id(self) -> u16 {
        match self {
            Self::Portrait => 0,
            _ => 1,
        }
    }
}

/// Pixel width and height of a bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn pixels(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Race and archetype of a character.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(u8)]
pub enum CharacterClass {
    // Generic humans with no special abilities.
    #[strum(to_string = "HUMAN_UNTRAINED")]
    HumanUntrained = 0x10,
    #[strum(to_string = "HUMAN_GENERIC_MELEE")]
    HumanGenericMelee = 0x11,
    #[strum(to_string = "HUMAN_GENERIC_RANGED")]
    HumanGenericRanged = 0x12,
    #[strum(to_string = "HUMAN_GENERIC_MAGIC")]
    HumanGenericMagic = 0x13,
    // Typical RPG classes.
    #[strum(to_string = "HUMAN_BARBARIAN")]
    HumanBarbarian = 0x14,
    #[strum(to_string = "HUMAN_BARD")]
    HumanBard = 0x15,
    #[strum(to_string = "HUMAN_CLERIC")]
    HumanCleric = 0x16,
    #[strum(to_string = "HUMAN_DRUID")]
    HumanDruid = 0x17,
    #[strum(to_string = "HUMAN_FIGHTER")]
    HumanFighter = 0x18,
    #[strum(to_string = "HUMAN_PALADIN")]
    HumanPaladin = 0x19,
    #[strum(to_string = "HUMAN_RANGER")]
    HumanRanger = 0x1A,
    #[strum(to_string = "HUMAN_ROGUE")]
    HumanRogue = 0x1B,
    #[strum(to_string = "HUMAN_SORCERER")]
    HumanSorcerer = 0x1C,
    #[strum(to_string = "HUMAN_WARLOCK")]
    HumanWarlock = 0x1D,
    #[strum(to_string = "HUMAN_WIZARD")]
    HumanWizard = 0x1E,
    // Beasts.
    #[strum(to_string = "BEAST_WILD")]
    BeastWild = 0x20,
    #[strum(to_string = "BEAST_MELEE")]
    BeastMelee = 0x21,
    #[strum(to_string = "BEAST_RANGED")]
    BeastRanged = 0x22,
    #[strum(to_string = "BEAST_MAGIC")]
    BeastMagic = 0x23,
}
registry_key!(CharacterClass, "character class");

/// Bounded character statistic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Stat {
    Str,
    Dex,
    Con,
    Wis,
    Int,
    Chr,
    Hp,
    Level,
}

impl Stat {
    /// Inclusive bounds the engine accepts for this statistic.
    pub const fn bounds(self) -> RangeInclusive<u16> {
        match self {
            Self::Str | Self::Dex | Self::Con | Self::Wis | Self::Int | Self::Chr => 1..=20,
            Self::Hp => 1..=255,
            Self::Level => 0..=10,
        }
    }
}

/// Animation states, in record order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AnimationState {
    Resting,
    Attack,
    Magic,
    Wounded,
    Death,
}
