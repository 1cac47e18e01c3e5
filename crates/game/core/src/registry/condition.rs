//! Condition tables: evaluation rules, clause kinds and their parameter vocabularies.
use super::registry_key;

/// Combinator applied to the clauses of a condition list.
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
pub enum EvalRule {
    /// No requirement at all; the list encodes as `[0x00, 0x00]`.
    #[default]
    #[strum(to_string = "COND_EVAL_EMPTY")]
    Empty = 0x00,
    #[strum(to_string = "COND_EVAL_AND")]
    And = 0x10,
    #[strum(to_string = "COND_EVAL_OR")]
    Or = 0x20,
    #[strum(to_string = "COND_EVAL_NOR")]
    Nor = 0x30,
    #[strum(to_string = "COND_EVAL_NAND")]
    Nand = 0x40,
}
registry_key!(EvalRule, "evaluation rule");

/// Clause kind, the leading key of every authored clause.
///
/// Kinds are not [`super::RegistryKey`]s: their opcode spans one, two or all
/// five bytes of the clause.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
pub enum ConditionKind {
    #[strum(to_string = "NO_COND")]
    NoCondition,
    #[strum(to_string = "COND_NO_MONSTERS")]
    NoMonsters,
    #[strum(to_string = "COND_PC_ATR_TYPE")]
    PcAttribute,
    #[strum(to_string = "COND_PARTY_ATR_TYPE")]
    PartyAttribute,
    #[strum(to_string = "COND_PARTY_MEMBER_TYPE")]
    PartyMember,
    #[strum(to_string = "COND_MAP_VISIT_TYPE")]
    MapVisit,
    #[strum(to_string = "COND_MONSTER_DEFEAT_TYPE")]
    MonsterDefeat,
    #[strum(to_string = "COND_NPC_TYPE")]
    Npc,
    #[strum(to_string = "COND_ITEM_TYPE")]
    Item,
    #[strum(to_string = "COND_WEAPON_TYPE")]
    Weapon,
}

impl ConditionKind {
    /// Opcode bytes written at the start of the clause.
    pub const fn opcode(self) -> &'static [u8] {
        match self {
            Self::NoCondition => &[0x00, 0x00, 0x00, 0x00, 0x00],
            Self::NoMonsters => &[0x00, 0x01, 0x00, 0x00, 0x00],
            Self::PcAttribute => &[0x01, 0x00],
            Self::PartyAttribute => &[0x02, 0x00],
            Self::PartyMember => &[0x03, 0x00],
            Self::MapVisit => &[0x04],
            Self::MonsterDefeat => &[0x05],
            Self::Npc => &[0x06],
            Self::Item => &[0x07],
            Self::Weapon => &[0x08],
        }
    }

    /// Number of authored parameters following the kind key.
    pub const fn arity(self) -> usize {
        match self {
            Self::NoCondition | Self::NoMonsters => 0,
            Self::PcAttribute | Self::PartyAttribute | Self::PartyMember => 2,
            Self::MapVisit
            | Self::MonsterDefeat
            | Self::Npc
            | Self::Item
            | Self::Weapon => 3,
        }
    }

    /// Recovers the kind from an encoded clause by matching its opcode prefix.
    pub fn from_clause(bytes: &[u8; 5]) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter()
            .find(|kind| bytes.starts_with(kind.opcode()))
    }

    pub fn from_key(key: &str) -> Result<Self, super::UnknownKey> {
        key.parse().map_err(|_| super::UnknownKey {
            table: "condition kind",
            key: key.to_owned(),
        })
    }
}

/// Whose attribute an attribute-threshold clause tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum AttributeScope {
    /// The player character.
    Pc,
    /// Any member of the party.
    Party,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(u8)]
pub enum Attribute {
    #[strum(to_string = "COND_TYPE_STR")]
    Str = 0x01,
    #[strum(to_string = "COND_TYPE_DEX")]
    Dex = 0x02,
    #[strum(to_string = "COND_TYPE_CON")]
    Con = 0x03,
    #[strum(to_string = "COND_TYPE_WIS")]
    Wis = 0x04,
    #[strum(to_string = "COND_TYPE_INT")]
    Int = 0x06,
    #[strum(to_string = "COND_TYPE_CHR")]
    Chr = 0x07,
    #[strum(to_string = "COND_TYPE_HP")]
    Hp = 0x08,
    #[strum(to_string = "COND_TYPE_GOLD")]
    Gold = 0x09,
    #[strum(to_string = "COND_TYPE_DMG")]
    Dmg = 0x0A,
    #[strum(to_string = "COND_TYPE_INJURY")]
    Injury = 0x0B,
}
registry_key!(Attribute, "attribute");

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(u8)]
pub enum PartyStatus {
    #[strum(to_string = "COND_PARTY_PRESENT")]
    Present = 0x01,
    // The engine header spells it DIMISSED; both spellings are accepted.
    #[strum(to_string = "COND_PARTY_DIMISSED", serialize = "COND_PARTY_DISMISSED")]
    Dismissed = 0x02,
    #[strum(to_string = "COND_PARTY_DEAD")]
    Dead = 0x03,
}
registry_key!(PartyStatus, "party status");

/// Comparison applied by a map-visit clause.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(u8)]
pub enum VisitTest {
    #[strum(to_string = "COND_MAP_VISIT_TYPE", serialize = "COND_MAP_VISIT_ANY")]
    Any = 0x00,
    #[strum(to_string = "COND_MAP_VISIT_TYPE_MAX", serialize = "COND_MAP_VISIT_MAX")]
    Max = 0x01,
    #[strum(to_string = "COND_MAP_VISIT_TYPE_MIN", serialize = "COND_MAP_VISIT_MIN")]
    Min = 0x02,
}
registry_key!(VisitTest, "map visit test");

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(u8)]
pub enum MonsterRole {
    #[strum(to_string = "MONSTER_TYPE_PRIMARY")]
    Primary = 0x01,
    #[strum(to_string = "MONSTER_TYPE_SECONDARY")]
    Secondary = 0x02,
}
registry_key!(MonsterRole, "monster role");

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(u8)]
pub enum NpcTest {
    #[strum(to_string = "COND_NPC_TALK")]
    Talk = 0x01,
    #[strum(to_string = "COND_NPC_ALIVE")]
    Alive = 0x02,
    #[strum(to_string = "COND_NPC_DEAD")]
    Dead = 0x03,
    #[strum(to_string = "COND_NPC_TIMER_LESS")]
    TimerLess = 0x04,
    #[strum(to_string = "COND_NPC_TIMER_MORE")]
    TimerMore = 0x05,
}
registry_key!(NpcTest, "npc test");

/// Possession test shared by item and weapon clauses.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(u8)]
pub enum Ownership {
    #[strum(to_string = "COND_ITEM_OWN", serialize = "COND_WEAPON_OWN")]
    Own = 0x01,
    #[strum(to_string = "COND_ITEM_NOTOWN", serialize = "COND_WEAPON_NOTOWN")]
    NotOwn = 0x02,
}
registry_key!(Ownership, "ownership test");
