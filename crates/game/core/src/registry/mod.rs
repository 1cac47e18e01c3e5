//! Constant and enum registry.
//!
//! Every table the engine headers define is a closed enumeration here, parsed
//! from its authored key (`"COND_EVAL_AND"`, `"SPRITE_CLASS_NORMAL"`, ...) and
//! carrying its wire code. Consumers never see a string lookup: an unknown key
//! fails at parse time with [`UnknownKey`] naming the table and the key.
mod character;
mod condition;
mod item;
mod target;

pub use character::{AnimationState, CharacterClass, CharacterType, Dimensions, SpriteClass, Stat};
pub use condition::{
    Attribute, AttributeScope, ConditionKind, EvalRule, MonsterRole, NpcTest, Ownership,
    PartyStatus, VisitTest,
};
pub use item::{EquipSlot, LootKind, SlotClass, SlotSet, WeaponSlot};
pub use target::Target;

use thiserror::Error;

/// Authored key that does not name any entry of a registry table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {table} key `{key}`")]
pub struct UnknownKey {
    pub table: &'static str,
    pub key: String,
}

/// Registry table parsed from authored keys and encoded as a single byte.
pub trait RegistryKey: Sized + Copy + strum::IntoEnumIterator + core::str::FromStr {
    /// Human-readable table name used in diagnostics.
    const TABLE: &'static str;

    /// Wire code written into datafiles.
    fn code(self) -> u8;

    /// Inverse of [`RegistryKey::code`].
    fn from_code(code: u8) -> Option<Self> {
        Self::iter().find(|entry| entry.code() == code)
    }

    /// Parses an authored key, naming the table on failure.
    fn from_key(key: &str) -> Result<Self, UnknownKey> {
        key.parse().map_err(|_| UnknownKey {
            table: Self::TABLE,
            key: key.to_owned(),
        })
    }
}

/// Implements [`RegistryKey`] plus the `String` conversions serde uses to read
/// and write the authored key form.
macro_rules! registry_key {
    ($ty:ty, $table:literal) => {
        impl $crate::registry::RegistryKey for $ty {
            const TABLE: &'static str = $table;

            fn code(self) -> u8 {
                self as u8
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::registry::UnknownKey;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                <$ty as $crate::registry::RegistryKey>::from_key(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.to_string()
            }
        }
    };
}

pub(crate) use registry_key;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_names_table_and_key() {
        let err = EvalRule::from_key("COND_EVAL_XOR").unwrap_err();
        assert_eq!(err.table, "evaluation rule");
        assert_eq!(err.to_string(), "unknown evaluation rule key `COND_EVAL_XOR`");
    }

    #[test]
    fn codes_round_trip_through_inverse_lookup() {
        for rule in <EvalRule as strum::IntoEnumIterator>::iter() {
            assert_eq!(EvalRule::from_code(rule.code()), Some(rule));
        }
        for class in <CharacterClass as strum::IntoEnumIterator>::iter() {
            assert_eq!(CharacterClass::from_code(class.code()), Some(class));
        }
        assert_eq!(Attribute::from_code(0x05), None);
    }
}
