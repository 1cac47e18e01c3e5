//! Condition encoder.
//!
//! An authored clause is parsed into a typed [`Condition`], its ID references
//! are resolved against the content tables, and only then is it packed into
//! exactly [`FormatLimits::CONDITION_BYTES`] bytes. A clause either encodes
//! completely or fails with one [`ClauseError`] naming the parameter.
use core::fmt;

use thiserror::Error;

use crate::{
    config::FormatLimits,
    error::{CompileError, ErrorSeverity},
    model::{CharacterId, ConditionClause, ConditionList, ContentRefs, ItemId, LocationId, Param, WeaponId},
    registry::{
        Attribute, AttributeScope, ConditionKind, EvalRule, MonsterRole, NpcTest, Ownership,
        PartyStatus, RegistryKey, UnknownKey, VisitTest,
    },
};

/// One encoded clause.
pub type ClauseBytes = [u8; FormatLimits::CONDITION_BYTES];

/// Typed condition clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    NoCondition,
    NoMonsters,
    Attribute {
        scope: AttributeScope,
        attribute: Attribute,
        value: u8,
    },
    PartyMember {
        member: CharacterId,
        status: PartyStatus,
    },
    MapVisit {
        test: VisitTest,
        location: LocationId,
        count: u8,
    },
    MonsterDefeat {
        role: MonsterRole,
        location: LocationId,
        count: u8,
    },
    Npc {
        test: NpcTest,
        npc: CharacterId,
        value: u16,
    },
    Item {
        ownership: Ownership,
        item: ItemId,
        count: u8,
    },
    Weapon {
        ownership: Ownership,
        weapon: WeaponId,
        count: u8,
    },
}

/// Content reference carried by a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reference {
    Location(LocationId),
    PartyMember(CharacterId),
    Npc(CharacterId),
    Item(ItemId),
    Weapon(WeaponId),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Location(id) => write!(f, "{id}"),
            Self::PartyMember(id) => write!(f, "party member {}", id.0),
            Self::Npc(id) => write!(f, "npc {}", id.0),
            Self::Item(id) => write!(f, "{id}"),
            Self::Weapon(id) => write!(f, "{id}"),
        }
    }
}

/// Why a clause parameter was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClauseFault {
    #[error("clause is empty")]
    Empty,

    #[error("expected a condition kind key, found {0}")]
    KindNotKey(Param),

    #[error(transparent)]
    UnknownKey(#[from] UnknownKey),

    #[error("{kind} takes {expected} parameters, found {found}")]
    Arity {
        kind: ConditionKind,
        expected: usize,
        found: usize,
    },

    #[error("expected a {table} key, found {found}")]
    ExpectedKey { table: &'static str, found: Param },

    #[error("expected an integer, found {found}")]
    ExpectedInteger { found: Param },

    #[error("{value} does not fit 0..={max}")]
    OutOfRange { value: i64, max: u16 },

    #[error("{0} does not exist")]
    Unresolved(Reference),
}

/// A rejected clause: the failing parameter position and the reason.
///
/// Position 0 is the kind key; parameters count from 1.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}: {fault}", position(.param))]
pub struct ClauseError {
    pub param: usize,
    pub fault: ClauseFault,
}

fn position(param: &usize) -> String {
    match *param {
        0 => "kind".to_owned(),
        n => format!("parameter {n}"),
    }
}

impl ClauseError {
    fn at(param: usize, fault: impl Into<ClauseFault>) -> Self {
        Self {
            param,
            fault: fault.into(),
        }
    }
}

/// A rejected condition list.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("declared {declared} clauses but {actual} supplied")]
    CountMismatch { declared: u8, actual: usize },

    #[error("{actual} clauses exceed the limit of {max}")]
    TooManyClauses { actual: usize, max: usize },

    #[error("{rule} list has no clauses")]
    NoClauses { rule: EvalRule },

    #[error("{} list carries {actual} clauses", EvalRule::Empty)]
    ClausesOnEmptyRule { actual: usize },

    #[error("clause {index}, {source}")]
    Clause {
        /// Clause position in the list, counting from 1.
        index: usize,
        #[source]
        source: ClauseError,
    },
}

impl CompileError for ConditionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CountMismatch { .. } => "CONDITION_COUNT_MISMATCH",
            Self::TooManyClauses { .. } => "CONDITION_TOO_MANY_CLAUSES",
            Self::NoClauses { .. } => "CONDITION_NO_CLAUSES",
            Self::ClausesOnEmptyRule { .. } => "CONDITION_CLAUSES_ON_EMPTY",
            Self::Clause { .. } => "CONDITION_CLAUSE",
        }
    }
}

/// Encoded bytes that do not form a valid clause or list.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no condition kind has opcode prefix {0:02x?}")]
    UnknownOpcode(ClauseBytes),

    #[error("{value:#04x} is not a {table} code")]
    UnknownCode { table: &'static str, value: u8 },

    #[error("clause {0:02x?} has non-zero padding")]
    NonCanonical(ClauseBytes),

    #[error("condition list truncated: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },
}

/// Positional view over a clause's parameters.
struct Params<'a>(&'a [Param]);

impl Params<'_> {
    fn key<K: RegistryKey>(&self, index: usize) -> Result<K, ClauseError> {
        match &self.0[index] {
            Param::Key(key) => K::from_key(key).map_err(|err| ClauseError::at(index, err)),
            other => Err(ClauseError::at(
                index,
                ClauseFault::ExpectedKey {
                    table: K::TABLE,
                    found: other.clone(),
                },
            )),
        }
    }

    fn int(&self, index: usize, max: u16) -> Result<u16, ClauseError> {
        match &self.0[index] {
            Param::Int(value) => u16::try_from(*value)
                .ok()
                .filter(|v| *v <= max)
                .ok_or_else(|| {
                    ClauseError::at(index, ClauseFault::OutOfRange { value: *value, max })
                }),
            other => Err(ClauseError::at(
                index,
                ClauseFault::ExpectedInteger {
                    found: other.clone(),
                },
            )),
        }
    }

    fn byte(&self, index: usize) -> Result<u8, ClauseError> {
        self.int(index, u8::MAX.into()).map(|v| v as u8)
    }

    fn word(&self, index: usize) -> Result<u16, ClauseError> {
        self.int(index, u16::MAX)
    }
}

impl Condition {
    pub const fn kind(&self) -> ConditionKind {
        match self {
            Self::NoCondition => ConditionKind::NoCondition,
            Self::NoMonsters => ConditionKind::NoMonsters,
            Self::Attribute {
                scope: AttributeScope::Pc,
                ..
            } => ConditionKind::PcAttribute,
            Self::Attribute {
                scope: AttributeScope::Party,
                ..
            } => ConditionKind::PartyAttribute,
            Self::PartyMember { .. } => ConditionKind::PartyMember,
            Self::MapVisit { .. } => ConditionKind::MapVisit,
            Self::MonsterDefeat { .. } => ConditionKind::MonsterDefeat,
            Self::Npc { .. } => ConditionKind::Npc,
            Self::Item { .. } => ConditionKind::Item,
            Self::Weapon { .. } => ConditionKind::Weapon,
        }
    }

    /// Parses an authored clause, checking keys, arity and integer widths.
    pub fn parse(clause: &ConditionClause) -> Result<Self, ClauseError> {
        let Some(head) = clause.0.first() else {
            return Err(ClauseError::at(0, ClauseFault::Empty));
        };
        let kind = match head {
            Param::Key(key) => ConditionKind::from_key(key).map_err(|err| ClauseError::at(0, err))?,
            other => return Err(ClauseError::at(0, ClauseFault::KindNotKey(other.clone()))),
        };
        let found = clause.0.len() - 1;
        if found != kind.arity() {
            return Err(ClauseError::at(
                0,
                ClauseFault::Arity {
                    kind,
                    expected: kind.arity(),
                    found,
                },
            ));
        }

        let p = Params(&clause.0);
        let condition = match kind {
            ConditionKind::NoCondition => Self::NoCondition,
            ConditionKind::NoMonsters => Self::NoMonsters,
            ConditionKind::PcAttribute | ConditionKind::PartyAttribute => Self::Attribute {
                scope: if kind == ConditionKind::PcAttribute {
                    AttributeScope::Pc
                } else {
                    AttributeScope::Party
                },
                attribute: p.key(1)?,
                value: p.byte(2)?,
            },
            ConditionKind::PartyMember => Self::PartyMember {
                member: CharacterId(p.byte(1)?),
                status: p.key(2)?,
            },
            ConditionKind::MapVisit => Self::MapVisit {
                test: p.key(1)?,
                location: LocationId(p.word(2)?),
                count: p.byte(3)?,
            },
            ConditionKind::MonsterDefeat => Self::MonsterDefeat {
                role: p.key(1)?,
                location: LocationId(p.word(2)?),
                count: p.byte(3)?,
            },
            ConditionKind::Npc => Self::Npc {
                test: p.key(1)?,
                npc: CharacterId(p.byte(2)?),
                value: p.word(3)?,
            },
            ConditionKind::Item => Self::Item {
                ownership: p.key(1)?,
                item: ItemId(p.byte(2)?),
                count: p.byte(3)?,
            },
            ConditionKind::Weapon => Self::Weapon {
                ownership: p.key(1)?,
                weapon: WeaponId(p.byte(2)?),
                count: p.byte(3)?,
            },
        };
        Ok(condition)
    }

    /// The content reference this clause carries and its authored parameter position.
    pub fn reference(&self) -> Option<(usize, Reference)> {
        match *self {
            Self::NoCondition | Self::NoMonsters | Self::Attribute { .. } => None,
            Self::PartyMember { member, .. } => Some((1, Reference::PartyMember(member))),
            Self::MapVisit { location, .. } | Self::MonsterDefeat { location, .. } => {
                Some((2, Reference::Location(location)))
            }
            Self::Npc { npc, .. } => Some((2, Reference::Npc(npc))),
            Self::Item { item, .. } => Some((2, Reference::Item(item))),
            Self::Weapon { weapon, .. } => Some((2, Reference::Weapon(weapon))),
        }
    }

    /// Checks that the referenced location, character, item or weapon exists.
    pub fn resolve(&self, refs: &dyn ContentRefs) -> Result<(), ClauseError> {
        let Some((param, reference)) = self.reference() else {
            return Ok(());
        };
        let exists = match reference {
            Reference::Location(id) => refs.has_location(id),
            Reference::PartyMember(id) => refs.has_party_member(id),
            Reference::Npc(id) => refs.has_npc(id),
            Reference::Item(id) => refs.has_item(id),
            Reference::Weapon(id) => refs.has_weapon(id),
        };
        if exists {
            Ok(())
        } else {
            Err(ClauseError::at(param, ClauseFault::Unresolved(reference)))
        }
    }

    /// Packs the clause: opcode, parameters, zero padding.
    pub fn encode(&self) -> ClauseBytes {
        let mut out = [0u8; FormatLimits::CONDITION_BYTES];
        let opcode = self.kind().opcode();
        out[..opcode.len()].copy_from_slice(opcode);
        let params = &mut out[opcode.len()..];
        match *self {
            Self::NoCondition | Self::NoMonsters => {}
            Self::Attribute {
                attribute, value, ..
            } => {
                params[0] = attribute.code();
                params[1] = value;
            }
            Self::PartyMember { member, status } => {
                params[0] = member.get();
                params[1] = status.code();
            }
            Self::MapVisit {
                test,
                location,
                count,
            } => {
                params[0] = test.code();
                params[1..3].copy_from_slice(&location.get().to_be_bytes());
                params[3] = count;
            }
            Self::MonsterDefeat {
                role,
                location,
                count,
            } => {
                params[0] = role.code();
                params[1..3].copy_from_slice(&location.get().to_be_bytes());
                params[3] = count;
            }
            Self::Npc { test, npc, value } => {
                params[0] = test.code();
                params[1] = npc.get();
                params[2..4].copy_from_slice(&value.to_be_bytes());
            }
            Self::Item {
                ownership,
                item,
                count,
            } => {
                params[0] = ownership.code();
                params[1] = item.get();
                params[2] = count;
            }
            Self::Weapon {
                ownership,
                weapon,
                count,
            } => {
                params[0] = ownership.code();
                params[1] = weapon.get();
                params[2] = count;
            }
        }
        out
    }

    /// Inverse of [`Condition::encode`].
    pub fn decode(bytes: ClauseBytes) -> Result<Self, DecodeError> {
        let kind = ConditionKind::from_clause(&bytes).ok_or(DecodeError::UnknownOpcode(bytes))?;
        let p = &bytes[kind.opcode().len()..];
        let word = |at: usize| u16::from_be_bytes([p[at], p[at + 1]]);

        let condition = match kind {
            ConditionKind::NoCondition => Self::NoCondition,
            ConditionKind::NoMonsters => Self::NoMonsters,
            ConditionKind::PcAttribute => Self::Attribute {
                scope: AttributeScope::Pc,
                attribute: code(p[0])?,
                value: p[1],
            },
            ConditionKind::PartyAttribute => Self::Attribute {
                scope: AttributeScope::Party,
                attribute: code(p[0])?,
                value: p[1],
            },
            ConditionKind::PartyMember => Self::PartyMember {
                member: CharacterId(p[0]),
                status: code(p[1])?,
            },
            ConditionKind::MapVisit => Self::MapVisit {
                test: code(p[0])?,
                location: LocationId(word(1)),
                count: p[3],
            },
            ConditionKind::MonsterDefeat => Self::MonsterDefeat {
                role: code(p[0])?,
                location: LocationId(word(1)),
                count: p[3],
            },
            ConditionKind::Npc => Self::Npc {
                test: code(p[0])?,
                npc: CharacterId(p[1]),
                value: word(2),
            },
            ConditionKind::Item => Self::Item {
                ownership: code(p[0])?,
                item: ItemId(p[1]),
                count: p[2],
            },
            ConditionKind::Weapon => Self::Weapon {
                ownership: code(p[0])?,
                weapon: WeaponId(p[1]),
                count: p[2],
            },
        };

        if condition.encode() != bytes {
            return Err(DecodeError::NonCanonical(bytes));
        }
        Ok(condition)
    }
}

fn code<K: RegistryKey>(value: u8) -> Result<K, DecodeError> {
    K::from_code(value).ok_or(DecodeError::UnknownCode {
        table: K::TABLE,
        value,
    })
}

/// Parses, resolves and packs one authored clause.
pub fn encode_condition(
    clause: &ConditionClause,
    refs: &dyn ContentRefs,
) -> Result<ClauseBytes, ClauseError> {
    let condition = Condition::parse(clause)?;
    condition.resolve(refs)?;
    Ok(condition.encode())
}

/// Checks the list shape before any clause is looked at.
fn check_shape(list: &ConditionList) -> Result<(), ConditionError> {
    let actual = list.clauses.len();
    if usize::from(list.count) != actual {
        return Err(ConditionError::CountMismatch {
            declared: list.count,
            actual,
        });
    }
    match list.rule {
        EvalRule::Empty if actual > 0 => Err(ConditionError::ClausesOnEmptyRule { actual }),
        EvalRule::Empty => Ok(()),
        rule if actual == 0 => Err(ConditionError::NoClauses { rule }),
        _ if actual > FormatLimits::MAX_REQUIREMENTS => Err(ConditionError::TooManyClauses {
            actual,
            max: FormatLimits::MAX_REQUIREMENTS,
        }),
        _ => Ok(()),
    }
}

/// Encodes a condition list: rule byte, count byte, then each clause.
///
/// The empty list encodes as `[0x00, 0x00]`.
pub fn encode_condition_list(
    list: &ConditionList,
    refs: &dyn ContentRefs,
) -> Result<Vec<u8>, ConditionError> {
    check_shape(list)?;
    let mut out = Vec::with_capacity(encoded_list_len(list));
    out.push(list.rule.code());
    out.push(list.count);
    for (index, clause) in list.clauses.iter().enumerate() {
        let bytes = encode_condition(clause, refs).map_err(|source| ConditionError::Clause {
            index: index + 1,
            source,
        })?;
        out.extend_from_slice(&bytes);
    }
    Ok(out)
}

/// Runs the list encoder and discards the bytes.
pub fn check_condition_list(
    list: &ConditionList,
    refs: &dyn ContentRefs,
) -> Result<(), ConditionError> {
    encode_condition_list(list, refs).map(drop)
}

/// Encoded size of a list, derived from its declared shape alone.
pub fn encoded_list_len(list: &ConditionList) -> usize {
    2 + FormatLimits::CONDITION_BYTES * list.clauses.len()
}

/// Decodes a condition list from the front of `bytes`, returning it and the bytes consumed.
pub fn decode_condition_list(bytes: &[u8]) -> Result<(EvalRule, Vec<Condition>, usize), DecodeError> {
    let [rule, count, rest @ ..] = bytes else {
        return Err(DecodeError::Truncated {
            needed: 2,
            available: bytes.len(),
        });
    };
    let rule: EvalRule = code(*rule)?;
    let count = usize::from(*count);
    let needed = count * FormatLimits::CONDITION_BYTES;
    if rest.len() < needed {
        return Err(DecodeError::Truncated {
            needed: needed + 2,
            available: bytes.len(),
        });
    }
    let conditions = rest[..needed]
        .chunks_exact(FormatLimits::CONDITION_BYTES)
        .map(|chunk| {
            let mut clause = [0u8; FormatLimits::CONDITION_BYTES];
            clause.copy_from_slice(chunk);
            Condition::decode(clause)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((rule, conditions, 2 + needed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clause, model::Adventure};

    fn refs() -> Adventure {
        use crate::model::{Item, Location, Weapon};
        use crate::registry::SlotClass;

        let mut adventure = Adventure::default();
        for id in 1..=3 {
            adventure
                .world
                .insert(LocationId(id), Location::named(format!("Room {id}")));
        }
        adventure.items.insert(
            ItemId(2),
            Item {
                name: "Potion".into(),
                slot: SlotClass::None,
            },
        );
        adventure.weapons.insert(
            WeaponId(1),
            Weapon {
                name: "Stick".into(),
            },
        );
        adventure
    }

    #[test]
    fn every_kind_encodes_to_five_bytes_and_decodes_back() {
        let refs = refs();
        let clauses = [
            clause!("NO_COND"),
            clause!("COND_NO_MONSTERS"),
            clause!("COND_PC_ATR_TYPE", "COND_TYPE_STR", 12),
            clause!("COND_PARTY_ATR_TYPE", "COND_TYPE_GOLD", 255),
            clause!("COND_MAP_VISIT_TYPE", "COND_MAP_VISIT_TYPE_MIN", 3, 2),
            clause!("COND_MONSTER_DEFEAT_TYPE", "MONSTER_TYPE_SECONDARY", 1, 4),
            clause!("COND_ITEM_TYPE", "COND_ITEM_OWN", 2, 1),
            clause!("COND_WEAPON_TYPE", "COND_ITEM_NOTOWN", 1, 0),
        ];
        for authored in &clauses {
            let bytes = encode_condition(authored, &refs).unwrap();
            assert_eq!(bytes.len(), 5);
            let parsed = Condition::parse(authored).unwrap();
            let decoded = Condition::decode(bytes).unwrap();
            assert_eq!(decoded, parsed);
            assert_eq!(decoded.kind(), parsed.kind());
        }
    }

    #[test]
    fn wire_layouts() {
        let refs = refs();
        assert_eq!(
            encode_condition(&clause!("COND_NO_MONSTERS"), &refs).unwrap(),
            [0x00, 0x01, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            encode_condition(&clause!("COND_PC_ATR_TYPE", "COND_TYPE_INT", 14), &refs).unwrap(),
            [0x01, 0x00, 0x06, 0x0E, 0x00]
        );
        assert_eq!(
            encode_condition(&clause!("COND_MONSTER_DEFEAT_TYPE", "MONSTER_TYPE_PRIMARY", 3, 1), &refs)
                .unwrap(),
            [0x05, 0x01, 0x00, 0x03, 0x01]
        );
        assert_eq!(
            encode_condition(&clause!("COND_ITEM_TYPE", "COND_ITEM_OWN", 2, 1), &refs).unwrap(),
            [0x07, 0x01, 0x02, 0x01, 0x00]
        );
    }

    #[test]
    fn npc_threshold_is_big_endian() {
        let condition = Condition::Npc {
            test: NpcTest::TimerMore,
            npc: CharacterId(4),
            value: 0x0102,
        };
        assert_eq!(condition.encode(), [0x06, 0x05, 0x04, 0x01, 0x02]);
        assert_eq!(Condition::decode(condition.encode()).unwrap(), condition);
    }

    #[test]
    fn rejects_clause_naming_parameter() {
        let refs = refs();

        let err = encode_condition(&clause!("COND_PC_ATR_TYPE", "COND_TYPE_LUCK", 5), &refs)
            .unwrap_err();
        assert_eq!(err.param, 1);
        assert!(matches!(err.fault, ClauseFault::UnknownKey(ref k) if k.key == "COND_TYPE_LUCK"));

        let err = encode_condition(&clause!("COND_PC_ATR_TYPE", "COND_TYPE_STR", 256), &refs)
            .unwrap_err();
        assert_eq!(err.param, 2);
        assert_eq!(err.fault, ClauseFault::OutOfRange { value: 256, max: 255 });
        assert_eq!(err.to_string(), "parameter 2: 256 does not fit 0..=255");

        let err = encode_condition(&clause!("COND_MAP_VISIT_TYPE", "COND_MAP_VISIT_TYPE", 99, 1), &refs)
            .unwrap_err();
        assert_eq!(err.param, 2);
        assert_eq!(err.fault, ClauseFault::Unresolved(Reference::Location(LocationId(99))));

        let err = encode_condition(&clause!("COND_ITEM_TYPE", "COND_ITEM_OWN", 2), &refs)
            .unwrap_err();
        assert_eq!(err.param, 0);
        assert!(matches!(err.fault, ClauseFault::Arity { expected: 3, found: 2, .. }));

        let err = encode_condition(&ConditionClause::default(), &refs).unwrap_err();
        assert_eq!(err.fault, ClauseFault::Empty);
    }

    #[test]
    fn unresolved_party_member_is_rejected() {
        let refs = refs();
        let err = encode_condition(
            &clause!("COND_PARTY_MEMBER_TYPE", 1, "COND_PARTY_PRESENT"),
            &refs,
        )
        .unwrap_err();
        assert_eq!(err.param, 1);
        assert_eq!(err.fault, ClauseFault::Unresolved(Reference::PartyMember(CharacterId(1))));
    }

    #[test]
    fn empty_list_is_two_bytes() {
        let refs = refs();
        let bytes = encode_condition_list(&ConditionList::default(), &refs).unwrap();
        assert_eq!(bytes, [0x00, 0x00]);
    }

    #[test]
    fn list_prefixes_rule_and_count() {
        let refs = refs();
        let list = ConditionList::new(
            EvalRule::Or,
            vec![clause!("COND_NO_MONSTERS"), clause!("COND_WEAPON_TYPE", "COND_ITEM_OWN", 1, 1)],
        ).unwrap();
        let bytes = encode_condition_list(&list, &refs).unwrap();
        assert_eq!(bytes.len(), encoded_list_len(&list));
        assert_eq!(&bytes[..2], &[0x20, 0x02]);

        let (rule, conditions, used) = decode_condition_list(&bytes).unwrap();
        assert_eq!(rule, EvalRule::Or);
        assert_eq!(used, 12);
        assert_eq!(conditions[0], Condition::NoMonsters);
    }

    #[test]
    fn count_mismatch_rejects_list_before_clauses() {
        let refs = refs();
        let list = ConditionList {
            rule: EvalRule::And,
            count: 2,
            clauses: vec![clause!("COND_TYPE_BOGUS")],
        };
        assert_eq!(
            encode_condition_list(&list, &refs).unwrap_err(),
            ConditionError::CountMismatch {
                declared: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn list_shape_limits() {
        let refs = refs();
        let nine = ConditionList::new(EvalRule::And, vec![clause!("NO_COND"); 9]).unwrap();
        assert!(matches!(
            encode_condition_list(&nine, &refs),
            Err(ConditionError::TooManyClauses { actual: 9, max: 8 })
        ));

        let bare = ConditionList::new(EvalRule::Nand, Vec::new()).unwrap();
        assert!(matches!(
            encode_condition_list(&bare, &refs),
            Err(ConditionError::NoClauses { rule: EvalRule::Nand })
        ));

        let err = encode_condition_list(
            &ConditionList::new(EvalRule::And, vec![clause!("NO_COND"), clause!("COND_NPC_TYPE")]).unwrap(),
            &refs,
        )
        .unwrap_err();
        assert!(matches!(err, ConditionError::Clause { index: 2, .. }));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            Condition::decode([0x09, 0, 0, 0, 0]),
            Err(DecodeError::UnknownOpcode(_))
        ));
        assert!(matches!(
            Condition::decode([0x01, 0x00, 0x05, 0x01, 0x00]),
            Err(DecodeError::UnknownCode { table: "attribute", value: 0x05 })
        ));
        assert!(matches!(
            Condition::decode([0x07, 0x01, 0x02, 0x01, 0xFF]),
            Err(DecodeError::NonCanonical(_))
        ));
    }
}
