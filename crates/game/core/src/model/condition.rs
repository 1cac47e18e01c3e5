use core::fmt;

use super::CapacityExceeded;
use crate::registry::EvalRule;

/// One authored clause parameter: a registry key or an integer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Param {
    Int(i64),
    Key(String),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Key(key) => write!(f, "`{key}`"),
        }
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Key(value.to_owned())
    }
}

/// Authored clause: the condition kind key followed by its parameters.
///
/// Clauses stay untyped until the condition encoder parses them, so a
/// malformed clause surfaces as a validation failure naming the clause and
/// parameter instead of a load error.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ConditionClause(pub Vec<Param>);

impl ConditionClause {
    pub fn new(params: impl IntoIterator<Item = Param>) -> Self {
        Self(params.into_iter().collect())
    }
}

/// Builds a [`ConditionClause`] from a kind key and parameters.
#[macro_export]
macro_rules! clause {
    ($kind:literal $(, $param:expr)* $(,)?) => {
        $crate::model::ConditionClause::new([
            $crate::model::Param::from($kind)
            $(, $crate::model::Param::from($param))*
        ])
    };
}

/// Authored condition list: evaluation rule, declared clause count, clauses.
///
/// The default is the empty list, which encodes as `[0x00, 0x00]`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConditionList {
    pub rule: EvalRule,
    pub count: u8,
    pub clauses: Vec<ConditionClause>,
}

impl ConditionList {
    /// List whose declared count matches its clauses.
    ///
    /// Fails when the count does not fit its byte; the encoder separately
    /// caps lists at [`crate::config::FormatLimits::MAX_REQUIREMENTS`] clauses.
    pub fn new(rule: EvalRule, clauses: Vec<ConditionClause>) -> Result<Self, CapacityExceeded> {
        let count = u8::try_from(clauses.len()).map_err(|_| CapacityExceeded {
            capacity: usize::from(u8::MAX),
            len: clauses.len(),
        })?;
        Ok(Self {
            rule,
            count,
            clauses,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rule == EvalRule::Empty && self.clauses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_follows_clauses() {
        let list = ConditionList::new(EvalRule::Or, vec![clause!("COND_NO_MONSTERS"); 3]).unwrap();
        assert_eq!(list.count, 3);
        assert!(!list.is_empty());
        assert!(ConditionList::new(EvalRule::Empty, Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn count_must_fit_a_byte() {
        let full = ConditionList::new(EvalRule::And, vec![clause!("NO_COND"); 255]).unwrap();
        assert_eq!(full.count, 255);

        let err = ConditionList::new(EvalRule::And, vec![clause!("NO_COND"); 256]).unwrap_err();
        assert_eq!(
            err,
            CapacityExceeded {
                capacity: 255,
                len: 256
            }
        );
    }
}
