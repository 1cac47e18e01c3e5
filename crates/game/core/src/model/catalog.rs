use crate::registry::SlotClass;

/// Inventory item; only its slot compatibility matters to the compiler.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot: SlotClass,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
}
