use core::fmt;

macro_rules! content_id {
    ($(#[$meta:meta])* $name:ident($repr:ty), $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub $repr);

        impl $name {
            /// Wire value the engine reads as "none".
            pub const NONE: $repr = 0;

            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $repr {
                self.0
            }

            /// Returns true for the value reserved as the wire "none" sentinel.
            pub const fn is_reserved(self) -> bool {
                self.0 == Self::NONE
            }

            /// Wire encoding of an optional reference.
            pub fn wire(id: Option<Self>) -> $repr {
                id.map_or(Self::NONE, Self::get)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, " {}"), self.0)
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }
    };
}

content_id!(
    /// Map node identifier.
    LocationId(u16),
    "location"
);
content_id!(
    /// Story text identifier.
    TextId(u16),
    "text"
);
content_id!(
    /// Character identifier, unique within its own table (party, NPC or monster).
    CharacterId(u8),
    "character"
);
content_id!(ItemId(u8), "item");
content_id!(WeaponId(u8), "weapon");
