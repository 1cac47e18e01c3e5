/// Platform a datafile set is built for.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Target {
    #[strum(to_string = "ql", serialize = "sinclair-ql")]
    SinclairQl,
}

impl Target {
    /// Key shown in the interactive selection menu.
    pub const fn menu_key(self) -> &'static str {
        match self {
            Self::SinclairQl => "1",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SinclairQl => "Sinclair QL",
        }
    }

    pub const fn resolution(self) -> &'static str {
        match self {
            Self::SinclairQl => "512x256 4 colour",
        }
    }

    /// Directory suffix used under `bmp/` and `out/`.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::SinclairQl => "ql",
        }
    }

    pub fn from_menu_key(key: &str) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|target| target.menu_key() == key.trim())
    }
}
