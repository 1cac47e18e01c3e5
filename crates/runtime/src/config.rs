//! Compiler configuration structures and loaders.
use std::{env, path::PathBuf};

use adventure_content::ContentFactory;
use adventure_core::Target;

/// Settings that shape one compiler run, outside the authored content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Target to build for; `None` leaves the choice to the caller.
    pub target: Option<Target>,
    /// Output directory; `None` uses `<adventure>/out/<suffix>`.
    pub out_dir: Option<PathBuf>,
}

impl CompilerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DATAFILES_TARGET` - Target suffix or name, e.g. `ql` (default: unset)
    /// - `DATAFILES_OUT_DIR` - Output directory (default: `<adventure>/out/<suffix>`)
    ///
    /// An unrecognised target is logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("DATAFILES_TARGET") {
            match raw.parse::<Target>() {
                Ok(target) => config.target = Some(target),
                Err(_) => tracing::warn!(value = %raw, "ignoring unknown DATAFILES_TARGET"),
            }
        }

        config.out_dir = env::var_os("DATAFILES_OUT_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }

    /// Replaces each field `overrides` sets.
    pub fn merge(mut self, overrides: CompilerConfig) -> Self {
        if overrides.target.is_some() {
            self.target = overrides.target;
        }
        if overrides.out_dir.is_some() {
            self.out_dir = overrides.out_dir;
        }
        self
    }

    /// Where datafiles for `target` go when building `factory`'s adventure.
    pub fn out_dir_for(&self, factory: &ContentFactory, target: Target) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| factory.out_dir(target))
    }
}
