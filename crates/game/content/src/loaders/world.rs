//! World map loader.

use std::collections::BTreeMap;
use std::path::Path;

use adventure_core::{Location, LocationId};

use crate::loaders::{LoadResult, read_ron};

/// Loader for the world map: a RON map of location ID to location.
///
/// ```ron
/// {
///     1: (
///         name: "Leafy glade",
///         text: Some(1),
///         exits: (north: (destination: Some(2))),
///     ),
/// }
/// ```
pub struct WorldLoader;

impl WorldLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<LocationId, Location>> {
        let world: BTreeMap<LocationId, Location> = read_ron(path)?;
        tracing::debug!(path = %path.display(), locations = world.len(), "loaded world");
        Ok(world)
    }
}
