//! Story text loader.

use std::collections::BTreeMap;
use std::path::Path;

use adventure_core::TextId;

use crate::loaders::{LoadResult, read_ron};

/// Loader for story text: a RON map of text ID to string.
pub struct StoryLoader;

impl StoryLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<TextId, String>> {
        let story: BTreeMap<TextId, String> = read_ron(path)?;
        tracing::debug!(path = %path.display(), texts = story.len(), "loaded story");
        Ok(story)
    }
}
