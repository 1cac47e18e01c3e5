use std::{collections::BTreeMap, sync::RwLock};

use super::{DatafileSink, RepositoryError, Result};
use crate::artifact::Artifact;

/// In-memory implementation of [`DatafileSink`].
#[derive(Default)]
pub struct InMemoryDatafileSink {
    files: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryDatafileSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let files = self
            .files
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(files.get(name).cloned())
    }

    /// Names of every stored file, sorted.
    pub fn names(&self) -> Result<Vec<String>> {
        let files = self
            .files
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(files.keys().cloned().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().map(|files| files.is_empty()).unwrap_or(true)
    }
}

impl DatafileSink for InMemoryDatafileSink {
    fn write(&self, artifact: &Artifact) -> Result<()> {
        let mut files = self
            .files
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        files.insert(artifact.name.clone(), artifact.bytes.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".into()
    }
}
