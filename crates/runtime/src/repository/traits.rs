//! Sink contract for persisting compiled datafiles.

use super::Result;
use crate::artifact::Artifact;

/// Receives the finished artifacts of one run.
///
/// Implementations replace any existing file of the same name, and a reader
/// must never observe a half-written artifact.
pub trait DatafileSink: Send + Sync {
    /// Stores one artifact under its name.
    fn write(&self, artifact: &Artifact) -> Result<()>;

    /// Human-readable destination, for logs and summaries.
    fn location(&self) -> String;

    /// Stores every artifact in order, stopping at the first failure.
    fn write_all(&self, artifacts: &[Artifact]) -> Result<()> {
        for artifact in artifacts {
            self.write(artifact)?;
        }
        Ok(())
    }
}
