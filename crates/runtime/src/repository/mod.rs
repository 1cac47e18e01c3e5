//! Destinations for finished datafiles.
//!
//! Sinks only ever receive a complete, already encoded artifact set; nothing
//! is handed to a sink while encoding can still fail.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileDatafileSink;
pub use memory::InMemoryDatafileSink;
pub use traits::DatafileSink;
