//! Compiler runtime: drives an adventure from loaded content to datafiles.
//!
//! The core crate validates and encodes; this crate sequences those steps
//! and persists the result. Consumers build a [`Compiler`] for a target and
//! call [`Compiler::run`] with a [`DatafileSink`].
//!
//! Modules are organized by responsibility:
//! - [`compiler`] hosts the run state machine and its summaries
//! - [`artifact`] holds encoded files until the whole set is ready
//! - [`repository`] provides the sinks that persist them
//! - [`config`] reads run settings from the environment
pub mod artifact;
pub mod compiler;
pub mod config;
pub mod error;
pub mod repository;

pub use artifact::{Artifact, ArtifactReport};
pub use compiler::{CheckSummary, Compiler, CompilerState, EncodeStage, RunSummary};
pub use config::CompilerConfig;
pub use error::{Result, RunError};
pub use repository::{DatafileSink, FileDatafileSink, InMemoryDatafileSink, RepositoryError};
