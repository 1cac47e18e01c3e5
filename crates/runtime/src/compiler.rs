//! The compiler run: validate, encode everything, then write.
//!
//! ```text
//! Idle -> Validating(1..=10) -> Validated -> Encoding(world)
//!      -> Encoding(story) -> Encoding(characters) -> Written -> Done
//! ```
//!
//! Any failure moves the run to `Aborted`. Artifacts reach the sink only
//! after every one of them has been encoded.
use adventure_core::{
    Adventure, BitmapOracle, CharacterTable, Encoder, EncodingError, Phase, Target, Validated,
    Validator,
};
use strum::IntoEnumIterator;

use crate::{
    artifact::{Artifact, ArtifactReport},
    error::{Result, RunError},
    repository::DatafileSink,
};

/// Encoding stages, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EncodeStage {
    World,
    Story,
    /// NPC and monster records plus the sprite sheets they reference.
    Characters,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompilerState {
    Idle,
    Validating(Phase),
    Aborted,
    Validated,
    Encoding(EncodeStage),
    Written,
    Done,
}

impl CompilerState {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Aborted | Self::Done)
    }
}

impl core::fmt::Display for CompilerState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Validating(phase) => write!(f, "validating {phase}"),
            Self::Aborted => f.write_str("aborted"),
            Self::Validated => f.write_str("validated"),
            Self::Encoding(stage) => write!(f, "encoding {stage}"),
            Self::Written => f.write_str("written"),
            Self::Done => f.write_str("done"),
        }
    }
}

/// Content counts of a validated adventure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckSummary {
    pub locations: usize,
    pub texts: usize,
    pub characters: usize,
    pub bitmaps: usize,
}

impl CheckSummary {
    fn of(validated: &Validated<'_>) -> Self {
        let adventure = validated.adventure();
        Self {
            locations: adventure.world.len(),
            texts: adventure.story.len(),
            characters: CharacterTable::iter()
                .map(|table| adventure.characters(table).len())
                .sum(),
            bitmaps: validated.bitmaps().len(),
        }
    }
}

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub target: Target,
    pub destination: String,
    pub content: CheckSummary,
    /// Every written file, in write order.
    pub artifacts: Vec<ArtifactReport>,
}

impl RunSummary {
    pub fn total_bytes(&self) -> usize {
        self.artifacts.iter().map(|artifact| artifact.bytes).sum()
    }

    pub fn artifact(&self, name: &str) -> Option<&ArtifactReport> {
        self.artifacts.iter().find(|artifact| artifact.name == name)
    }
}

/// Drives one adventure through validation, encoding and output.
pub struct Compiler {
    target: Target,
    state: CompilerState,
    history: Vec<CompilerState>,
}

impl Compiler {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            state: CompilerState::Idle,
            history: vec![CompilerState::Idle],
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn state(&self) -> CompilerState {
        self.state
    }

    /// Every state of the latest run, starting with `Idle`.
    pub fn history(&self) -> &[CompilerState] {
        &self.history
    }

    /// Validates without encoding or writing anything.
    pub fn check(
        &mut self,
        adventure: &Adventure,
        oracle: &dyn BitmapOracle,
    ) -> Result<CheckSummary> {
        self.reset();
        let validated = self.validate(adventure, oracle)?;
        let summary = CheckSummary::of(&validated);
        self.transition(CompilerState::Done);
        Ok(summary)
    }

    /// Full run: validate, encode every artifact, then hand them to `sink`.
    pub fn run(
        &mut self,
        adventure: &Adventure,
        oracle: &dyn BitmapOracle,
        sink: &dyn DatafileSink,
    ) -> Result<RunSummary> {
        self.reset();
        let validated = self.validate(adventure, oracle)?;
        let content = CheckSummary::of(&validated);
        let artifacts = self.encode(&validated)?;

        if let Err(err) = sink.write_all(&artifacts) {
            self.transition(CompilerState::Aborted);
            return Err(err.into());
        }
        self.transition(CompilerState::Written);

        let reports: Vec<ArtifactReport> = artifacts.iter().map(ArtifactReport::from).collect();
        for report in &reports {
            tracing::info!(
                file = %report.name,
                bytes = report.bytes,
                records = report.records,
                sha256 = %report.sha256,
                "datafile written"
            );
        }
        self.transition(CompilerState::Done);

        Ok(RunSummary {
            target: self.target,
            destination: sink.location(),
            content,
            artifacts: reports,
        })
    }

    fn reset(&mut self) {
        self.state = CompilerState::Idle;
        self.history.clear();
        self.history.push(CompilerState::Idle);
    }

    fn transition(&mut self, next: CompilerState) {
        tracing::debug!(from = %self.state, to = %next, "compiler transition");
        self.state = next;
        self.history.push(next);
    }

    fn validate<'a>(
        &mut self,
        adventure: &'a Adventure,
        oracle: &'a dyn BitmapOracle,
    ) -> Result<Validated<'a>> {
        let outcome = Validator::new(adventure, oracle)
            .run_observed(|phase, _| self.transition(CompilerState::Validating(phase)));
        match outcome {
            Ok(validated) => {
                self.transition(CompilerState::Validated);
                Ok(validated)
            }
            Err(failure) => {
                tracing::warn!(
                    phase = failure.phase.as_str(),
                    errors = failure.errors.len(),
                    "validation failed"
                );
                self.transition(CompilerState::Aborted);
                Err(failure.into())
            }
        }
    }

    fn encode(&mut self, validated: &Validated<'_>) -> Result<Vec<Artifact>> {
        let encoder = Encoder::new(validated);
        let mut artifacts = Vec::new();
        for stage in EncodeStage::iter() {
            self.transition(CompilerState::Encoding(stage));
            if let Err(source) = encode_stage(&encoder, stage, &mut artifacts) {
                self.transition(CompilerState::Aborted);
                return Err(RunError::Encoding { stage, source });
            }
        }
        tracing::info!(
            platform = %self.target,
            artifacts = artifacts.len(),
            "encoding complete"
        );
        Ok(artifacts)
    }
}

fn encode_stage(
    encoder: &Encoder<'_>,
    stage: EncodeStage,
    artifacts: &mut Vec<Artifact>,
) -> std::result::Result<(), EncodingError> {
    match stage {
        EncodeStage::World => artifacts.extend(Artifact::pair(&encoder.world()?)),
        EncodeStage::Story => artifacts.extend(Artifact::pair(&encoder.story()?)),
        EncodeStage::Characters => {
            for table in CharacterTable::iter() {
                if let Some(file) = encoder.characters(table)? {
                    artifacts.extend(Artifact::pair(&file));
                }
            }
            artifacts.extend(encoder.sprites()?.iter().map(Artifact::sheet));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_names() {
        assert_eq!(
            CompilerState::Validating(Phase::Exits).to_string(),
            "validating phase 5 (exits)"
        );
        assert_eq!(
            CompilerState::Encoding(EncodeStage::Characters).to_string(),
            "encoding characters"
        );
        assert!(CompilerState::Aborted.is_terminal());
        assert!(!CompilerState::Validated.is_terminal());
    }

    #[test]
    fn new_compiler_is_idle() {
        let compiler = Compiler::new(Target::SinclairQl);
        assert_eq!(compiler.state(), CompilerState::Idle);
        assert_eq!(compiler.history(), [CompilerState::Idle]);
    }
}
