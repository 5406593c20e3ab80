//! Stage outcomes and recorded side effects.

use super::Error;
use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

/// One unit of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Ensure the external compiler/bundler is installed.
    Provision,
    /// Produce the single-file executable.
    Compile,
    /// Render the installer script.
    Synthesize,
    /// Stage the distribution directory.
    Assemble,
    /// Compress the distribution directory.
    Archive,
}

impl Stage {
    /// All stages in execution order.
    pub const ORDER: [Stage; 5] = [
        Stage::Provision,
        Stage::Compile,
        Stage::Synthesize,
        Stage::Assemble,
        Stage::Archive,
    ];

    /// Short lowercase name used in logs and summaries.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Provision => "provision",
            Stage::Compile => "compile",
            Stage::Synthesize => "synthesize",
            Stage::Assemble => "assemble",
            Stage::Archive => "archive",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A side effect performed by a stage.
///
/// Stages record what they touched so callers (and tests) can inspect the
/// effects of a run without re-reading the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CreatedDir(PathBuf),
    RemovedDir(PathBuf),
    RemovedFile(PathBuf),
    WroteFile(PathBuf),
    CopiedFile { from: PathBuf, to: PathBuf },
    SetExecutable(PathBuf),
    RanCommand(String),
    SkippedMissing(PathBuf),
}

/// Outcome of a single stage, or of the whole pipeline.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Stage that produced this result. `None` for the synthesized overall result.
    pub stage: Option<Stage>,
    pub success: bool,
    /// Human-readable diagnostic.
    pub message: String,
    pub elapsed: Option<Duration>,
    pub effects: Vec<Effect>,
    /// Non-fatal problems, e.g. missing optional inputs.
    pub warnings: Vec<String>,
    /// Primary output path of the stage, if it has one.
    pub output: Option<PathBuf>,
}

impl BuildResult {
    /// Successful result for `stage`.
    pub fn success(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage: Some(stage),
            success: true,
            message: message.into(),
            elapsed: None,
            effects: Vec::new(),
            warnings: Vec::new(),
            output: None,
        }
    }

    /// Failed result for `stage` carrying the error's diagnostic.
    pub fn failure(stage: Stage, error: &Error) -> Self {
        Self {
            stage: Some(stage),
            success: false,
            message: error.to_string(),
            elapsed: None,
            effects: Vec::new(),
            warnings: Vec::new(),
            output: None,
        }
    }

    /// Overall result for a pipeline that completed every stage.
    pub fn overall_success(message: impl Into<String>) -> Self {
        Self {
            stage: None,
            success: true,
            message: message.into(),
            elapsed: None,
            effects: Vec::new(),
            warnings: Vec::new(),
            output: None,
        }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn with_effects(mut self, effects: Vec<Effect>) -> Self {
        self.effects = effects;
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    /// Output path as a borrowed `Path`.
    pub fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Whether a `SetExecutable` effect was recorded for `path`.
    pub fn marked_executable(&self, path: &Path) -> bool {
        self.effects
            .iter()
            .any(|e| matches!(e, Effect::SetExecutable(p) if p == path))
    }
}
