//! Main pipeline orchestration.
//!
//! This module provides the [`Pipeline`] orchestrator that runs the stages
//! in dependency order and stops at the first failure.

use super::checksum::calculate_sha256;
use crate::pipeline::{
    BuildResult, Settings, Stage,
    error::{Error, Result},
    process::{CommandRunner, SystemRunner},
    stages::{archive, assemble, compile, installer, provision},
};
use path_absolutize::Absolutize;
use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
    time::Instant,
};

/// Where a pipeline run currently is.
///
/// Advances one stage at a time on success; any stage failure jumps to
/// [`PipelineState::Failed`]. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    NotStarted,
    Provisioning,
    Compiling,
    Synthesizing,
    Assembling,
    Archiving,
    Done,
    Failed,
}

impl PipelineState {
    /// State while `stage` is executing.
    pub fn running(stage: Stage) -> Self {
        match stage {
            Stage::Provision => PipelineState::Provisioning,
            Stage::Compile => PipelineState::Compiling,
            Stage::Synthesize => PipelineState::Synthesizing,
            Stage::Assemble => PipelineState::Assembling,
            Stage::Archive => PipelineState::Archiving,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed)
    }
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Terminal state reached.
    pub state: PipelineState,
    /// One result per stage that ran, in order. The last one is the failure
    /// when the run failed.
    pub results: Vec<BuildResult>,
    /// First failing stage result, or the synthesized overall success.
    pub overall: BuildResult,
    pub dist_dir: Option<PathBuf>,
    pub archive: Option<PathBuf>,
    /// SHA-256 of the archive.
    pub checksum: Option<String>,
}

impl PipelineReport {
    pub fn success(&self) -> bool {
        self.state == PipelineState::Done
    }

    /// Stage that stopped the run, if any.
    pub fn failed_stage(&self) -> Option<Stage> {
        if self.overall.success {
            None
        } else {
            self.overall.stage
        }
    }

    /// Process exit code: 0 on success, 1 on any stage failure.
    pub fn exit_code(&self) -> i32 {
        if self.success() { 0 } else { 1 }
    }

    /// Warnings collected from every stage.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .flat_map(|r| r.warnings.iter().map(String::as_str))
    }

    /// Human-readable summary of the run.
    pub fn summary(&self) -> String {
        let mut out = String::new();

        if let Some(stage) = self.failed_stage() {
            let _ = writeln!(out, "❌ {} stage failed: {}", stage, self.overall.message);
            let _ = writeln!(
                out,
                "Artifacts produced by earlier stages were left on disk for inspection."
            );
            return out;
        }

        let _ = writeln!(out, "🎉 Build complete!");
        if let Some(dir) = &self.dist_dir {
            let _ = writeln!(out, "📦 Package directory: {}/", display_absolute(dir));
        }
        if let Some(archive) = &self.archive {
            let _ = writeln!(out, "📦 Distribution file: {}", display_absolute(archive));
        }
        if let Some(checksum) = &self.checksum {
            let _ = writeln!(out, "🔒 SHA256: {}", checksum);
        }
        for warning in self.warnings() {
            let _ = writeln!(out, "⚠️  {}", warning);
        }
        out
    }
}

fn display_absolute(path: &Path) -> String {
    path.absolutize()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

/// Main pipeline orchestrator.
///
/// Runs provision → compile → synthesize → assemble → archive strictly in
/// order. A stage starts only after the previous stage's result is known,
/// and nothing runs after a failure.
///
/// Precondition: one run per output directory at a time. Concurrent runs
/// race on the same paths; this is not guarded against.
///
/// # Examples
///
/// ```no_run
/// use distpack::pipeline::{Pipeline, Settings};
///
/// # async fn example(settings: Settings) {
/// let mut pipeline = Pipeline::new(settings);
/// let report = pipeline.run().await;
/// println!("{}", report.summary());
/// std::process::exit(report.exit_code());
/// # }
/// ```
#[derive(Debug)]
pub struct Pipeline<R = SystemRunner> {
    settings: Settings,
    runner: R,
    state: PipelineState,
    checksum: Option<String>,
}

impl Pipeline<SystemRunner> {
    /// Creates a pipeline that runs real subprocesses.
    pub fn new(settings: Settings) -> Self {
        Self::with_runner(settings, SystemRunner)
    }
}

impl<R: CommandRunner> Pipeline<R> {
    /// Creates a pipeline with a custom command runner.
    pub fn with_runner(settings: Settings, runner: R) -> Self {
        Self {
            settings,
            runner,
            state: PipelineState::NotStarted,
            checksum: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Runs every stage and reports the outcome.
    ///
    /// Running again starts over from [`PipelineState::NotStarted`]; outputs
    /// of the previous run are overwritten, not appended to.
    pub async fn run(&mut self) -> PipelineReport {
        self.state = PipelineState::NotStarted;
        self.checksum = None;
        let mut results: Vec<BuildResult> = Vec::new();

        for stage in Stage::ORDER {
            self.state = PipelineState::running(stage);
            log::info!("==> {}", stage);
            let started = Instant::now();

            match self.run_stage(stage, &results).await {
                Ok(result) => {
                    log::debug!("{} finished: {}", stage, result.message);
                    results.push(result.with_elapsed(started.elapsed()));
                }
                Err(e) => {
                    log::error!("{} stage failed: {}", stage, e);
                    self.state = PipelineState::Failed;
                    let failure =
                        BuildResult::failure(stage, &e).with_elapsed(started.elapsed());
                    results.push(failure.clone());
                    return self.report(results, failure);
                }
            }
        }

        self.state = PipelineState::Done;
        let overall = BuildResult::overall_success(format!(
            "{} {} packaged for {}",
            self.settings.name(),
            self.settings.version_tag(),
            self.settings.platform()
        ));
        self.report(results, overall)
    }

    async fn run_stage(&mut self, stage: Stage, previous: &[BuildResult]) -> Result<BuildResult> {
        let settings = &self.settings;
        match stage {
            Stage::Provision => provision::ensure(settings, &self.runner).await,
            Stage::Compile => compile::compile(settings, &self.runner).await,
            Stage::Synthesize => installer::synthesize(settings, settings.platform()).await,
            Stage::Assemble => {
                assemble::assemble(&settings.package_manifest(), settings.output_dir()).await
            }
            Stage::Archive => {
                let manifest = settings.package_manifest();
                let dist_dir = output_of(previous, Stage::Assemble)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| manifest.dist_dir(settings.output_dir()));

                let mut result = archive::build(&dist_dir, &manifest.archive_name()).await?;
                if let Some(path) = result.output_path() {
                    let checksum = archive_checksum(path).await?;
                    result.message = format!("{} sha256:{}", result.message, checksum);
                    self.checksum = Some(checksum);
                }
                Ok(result)
            }
        }
    }

    fn report(&self, results: Vec<BuildResult>, overall: BuildResult) -> PipelineReport {
        let dist_dir = output_of(&results, Stage::Assemble).map(Path::to_path_buf);
        let archive = output_of(&results, Stage::Archive).map(Path::to_path_buf);

        PipelineReport {
            state: self.state,
            results,
            overall,
            dist_dir,
            archive,
            checksum: self.checksum.clone(),
        }
    }
}

/// SHA-256 of the written archive. Read failures count as archive failures.
async fn archive_checksum(path: &Path) -> Result<String> {
    calculate_sha256(path)
        .await
        .map_err(|e| Error::Archive(e.to_string()))
}

fn output_of(results: &[BuildResult], stage: Stage) -> Option<&Path> {
    results
        .iter()
        .find(|r| r.stage == Some(stage) && r.success)
        .and_then(BuildResult::output_path)
}
