//! Command line interface for distpack.
//!
//! A single entry point: load the configuration, run the full pipeline,
//! print the summary, and map the outcome to an exit code.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::{
    config,
    error::{CliError, Result},
    pipeline::{BuildResult, Effect, Pipeline, PipelineReport, Stage},
};
use anyhow::Context;
use path_absolutize::Absolutize;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let output = OutputManager::new(args.verbose, args.quiet);
    let project_dir = args.project_dir.absolutize()?.into_owned();
    let config_path = args.config_path();
    log::debug!("Loading configuration from {}", config_path.display());
    let settings = config::load_config(&config_path)
        .and_then(|config| config.into_settings(&project_dir))
        .with_context(|| format!("invalid configuration {}", config_path.display()))?;

    output.section(&format!(
        "📦 {} {} build for {}",
        settings.name(),
        settings.version_tag(),
        settings.platform()
    ))?;

    let mut pipeline = Pipeline::new(settings);
    let report = pipeline.run().await;
    print_report(&output, &report)?;

    Ok(report.exit_code())
}

fn print_report(output: &OutputManager, report: &PipelineReport) -> std::io::Result<()> {
    for result in &report.results {
        let stage = result.stage.map(Stage::name).unwrap_or("pipeline");
        let elapsed = result
            .elapsed
            .map(|d| format!(" ({:.1}s)", d.as_secs_f64()))
            .unwrap_or_default();
        if result.success {
            output.success(&format!("{}: {}{}", stage, result.message, elapsed))?;
        } else {
            output.error(&format!("{}: {}{}", stage, result.message, elapsed))?;
        }
        print_effects(output, result)?;
    }

    if report.success() {
        output.block("\n")?;
        output.block(&report.summary())
    } else {
        output.error_block(&report.summary())
    }
}

fn print_effects(output: &OutputManager, result: &BuildResult) -> std::io::Result<()> {
    for effect in &result.effects {
        let line = match effect {
            Effect::CreatedDir(p) => format!("mkdir {}", p.display()),
            Effect::RemovedDir(p) => format!("rm -r {}", p.display()),
            Effect::RemovedFile(p) => format!("rm {}", p.display()),
            Effect::WroteFile(p) => format!("write {}", p.display()),
            Effect::CopiedFile { from, to } => format!("cp {} {}", from.display(), to.display()),
            Effect::SetExecutable(p) => format!("chmod 755 {}", p.display()),
            Effect::RanCommand(c) => format!("run {}", c),
            Effect::SkippedMissing(p) => format!("skip {}", p.display()),
        };
        output.verbose(&line)?;
    }
    Ok(())
}
