//! Tool provisioning.
//!
//! Makes sure the external compiler/bundler is usable before anything is
//! compiled, installing it through the configured package installer when it
//! is missing. A failed install is never retried.

use crate::pipeline::{
    BuildResult, Effect, Settings, Stage,
    error::{Error, Result},
    process::{CommandRunner, display_command},
};

/// Ensure the configured tool is available.
///
/// # Process
///
/// 1. Probe the tool (probe command, or `PATH` lookup)
/// 2. If absent, run the install command
/// 3. Probe again; the installer's exit code alone is not proof
///
/// # Errors
///
/// [`Error::Provisioning`] if the tool is missing and cannot be installed.
pub async fn ensure<R: CommandRunner>(settings: &Settings, runner: &R) -> Result<BuildResult> {
    let tool = &settings.compiler().tool;
    let mut effects = Vec::new();

    if is_available(settings, runner, &mut effects).await {
        log::info!("✓ {} already installed", tool);
        return Ok(BuildResult::success(
            Stage::Provision,
            format!("{} already installed", tool),
        )
        .with_effects(effects));
    }

    let install = settings.compiler().install.as_deref().ok_or_else(|| {
        Error::Provisioning(format!(
            "{} is not installed and no install command is configured",
            tool
        ))
    })?;
    let (program, args) = install
        .split_first()
        .ok_or_else(|| Error::Provisioning("install command is empty".into()))?;

    log::info!("Installing {}...", tool);
    let command = display_command(program, args);
    let outcome = runner
        .run(program, args, settings.project_dir())
        .await
        .map_err(|e| Error::Provisioning(format!("could not run `{}`: {}", command, e)))?;
    effects.push(Effect::RanCommand(command.clone()));

    if !outcome.success() {
        return Err(Error::Provisioning(format!(
            "`{}` exited with code {:?}",
            command, outcome.code
        )));
    }

    if !is_available(settings, runner, &mut effects).await {
        return Err(Error::Provisioning(format!(
            "`{}` succeeded but {} is still not available",
            command, tool
        )));
    }

    log::info!("✓ {} installed successfully", tool);
    Ok(BuildResult::success(Stage::Provision, format!("installed {}", tool)).with_effects(effects))
}

async fn is_available<R: CommandRunner>(
    settings: &Settings,
    runner: &R,
    effects: &mut Vec<Effect>,
) -> bool {
    let compiler = settings.compiler();

    let Some((program, args)) = compiler.probe.as_deref().and_then(<[String]>::split_first) else {
        return runner.locate(&compiler.tool).is_some();
    };

    effects.push(Effect::RanCommand(display_command(program, args)));
    match runner.run(program, args, settings.project_dir()).await {
        Ok(outcome) => outcome.success(),
        Err(e) => {
            log::debug!("probe for {} failed to run: {}", compiler.tool, e);
            false
        }
    }
}
