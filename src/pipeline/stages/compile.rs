//! Single-file executable compilation.
//!
//! Drives the external compiler/bundler and then checks its work: a zero
//! exit code is not accepted as proof that the executable was written.

use crate::pipeline::{
    BuildResult, Effect, ResourceMapping, Settings, Stage,
    error::{Error, ErrorExt, Result},
    process::{CommandRunner, display_command},
    utils::fs,
};
use std::path::Path;

/// Build the argument list for the external tool.
///
/// Single-file output, named binary, console mode, one `--add-data` per
/// resource mapping and one `--hidden-import` per module, then the entry
/// point. `--distpath` is only passed when the output directory differs from
/// the tool's default.
pub fn tool_args(
    entry_point: &Path,
    resources: &[ResourceMapping],
    hidden_imports: &[String],
    output_name: &str,
    dist_dir: &Path,
) -> Vec<String> {
    let mut args = vec![
        "--onefile".to_string(),
        format!("--name={}", output_name),
        "--console".to_string(),
    ];

    if dist_dir != Path::new("dist") {
        args.push(format!("--distpath={}", dist_dir.display()));
    }

    args.extend(resources.iter().map(|r| format!("--add-data={}", r.as_arg())));
    args.extend(hidden_imports.iter().map(|m| format!("--hidden-import={}", m)));
    args.push(entry_point.display().to_string());
    args
}

/// Compile the entry point into a single executable.
///
/// # Process
///
/// 1. Check the entry point exists
/// 2. Remove the executable left by a previous run
/// 3. Run the tool from the project directory
/// 4. Verify the executable exists at the expected path
/// 5. Set the executable bit explicitly
///
/// # Returns
///
/// A result whose output path is the compiled executable.
///
/// # Errors
///
/// - [`Error::Compilation`] if the entry point is missing or the tool fails
/// - [`Error::ArtifactMissing`] if the tool succeeded without producing output
pub async fn compile<R: CommandRunner>(settings: &Settings, runner: &R) -> Result<BuildResult> {
    let compiler = settings.compiler();
    let entry_point = settings.entry_point_path();

    if !entry_point.is_file() {
        return Err(Error::Compilation(format!(
            "entry point not found: {}",
            entry_point.display()
        )));
    }

    log::info!("Building {} executable...", settings.name());

    let args = tool_args(
        &compiler.entry_point,
        &compiler.resources,
        &compiler.hidden_imports,
        settings.name(),
        &compiler.dist_dir,
    );
    let command = display_command(&compiler.tool, &args);

    // A binary from an earlier run must not satisfy the output check below.
    let binary = settings.compiled_binary_path();
    let mut effects = Vec::new();
    fs::remove_file(&binary, &mut effects).await?;

    let outcome = runner
        .run(&compiler.tool, &args, settings.project_dir())
        .await
        .map_err(|e| Error::Compilation(e.to_string()))?;
    effects.push(Effect::RanCommand(command));

    if !outcome.success() {
        return Err(Error::Compilation(format!(
            "{} exited with code {:?}",
            compiler.tool, outcome.code
        )));
    }

    if !binary.is_file() {
        return Err(Error::ArtifactMissing { path: binary });
    }

    let size = tokio::fs::metadata(&binary)
        .await
        .fs_context("reading executable metadata", &binary)?
        .len();
    log::info!(
        "📦 Executable size: {:.1} MB",
        size as f64 / (1024.0 * 1024.0)
    );

    fs::set_executable(&binary, &mut effects).await?;
    log::info!("✓ Built {}", binary.display());

    Ok(BuildResult::success(
        Stage::Compile,
        format!("built {} ({} bytes)", binary.display(), size),
    )
    .with_output(binary)
    .with_effects(effects))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_args_follow_declared_order() {
        let args = tool_args(
            Path::new("minipy_interpreter.py"),
            &[ResourceMapping::new("examples", "examples")],
            &["colorama".to_string()],
            "minipy",
            Path::new("dist"),
        );
        assert_eq!(
            args,
            vec![
                "--onefile",
                "--name=minipy",
                "--console",
                "--add-data=examples:examples",
                "--hidden-import=colorama",
                "minipy_interpreter.py",
            ]
        );
    }

    #[test]
    fn tool_args_pass_custom_dist_dir() {
        let args = tool_args(Path::new("a.py"), &[], &[], "a", Path::new("out/bin"));
        assert!(args.contains(&"--distpath=out/bin".to_string()));
    }
}
