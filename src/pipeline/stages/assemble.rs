//! Distribution directory assembly.
//!
//! Recreates `<output_dir>/<dist_name>/` from the manifest on every run, so
//! nothing from a previous run survives into the archive.

use crate::pipeline::{
    ArtifactKind, BuildArtifact, BuildResult, Effect, PackageManifest, Stage,
    error::{Error, Result},
    utils::fs,
};
use glob::Pattern;
use std::path::{Path, PathBuf};

/// Stage every manifest artifact into the distribution directory.
///
/// Required artifacts are checked before the directory is touched. If one
/// is missing, any distribution directory left by an earlier run is removed
/// so that no stale directory can pass for a complete package.
///
/// # Returns
///
/// A result whose output path is the distribution directory. Missing
/// optional artifacts are listed in its `warnings`.
///
/// # Errors
///
/// [`Error::Packaging`] if a required artifact is missing or a resource
/// pattern is invalid.
pub async fn assemble(manifest: &PackageManifest, output_dir: &Path) -> Result<BuildResult> {
    let dist_dir = manifest.dist_dir(output_dir);
    log::info!("Creating package structure in {}", dist_dir.display());

    let missing = manifest.missing_required();
    if !missing.is_empty() {
        if fs::remove_dir_all(&dist_dir).await? {
            log::debug!("removed incomplete {}", dist_dir.display());
        }
        let names: Vec<_> = missing
            .iter()
            .map(|a| a.source.display().to_string())
            .collect();
        return Err(Error::Packaging(format!(
            "required artifact(s) missing: {}",
            names.join(", ")
        )));
    }

    let mut effects = Vec::new();
    let mut warnings = Vec::new();
    fs::create_dir_all(&dist_dir, true, &mut effects).await?;

    for artifact in &manifest.artifacts {
        if !artifact.is_present() {
            if artifact.required {
                return Err(Error::Packaging(format!(
                    "required artifact disappeared during assembly: {}",
                    artifact.source.display()
                )));
            }
            let warning = format!("Missing: {}", artifact.source.display());
            log::warn!("⚠️  {}", warning);
            warnings.push(warning);
            effects.push(Effect::SkippedMissing(artifact.source.clone()));
            continue;
        }

        let dest = dist_dir.join(&artifact.dest);
        match artifact.kind {
            ArtifactKind::ResourceDirectory => {
                let copied = copy_resources(artifact, &dest, &mut effects).await?;
                log::info!("✓ Copied {} resource file(s) to {}", copied, dest.display());
            }
            kind => {
                fs::copy_file(&artifact.source, &dest, &mut effects).await?;
                if kind.is_executable() {
                    fs::set_executable(&dest, &mut effects).await?;
                }
                log::info!(
                    "✓ Copied: {} → {}",
                    artifact.source.display(),
                    dest.display()
                );
            }
        }
    }

    log::info!("📦 Package created in: {}", dist_dir.display());

    Ok(BuildResult::success(
        Stage::Assemble,
        format!("assembled {}", dist_dir.display()),
    )
    .with_output(dist_dir)
    .with_effects(effects)
    .with_warnings(warnings))
}

/// Copy files directly inside a resource directory whose names match the
/// artifact's patterns. No patterns means every regular file.
///
/// Returns the number of files copied.
async fn copy_resources(
    artifact: &BuildArtifact,
    dest: &Path,
    effects: &mut Vec<Effect>,
) -> Result<usize> {
    let patterns = artifact
        .patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .map_err(|e| Error::Packaging(format!("invalid resource pattern '{}': {}", p, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    let matching = matching_files(&artifact.source, &patterns)?;

    fs::create_dir_all(dest, false, effects).await?;
    for file in &matching {
        let name = file.file_name().unwrap_or_default();
        fs::copy_file(file, &dest.join(name), effects).await?;
    }
    Ok(matching.len())
}

/// Regular files at the top of `dir` whose names match any of `patterns`,
/// sorted by name.
fn matching_files(dir: &Path, patterns: &[Pattern]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if patterns.is_empty() || patterns.iter().any(|p| p.matches(&name)) {
            files.push(entry.into_path());
        } else {
            log::debug!("skipping non-resource file {}", entry.path().display());
        }
    }

    Ok(files)
}
