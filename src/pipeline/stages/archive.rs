//! Distribution archive creation.
//!
//! Writes a `.tar.gz` whose only top-level entry is the distribution
//! directory. Output is reproducible: entries are appended in sorted order
//! with deterministic tar headers and a gzip header without timestamp or
//! file name, so unchanged inputs give a byte-identical archive.

use crate::pipeline::{
    BuildResult, Effect, Stage,
    error::{Error, Result},
};
use flate2::{Compression, GzBuilder};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Compress `dist_dir` into `<parent of dist_dir>/<archive_name>`.
///
/// Extraction yields a single folder named after `dist_dir`.
///
/// # Errors
///
/// [`Error::Archive`] on any I/O failure. The distribution directory is
/// left in place either way.
pub async fn build(dist_dir: &Path, archive_name: &str) -> Result<BuildResult> {
    log::info!("🗜️  Creating distribution tarball...");

    if !dist_dir.is_dir() {
        return Err(Error::Archive(format!(
            "distribution directory not found: {}",
            dist_dir.display()
        )));
    }
    let archive_path = dist_dir
        .parent()
        .map(|p| p.join(archive_name))
        .ok_or_else(|| Error::Archive(format!("{} has no parent", dist_dir.display())))?;

    let (src, dest) = (dist_dir.to_path_buf(), archive_path.clone());
    tokio::task::spawn_blocking(move || write_archive(&src, &dest))
        .await
        .map_err(|e| Error::Archive(format!("archive task panicked: {}", e)))?
        .map_err(|e| Error::Archive(format!("{}: {}", archive_path.display(), e)))?;

    let size = tokio::fs::metadata(&archive_path)
        .await
        .map_err(|e| Error::Archive(format!("{}: {}", archive_path.display(), e)))?
        .len();
    log::info!(
        "✓ Tarball created: {} ({:.1} MB)",
        archive_path.display(),
        size as f64 / (1024.0 * 1024.0)
    );

    Ok(BuildResult::success(
        Stage::Archive,
        format!("wrote {} ({} bytes)", archive_path.display(), size),
    )
    .with_output(archive_path.clone())
    .with_effects(vec![Effect::WroteFile(archive_path)]))
}

fn write_archive(dist_dir: &Path, archive_path: &Path) -> io::Result<()> {
    let root: PathBuf = dist_dir
        .file_name()
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "distribution dir has no name"))?;

    let file = BufWriter::new(File::create(archive_path)?);
    let encoder = GzBuilder::new().write(file, Compression::default());

    let mut builder = tar::Builder::new(encoder);
    builder.mode(tar::HeaderMode::Deterministic);
    builder.follow_symlinks(false);

    for entry in walkdir::WalkDir::new(dist_dir).sort_by_file_name() {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(dist_dir)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        builder.append_path_with_name(entry.path(), root.join(rel))?;
    }

    let encoder = builder.into_inner()?;
    let mut file = encoder.finish()?;
    file.flush()?;
    Ok(())
}
