//! File system utilities for stages.
//!
//! Idempotent directory creation and removal, file copies that create
//! parent directories, and explicit permission setting. Every helper that
//! changes the filesystem records an [`Effect`].

use crate::pipeline::{
    Effect,
    error::{Error, ErrorExt, Result},
};
use std::{io, path::Path};
use tokio::fs;

/// Permission bits for executables and scripts.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Creates all directories of `path`, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool, effects: &mut Vec<Effect>) -> Result<()> {
    if erase && remove_dir_all(path).await? {
        effects.push(Effect::RemovedDir(path.to_path_buf()));
    }

    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)?;
    effects.push(Effect::CreatedDir(path.to_path_buf()));
    Ok(())
}

/// Removes the directory and its contents if it exists.
///
/// Returns whether anything was removed.
pub async fn remove_dir_all(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Fs {
            context: "removing directory",
            path: path.to_path_buf(),
            error: e,
        }),
    }
}

/// Removes a file if it exists, recording the removal.
///
/// Returns whether anything was removed.
pub async fn remove_file(path: &Path, effects: &mut Vec<Effect>) -> Result<bool> {
    match fs::remove_file(path).await {
        Ok(()) => {
            effects.push(Effect::RemovedFile(path.to_path_buf()));
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Fs {
            context: "removing file",
            path: path.to_path_buf(),
            error: e,
        }),
    }
}

/// Copies a regular file, creating parent directories of the destination.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path, effects: &mut Vec<Effect>) -> Result<()> {
    if !from.is_file() {
        return Err(Error::GenericError(format!(
            "{} does not exist or is not a file",
            from.display()
        )));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", to)?;
    effects.push(Effect::CopiedFile {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
    });
    Ok(())
}

/// Writes `content` to `path` and marks it executable.
pub async fn write_executable(path: &Path, content: &str, effects: &mut Vec<Effect>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .fs_context("creating output directory", parent)?;
    }
    fs::write(path, content)
        .await
        .fs_context("writing file", path)?;
    effects.push(Effect::WroteFile(path.to_path_buf()));
    set_executable(path, effects).await
}

/// Sets mode 0o755 on `path`.
///
/// Never assume a producer left the bit set; call this explicitly.
pub async fn set_executable(path: &Path, effects: &mut Vec<Effect>) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, std::fs::Permissions::from_mode(EXECUTABLE_MODE))
            .await
            .fs_context("setting executable permission", path)?;
    }
    effects.push(Effect::SetExecutable(path.to_path_buf()));
    Ok(())
}

/// Whether `path` has any executable bit set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
