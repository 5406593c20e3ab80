//! External process execution.
//!
//! Stages never spawn processes directly. They go through a [`CommandRunner`]
//! so the external compiler and package installer can be replaced in tests.

use super::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Exit information of a finished subprocess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code, `None` if terminated by a signal.
    pub code: Option<i32>,
}

impl CommandOutcome {
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs programs and locates them on `PATH`.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd` and wait for it to exit.
    ///
    /// There is no timeout; a hung subprocess blocks the caller.
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutcome>;

    /// Resolve `program` to an executable path, if it is installed.
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

/// [`CommandRunner`] backed by real subprocesses.
///
/// Child stdout/stderr are inherited so tool output reaches the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutcome> {
        log::debug!("Running: {}", display_command(program, args));

        let status = tokio::process::Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .await
            .map_err(|error| Error::CommandFailed {
                command: program.to_string(),
                error,
            })?;

        Ok(CommandOutcome {
            code: status.code(),
        })
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        match which::which(program) {
            Ok(path) => {
                log::debug!("Found {} at: {}", program, path.display());
                Some(path)
            }
            Err(e) => {
                log::debug!("{} not found in PATH: {}", program, e);
                None
            }
        }
    }
}

/// Render a command line for logs and effect records.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
