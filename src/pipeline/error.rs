//! Error types for pipeline stages.
//!
//! Every stage failure is fatal to the pipeline. The five stage variants map
//! one-to-one onto the stage that raised them; the remaining variants are
//! infrastructure failures that stages wrap with context before returning.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while running pipeline stages.
#[derive(Debug, Error)]
pub enum Error {
    /// The external tool could not be installed or is still unavailable.
    #[error("provisioning failed: {0}")]
    Provisioning(String),

    /// The external compiler exited unsuccessfully.
    #[error("compilation failed: {0}")]
    Compilation(String),

    /// A stage reported success but its declared output is absent.
    #[error("expected artifact missing: {}", path.display())]
    ArtifactMissing {
        /// Path that should exist
        path: PathBuf,
    },

    /// A required artifact was missing at assembly time.
    #[error("packaging failed: {0}")]
    Packaging(String),

    /// The archive could not be written.
    #[error("archive creation failed: {0}")]
    Archive(String),

    /// A subprocess could not be spawned at all.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Program that was invoked
        command: String,
        /// Underlying spawn error
        error: std::io::Error,
    },

    /// Template registration or rendering failed.
    #[error("template error: {0}")]
    Template(String),

    /// I/O error with the operation and path that caused it.
    #[error("{context} ({}): {error}", path.display())]
    Fs {
        /// What was being attempted
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying I/O error
        error: std::io::Error,
    },

    /// Bare I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

/// Adds filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Attach the attempted operation and the path it touched.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Converts `Option`s and foreign errors into [`Error::GenericError`].
pub trait Context<T> {
    /// Attach a message describing what was expected.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Return early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::pipeline::Error::GenericError(format!($($arg)*)))
    };
}
