//! Release packaging pipeline for interpreter programs
//!
//! This library turns a script-based program into an installable
//! distribution:
//! - a single-file executable built by an external compiler/bundler
//! - a bash installer choosing system or per-user paths at install time
//! - a reproducible `.tar.gz` holding executable, installer, docs and examples
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
pub use pipeline::{Pipeline, PipelineReport, Settings, SettingsBuilder};
