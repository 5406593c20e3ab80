//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Release packaging pipeline for interpreter programs
#[derive(Parser, Debug)]
#[command(
    name = "distpack",
    version,
    about = "Release packaging pipeline for interpreter programs",
    long_about = "Builds a single-file executable, an installer script and a distribution tarball.

Reads distpack.toml from the project directory and runs every stage:
provision -> compile -> synthesize -> assemble -> archive

Usage:
  distpack
  distpack --project-dir ./minipy
  distpack --config release/distpack.toml

Exit code 0 = archive guaranteed to exist. Exit code 1 = a stage failed; the
failing stage and its diagnostic are printed and earlier outputs are kept."
)]
pub struct Args {
    /// Project directory containing the entry point, docs and examples
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Configuration file (default: <project-dir>/distpack.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print every file operation and command a stage performed
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Configuration file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.project_dir.join(crate::config::CONFIG_FILE_NAME))
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.project_dir.is_dir() {
            return Err(format!(
                "Project directory does not exist: {}",
                self.project_dir.display()
            ));
        }
        Ok(())
    }
}
