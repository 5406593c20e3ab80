//! Release packaging pipeline.
//!
//! Turns an interpreter program into an installable distribution in five
//! stages, all communicating through the filesystem:
//!
//! 1. provision the external compiler/bundler
//! 2. compile a single-file executable
//! 3. synthesize the installer script
//! 4. assemble the distribution directory
//! 5. archive it as `.tar.gz`
//!
//! # Example
//!
//! ```no_run
//! use distpack::pipeline::{PackageSettings, Pipeline, SettingsBuilder};
//!
//! # async fn example() -> distpack::pipeline::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .package_settings(PackageSettings {
//!         name: "minipy".into(),
//!         version: "1.0.0".into(),
//!         ..Default::default()
//!     })
//!     .entry_point("minipy_interpreter.py")
//!     .build()?;
//!
//! let report = Pipeline::new(settings).run().await;
//! print!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod manifest;
pub mod process;
pub mod result;
pub mod settings;
pub mod stages;
pub mod utils;

pub use builder::{Pipeline, PipelineReport, PipelineState};
pub use error::{Error, Result};
pub use manifest::{ArtifactKind, BuildArtifact, PackageManifest};
pub use process::{CommandOutcome, CommandRunner, SystemRunner};
pub use result::{BuildResult, Effect, Stage};
pub use settings::{
    CompilerSettings, DocumentFile, InstallerSettings, PackageSettings, ResourceMapping,
    ResourceSettings, Settings, SettingsBuilder, TargetPlatform,
};
