//! Pipeline stages.
//!
//! Each stage reads the filesystem outputs of the previous one and owns the
//! paths it writes:
//!
//! - [`provision`] - external tool environment
//! - [`compile`] - `<project>/<dist_dir>/<name>`
//! - [`installer`] - `<output>/install_<platform>.sh`
//! - [`assemble`] - `<output>/<name>-<platform>/`
//! - [`archive`] - `<output>/<name>-<platform>-v<version>.tar.gz`

pub mod archive;
pub mod assemble;
pub mod compile;
pub mod installer;
pub mod provision;
