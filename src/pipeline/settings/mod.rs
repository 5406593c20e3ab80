//! Configuration structures for pipeline runs.
//!
//! This module provides the configuration types consumed by the stages:
//! package metadata, external compiler settings, installer policy, shipped
//! resources, and a builder that validates them into [`Settings`].

mod builder;
mod compiler;
mod core;
mod installer;
mod package;
mod platform;
mod resources;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use compiler::{CompilerSettings, ResourceMapping};
pub use self::core::Settings;
pub use installer::InstallerSettings;
pub use package::PackageSettings;
pub use platform::TargetPlatform;
pub use resources::{DocumentFile, ResourceSettings};
