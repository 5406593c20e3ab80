//! Core Settings struct and implementations.

use super::{CompilerSettings, InstallerSettings, PackageSettings, ResourceSettings, TargetPlatform};
use crate::pipeline::{ArtifactKind, BuildArtifact, PackageManifest};
use std::path::{Path, PathBuf};

/// Main settings for a pipeline run.
///
/// Central configuration, constructed via [`SettingsBuilder`]. Relative paths
/// in the component settings are resolved against the project directory.
///
/// # Examples
///
/// ```no_run
/// use distpack::pipeline::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> distpack::pipeline::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_dir("/src/minipy")
///     .package_settings(PackageSettings {
///         name: "minipy".into(),
///         version: "1.0.0".into(),
///         ..Default::default()
///     })
///     .entry_point("minipy_interpreter.py")
///     .build()?;
/// assert_eq!(settings.dist_name(), "minipy-linux");
/// # Ok(())
/// # }
/// ```
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    package: PackageSettings,
    compiler: CompilerSettings,
    installer: InstallerSettings,
    resources: ResourceSettings,

    /// Directory holding the entry point, docs and examples.
    project_dir: PathBuf,

    /// Directory receiving the installer script, distribution directory
    /// and archive. Typically the project directory.
    output_dir: PathBuf,

    platform: TargetPlatform,
}

impl Settings {
    /// Returns the program name.
    pub fn name(&self) -> &str {
        &self.package.name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the version tag used in archive names, e.g. `v1.0.0`.
    pub fn version_tag(&self) -> String {
        format!("v{}", self.package.version)
    }

    /// Returns the package description.
    pub fn description(&self) -> &str {
        &self.package.description
    }

    pub fn homepage(&self) -> Option<&str> {
        self.package.homepage.as_deref()
    }

    pub fn platform(&self) -> TargetPlatform {
        self.platform
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn compiler(&self) -> &CompilerSettings {
        &self.compiler
    }

    pub fn installer(&self) -> &InstallerSettings {
        &self.installer
    }

    pub fn resources(&self) -> &ResourceSettings {
        &self.resources
    }

    /// Distribution directory name, `<name>-<platform>`.
    pub fn dist_name(&self) -> String {
        format!("{}-{}", self.package.name, self.platform)
    }

    /// Absolute path of the entry-point program.
    pub fn entry_point_path(&self) -> PathBuf {
        self.project_dir.join(&self.compiler.entry_point)
    }

    /// Where the external tool is expected to leave the executable.
    pub fn compiled_binary_path(&self) -> PathBuf {
        self.project_dir
            .join(&self.compiler.dist_dir)
            .join(&self.package.name)
    }

    /// Where the synthesized installer script is written.
    pub fn installer_script_path(&self) -> PathBuf {
        self.output_dir.join(self.platform.installer_file_name())
    }

    /// Config directory for privileged installs.
    pub fn system_config_dir(&self) -> String {
        self.installer
            .system_config_dir
            .clone()
            .unwrap_or_else(|| format!("/etc/{}", self.package.name))
    }

    /// Config directory for per-user installs, relative to `$HOME`.
    pub fn user_config_dir(&self) -> String {
        self.installer
            .user_config_dir
            .clone()
            .unwrap_or_else(|| format!(".config/{}", self.package.name))
    }

    /// Shell profiles the installer for `platform` probes, relative to `$HOME`.
    ///
    /// Configured profiles take precedence over the platform defaults.
    pub fn shell_profiles(&self, platform: TargetPlatform) -> Vec<String> {
        match &self.installer.profiles {
            Some(profiles) => profiles.clone(),
            None => platform
                .shell_profiles()
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    /// Builds the manifest of everything the distribution must contain.
    ///
    /// Order: executable, installer, documents, examples. The executable and
    /// installer are required; documents follow their configuration and the
    /// examples directory is optional.
    pub fn package_manifest(&self) -> PackageManifest {
        let mut manifest = PackageManifest::new(self.dist_name(), self.version_tag());

        manifest
            .push(BuildArtifact::new(
                self.compiled_binary_path(),
                &self.package.name,
                ArtifactKind::Executable,
                true,
            ))
            .push(BuildArtifact::new(
                self.installer_script_path(),
                &self.installer.script_name,
                ArtifactKind::Script,
                true,
            ));

        for doc in &self.resources.documents {
            manifest.push(BuildArtifact::new(
                self.project_dir.join(&doc.source),
                &doc.dest,
                ArtifactKind::Document,
                doc.required,
            ));
        }

        manifest.push(BuildArtifact::resources(
            self.project_dir.join(&self.resources.examples_dir),
            "examples",
            self.resources.example_patterns.clone(),
            false,
        ));

        manifest
    }

    /// Path of the final archive.
    pub fn archive_path(&self) -> PathBuf {
        self.output_dir.join(self.package_manifest().archive_name())
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        compiler: CompilerSettings,
        installer: InstallerSettings,
        resources: ResourceSettings,
        project_dir: PathBuf,
        output_dir: PathBuf,
        platform: TargetPlatform,
    ) -> Self {
        Self {
            package,
            compiler,
            installer,
            resources,
            project_dir,
            output_dir,
            platform,
        }
    }
}
