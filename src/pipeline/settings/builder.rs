//! Builder for constructing Settings.

use super::{
    CompilerSettings, InstallerSettings, PackageSettings, ResourceSettings, Settings,
    TargetPlatform,
};
use crate::pipeline::error::{Context, Result};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building pipeline settings with validation.
///
/// # Examples
///
/// ```no_run
/// use distpack::pipeline::{PackageSettings, ResourceMapping, SettingsBuilder};
///
/// # fn example() -> distpack::pipeline::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_dir(".")
///     .package_settings(PackageSettings {
///         name: "app".into(),
///         version: "1.0.0".into(),
///         ..Default::default()
///     })
///     .entry_point("prog.src")
///     .resources(vec![ResourceMapping::new("examples", "examples")])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    compiler_settings: CompilerSettings,
    installer_settings: InstallerSettings,
    resource_settings: ResourceSettings,
    platform: Option<TargetPlatform>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project directory.
    ///
    /// Default: current directory
    pub fn project_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output directory.
    ///
    /// Default: the project directory
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Replaces the whole compiler configuration.
    pub fn compiler_settings(mut self, settings: CompilerSettings) -> Self {
        self.compiler_settings = settings;
        self
    }

    /// Sets the entry-point program.
    ///
    /// # Required
    ///
    /// Must be non-empty by the time [`build`](Self::build) is called.
    pub fn entry_point<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.compiler_settings.entry_point = path.as_ref().to_path_buf();
        self
    }

    /// Sets resource directories passed to the compiler.
    pub fn resources(mut self, resources: Vec<super::ResourceMapping>) -> Self {
        self.compiler_settings.resources = resources;
        self
    }

    pub fn installer_settings(mut self, settings: InstallerSettings) -> Self {
        self.installer_settings = settings;
        self
    }

    pub fn resource_settings(mut self, settings: ResourceSettings) -> Self {
        self.resource_settings = settings;
        self
    }

    /// Overrides the target platform.
    ///
    /// Default: host platform
    pub fn platform(mut self, platform: TargetPlatform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `package_settings` is missing or has an empty name
    /// - the version is not valid semver
    /// - no entry point was set
    /// - the host is not a supported platform and none was given
    pub fn build(self) -> Result<Settings> {
        let package = self
            .package_settings
            .context("package_settings is required")?;

        if package.name.trim().is_empty() {
            crate::bail!("package name must not be empty");
        }

        semver::Version::parse(&package.version)
            .context(format!("invalid package version '{}'", package.version))?;

        if self.compiler_settings.entry_point.as_os_str().is_empty() {
            crate::bail!("entry_point is required");
        }

        let platform = match self.platform {
            Some(platform) => platform,
            None => TargetPlatform::host()
                .context("host operating system is not a supported packaging target")?,
        };

        let project_dir = self.project_dir.unwrap_or_else(|| PathBuf::from("."));
        let output_dir = self.output_dir.unwrap_or_else(|| project_dir.clone());

        Ok(Settings::new(
            package,
            self.compiler_settings,
            self.installer_settings,
            self.resource_settings,
            project_dir,
            output_dir,
            platform,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(version: &str) -> PackageSettings {
        PackageSettings {
            name: "app".into(),
            version: version.into(),
            ..Default::default()
        }
    }

    #[test]
    fn rejects_non_semver_versions() {
        let result = SettingsBuilder::new()
            .package_settings(package("one"))
            .entry_point("prog.src")
            .platform(TargetPlatform::Linux)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn requires_entry_point() {
        let result = SettingsBuilder::new()
            .package_settings(package("1.0.0"))
            .platform(TargetPlatform::Linux)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn derives_names_and_paths() {
        let settings = SettingsBuilder::new()
            .project_dir("/proj")
            .package_settings(package("1.0.0"))
            .entry_point("prog.src")
            .platform(TargetPlatform::Linux)
            .build()
            .unwrap();

        assert_eq!(settings.dist_name(), "app-linux");
        assert_eq!(settings.version_tag(), "v1.0.0");
        assert_eq!(settings.output_dir(), Path::new("/proj"));
        assert_eq!(
            settings.compiled_binary_path(),
            PathBuf::from("/proj/dist/app")
        );
        assert_eq!(
            settings.installer_script_path(),
            PathBuf::from("/proj/install_linux.sh")
        );
        assert_eq!(
            settings.archive_path(),
            PathBuf::from("/proj/app-linux-v1.0.0.tar.gz")
        );
        assert_eq!(settings.system_config_dir(), "/etc/app");
        assert_eq!(settings.user_config_dir(), ".config/app");
    }

    #[test]
    fn manifest_requires_binary_and_installer_only() {
        let settings = SettingsBuilder::new()
            .project_dir("/proj")
            .package_settings(package("1.0.0"))
            .entry_point("prog.src")
            .platform(TargetPlatform::Macos)
            .build()
            .unwrap();

        let manifest = settings.package_manifest();
        let required: Vec<_> = manifest
            .artifacts
            .iter()
            .filter(|a| a.required)
            .map(|a| a.dest.display().to_string())
            .collect();
        assert_eq!(required, vec!["app", "install.sh"]);
        assert_eq!(manifest.dist_name, "app-macos");
    }
}
