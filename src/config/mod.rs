//! Project configuration from `distpack.toml`.
//!
//! ```toml
//! output_dir = "."
//!
//! [package]
//! name = "minipy"
//! version = "1.0.0"
//! description = "MiniPy programming language"
//!
//! [compiler]
//! tool = "pyinstaller"
//! entry_point = "minipy_interpreter.py"
//! resources = ["examples:examples"]
//! hidden_imports = ["colorama"]
//! install = ["python3", "-m", "pip", "install", "pyinstaller"]
//!
//! [resources]
//! examples_dir = "examples"
//! example_patterns = ["*.minpy"]
//! ```
//!
//! Every table except `[package]` is optional; omitted keys take the
//! defaults of the corresponding settings type.

use crate::error::{CliError, PackagerError, Result};
use crate::pipeline::{
    CompilerSettings, DocumentFile, InstallerSettings, PackageSettings, ResourceMapping,
    ResourceSettings, Settings, SettingsBuilder, TargetPlatform,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "distpack.toml";

/// Parsed `distpack.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub package: PackageConfig,
    #[serde(default)]
    pub compiler: CompilerConfig,
    #[serde(default)]
    pub installer: InstallerConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
    /// Relative to the project directory.
    pub output_dir: Option<PathBuf>,
    /// Defaults to the host platform.
    pub platform: Option<TargetPlatform>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerConfig {
    pub tool: Option<String>,
    pub entry_point: Option<PathBuf>,
    /// `source:destination` pairs.
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub hidden_imports: Vec<String>,
    pub install: Option<Vec<String>>,
    pub probe: Option<Vec<String>>,
    pub dist_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerConfig {
    pub system_install_dir: Option<String>,
    pub system_config_dir: Option<String>,
    pub user_install_dir: Option<String>,
    pub user_config_dir: Option<String>,
    pub profiles: Option<Vec<String>>,
    pub script_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourcesConfig {
    pub documents: Option<Vec<DocumentConfig>>,
    pub examples_dir: Option<PathBuf>,
    pub example_patterns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentConfig {
    pub source: PathBuf,
    /// Defaults to the source file name.
    pub dest: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// Load and parse a configuration file.
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        PackagerError::Cli(CliError::ExecutionFailed {
            command: "read_config".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;
    parse_config(&content)
}

/// Parse configuration text.
pub fn parse_config(content: &str) -> Result<ProjectConfig> {
    Ok(toml::from_str(content)?)
}

/// Parse a `source:destination` mapping. Without a colon the destination
/// equals the source.
pub fn parse_resource_mapping(mapping: &str) -> Result<ResourceMapping> {
    let (source, dest) = mapping.split_once(':').unwrap_or((mapping, mapping));
    if source.is_empty() || dest.is_empty() {
        return Err(PackagerError::Cli(CliError::InvalidArguments {
            reason: format!("Invalid resource mapping '{}', expected source:dest", mapping),
        }));
    }
    Ok(ResourceMapping::new(source, dest))
}

impl ProjectConfig {
    /// Convert into validated [`Settings`] rooted at `project_dir`.
    pub fn into_settings(self, project_dir: &Path) -> Result<Settings> {
        let package = PackageSettings {
            name: self.package.name,
            version: self.package.version,
            description: self.package.description,
            homepage: self.package.homepage,
        };

        let mut compiler = CompilerSettings::default();
        let c = self.compiler;
        if let Some(tool) = c.tool {
            compiler.tool = tool;
        }
        if let Some(entry_point) = c.entry_point {
            compiler.entry_point = entry_point;
        }
        compiler.resources = c
            .resources
            .iter()
            .map(String::as_str)
            .map(parse_resource_mapping)
            .collect::<Result<Vec<_>>>()?;
        compiler.hidden_imports = c.hidden_imports;
        if c.install.is_some() {
            compiler.install = c.install.filter(|cmd| !cmd.is_empty());
        }
        compiler.probe = c.probe;
        if let Some(dist_dir) = c.dist_dir {
            compiler.dist_dir = dist_dir;
        }

        let mut installer = InstallerSettings::default();
        let i = self.installer;
        if let Some(dir) = i.system_install_dir {
            installer.system_install_dir = dir;
        }
        if let Some(dir) = i.user_install_dir {
            installer.user_install_dir = dir;
        }
        if let Some(name) = i.script_name {
            installer.script_name = name;
        }
        installer.system_config_dir = i.system_config_dir;
        installer.user_config_dir = i.user_config_dir;
        installer.profiles = i.profiles;

        let mut resources = ResourceSettings::default();
        let r = self.resources;
        if let Some(documents) = r.documents {
            resources.documents = documents
                .into_iter()
                .map(|d| {
                    let dest = d.dest.unwrap_or_else(|| {
                        d.source
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default()
                    });
                    DocumentFile {
                        source: d.source,
                        dest,
                        required: d.required,
                    }
                })
                .collect();
        }
        if let Some(dir) = r.examples_dir {
            resources.examples_dir = dir;
        }
        if let Some(patterns) = r.example_patterns {
            resources.example_patterns = patterns;
        }

        let mut builder = SettingsBuilder::new()
            .project_dir(project_dir)
            .package_settings(package)
            .compiler_settings(compiler)
            .installer_settings(installer)
            .resource_settings(resources);

        if let Some(output_dir) = self.output_dir {
            builder = builder.output_dir(project_dir.join(output_dir));
        }
        if let Some(platform) = self.platform {
            builder = builder.platform(platform);
        }

        Ok(builder.build()?)
    }
}
