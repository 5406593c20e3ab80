//! Installer script generation.
//!
//! Renders the installer template with Handlebars, using a shell escape
//! function instead of the default HTML one.

use super::{template::INSTALLER_TEMPLATE, utils};
use crate::pipeline::{
    Settings, TargetPlatform,
    error::{Error, Result},
};
use handlebars::Handlebars;
use serde::Serialize;

/// Values substituted into the installer template.
#[derive(Debug, Serialize)]
pub struct InstallerContext {
    pub name: String,
    pub version: String,
    pub description: String,
    pub homepage: Option<String>,
    pub platform: String,
    pub binary_name: String,
    pub system_install_dir: String,
    pub system_config_dir: String,
    /// Relative to `$HOME`.
    pub user_install_dir: String,
    /// Relative to `$HOME`.
    pub user_config_dir: String,
    /// Relative to `$HOME`, in probe order.
    pub profiles: Vec<String>,
    pub first_profile: String,
}

impl InstallerContext {
    /// Collect template values from settings for `platform`.
    pub fn new(settings: &Settings, platform: TargetPlatform) -> Result<Self> {
        let profiles = settings.shell_profiles(platform);
        let first_profile = profiles
            .first()
            .cloned()
            .ok_or_else(|| Error::Template("at least one shell profile is required".into()))?;

        Ok(Self {
            name: settings.name().to_string(),
            version: settings.version_string().to_string(),
            description: settings.description().to_string(),
            homepage: settings.homepage().map(String::from),
            platform: platform.to_string(),
            binary_name: settings.name().to_string(),
            system_install_dir: settings.installer().system_install_dir.clone(),
            system_config_dir: settings.system_config_dir(),
            user_install_dir: trim_home_relative(&settings.installer().user_install_dir),
            user_config_dir: trim_home_relative(&settings.user_config_dir()),
            profiles: profiles.iter().map(|p| trim_home_relative(p)).collect(),
            first_profile: trim_home_relative(&first_profile),
        })
    }
}

/// Render the installer script text.
pub fn render_installer(context: &InstallerContext) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(utils::escape_double_quoted);

    handlebars
        .register_template_string("install.sh", INSTALLER_TEMPLATE)
        .map_err(|e| Error::Template(format!("failed to register installer template: {}", e)))?;

    handlebars
        .render("install.sh", context)
        .map_err(|e| Error::Template(format!("failed to render installer template: {}", e)))
}

/// `$HOME`-relative settings may be written as `~/x` or `/x`; keep `x`.
fn trim_home_relative(path: &str) -> String {
    path.trim_start_matches("~/").trim_start_matches('/').to_string()
}
