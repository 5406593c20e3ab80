//! Installer script policy.

/// Install locations emitted into the installer script.
///
/// System paths are used when the installer runs as root; user paths are
/// relative to `$HOME` and used otherwise. The choice is made by the script
/// at install time, not here.
#[derive(Debug, Clone)]
pub struct InstallerSettings {
    /// Binary directory for privileged installs.
    ///
    /// Default: `/usr/local/bin`
    pub system_install_dir: String,

    /// Config directory for privileged installs. `None` derives
    /// `/etc/<name>`.
    pub system_config_dir: Option<String>,

    /// Binary directory for per-user installs, relative to `$HOME`.
    ///
    /// Default: `.local/bin`
    pub user_install_dir: String,

    /// Config directory for per-user installs, relative to `$HOME`.
    /// `None` derives `.config/<name>`.
    pub user_config_dir: Option<String>,

    /// Shell profiles to try, relative to `$HOME`.
    ///
    /// Default: None (platform defaults)
    pub profiles: Option<Vec<String>>,

    /// Name of the installer inside the package.
    ///
    /// Default: `install.sh`
    pub script_name: String,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            system_install_dir: "/usr/local/bin".into(),
            system_config_dir: None,
            user_install_dir: ".local/bin".into(),
            user_config_dir: None,
            profiles: None,
            script_name: "install.sh".into(),
        }
    }
}
