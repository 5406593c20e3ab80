//! Target platform types.

use std::fmt;

/// Operating system the package is built for.
///
/// Packages are always built for the host; there is no cross-compilation.
/// The platform decides the distribution name suffix (`minipy-linux`) and
/// which shell profiles the installer tries when registering `PATH`.
///
/// # Examples
///
/// ```no_run
/// use distpack::pipeline::TargetPlatform;
///
/// let platform = TargetPlatform::host().expect("unsupported host");
/// println!("Packaging for {}", platform);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    /// Linux distributions (bash first)
    Linux,
    /// macOS (zsh is the default login shell)
    Macos,
}

impl TargetPlatform {
    /// Platform of the running host, or `None` if installers cannot target it.
    pub fn host() -> Option<Self> {
        if cfg!(target_os = "linux") {
            Some(TargetPlatform::Linux)
        } else if cfg!(target_os = "macos") {
            Some(TargetPlatform::Macos)
        } else {
            None
        }
    }

    /// Lowercase identifier used in file and directory names.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetPlatform::Linux => "linux",
            TargetPlatform::Macos => "macos",
        }
    }

    /// Shell profiles probed by the installer, in priority order.
    ///
    /// Paths are relative to `$HOME`.
    pub fn shell_profiles(self) -> &'static [&'static str] {
        match self {
            TargetPlatform::Linux => &[".bashrc", ".zshrc", ".profile"],
            TargetPlatform::Macos => &[".zshrc", ".bash_profile", ".profile"],
        }
    }

    /// File name of the generated installer, e.g. `install_linux.sh`.
    pub fn installer_file_name(self) -> String {
        format!("install_{}.sh", self.as_str())
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
