//! Installer script synthesis.
//!
//! Produces the `install.sh` shipped in every package. The script carries
//! its own decision logic, evaluated on the end user's machine:
//!
//! 1. Privilege check selects system-wide or per-user directories
//! 2. Executable copied with mode 0o755; missing executable aborts
//! 3. Examples copied to the config directory when present
//! 4. PATH registered in at most one shell profile, never twice
//! 5. Installed binary run with `--version` as a self-test
//! 6. Summary, with a reload reminder if `PATH` is not live yet
//!
//! # Module Organization
//!
//! - `template` - installer script template
//! - `script` - template context and rendering
//! - `utils` - shell escaping

mod script;
mod template;
mod utils;

pub use script::{InstallerContext, render_installer};
pub use utils::escape_double_quoted;

use crate::pipeline::{BuildResult, Settings, Stage, TargetPlatform, error::Result, utils::fs};

/// Generate the installer script for `platform` and write it executable.
///
/// # Returns
///
/// A result whose output path is the written script,
/// `<output_dir>/install_<platform>.sh`.
pub async fn synthesize(settings: &Settings, platform: TargetPlatform) -> Result<BuildResult> {
    log::info!("Creating {} installer script", platform);

    let context = InstallerContext::new(settings, platform)?;
    let script = render_installer(&context)?;

    let script_path = settings.output_dir().join(platform.installer_file_name());
    let mut effects = Vec::new();
    fs::write_executable(&script_path, &script, &mut effects).await?;

    log::info!("✓ Installer script created: {}", script_path.display());

    Ok(BuildResult::success(
        Stage::Synthesize,
        format!("wrote {}", script_path.display()),
    )
    .with_output(script_path)
    .with_effects(effects))
}
