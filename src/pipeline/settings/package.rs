//! Package metadata.

/// Package metadata and configuration.
///
/// Identity of the program being packaged. Maps from the `[package]`
/// table of `distpack.toml`.
///
/// # Examples
///
/// ```no_run
/// use distpack::pipeline::PackageSettings;
///
/// let settings = PackageSettings {
///     name: "minipy".into(),
///     version: "1.0.0".into(),
///     description: "MiniPy programming language".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageSettings {
    /// Program name. Also the name of the compiled binary.
    pub name: String,

    /// Version string in semantic versioning format.
    ///
    /// Example: "1.0.0", "0.2.3-beta.1"
    pub version: String,

    /// Brief description, shown in the installer banner.
    pub description: String,

    /// Homepage URL printed in the installer summary.
    ///
    /// Default: None
    pub homepage: Option<String>,
}
