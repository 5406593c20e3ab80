//! External compiler/bundler configuration.

use std::path::PathBuf;

/// A `source:destination` mapping embedded alongside the compiled program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMapping {
    /// Directory on the build machine, relative to the project directory.
    pub source: PathBuf,
    /// Location inside the bundled program.
    pub dest: String,
}

impl ResourceMapping {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }

    /// Tool argument form, `source:dest`.
    pub fn as_arg(&self) -> String {
        format!("{}:{}", self.source.display(), self.dest)
    }
}

/// How the external compiler is found, installed, and invoked.
///
/// The defaults describe PyInstaller driven through `python3 -m pip`.
#[derive(Debug, Clone)]
pub struct CompilerSettings {
    /// Executable name of the tool, looked up on `PATH`.
    pub tool: String,

    /// Command whose zero exit proves the tool is usable.
    ///
    /// Default: None (locate `tool` on `PATH` instead)
    pub probe: Option<Vec<String>>,

    /// Command that installs the tool when it is missing.
    ///
    /// Default: None (a missing tool fails provisioning)
    pub install: Option<Vec<String>>,

    /// Entry-point program, relative to the project directory.
    pub entry_point: PathBuf,

    /// Resource directories bundled with the executable.
    pub resources: Vec<ResourceMapping>,

    /// Modules the tool cannot discover by itself.
    pub hidden_imports: Vec<String>,

    /// Directory where the tool writes its output, relative to the project.
    ///
    /// Default: `dist`
    pub dist_dir: PathBuf,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            tool: "pyinstaller".into(),
            probe: None,
            install: Some(vec![
                "python3".into(),
                "-m".into(),
                "pip".into(),
                "install".into(),
                "pyinstaller".into(),
            ]),
            entry_point: PathBuf::new(),
            resources: Vec::new(),
            hidden_imports: Vec::new(),
            dist_dir: PathBuf::from("dist"),
        }
    }
}
