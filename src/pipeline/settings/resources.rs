//! Documentation and example resources staged into the package.

use std::path::PathBuf;

/// A documentation file copied into the package root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// File on disk, relative to the project directory.
    pub source: PathBuf,
    /// Name inside the package.
    pub dest: String,
    /// Missing required documents abort packaging.
    pub required: bool,
}

impl DocumentFile {
    pub fn optional(source: impl Into<PathBuf>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            required: false,
        }
    }
}

/// Documentation and example files to ship.
#[derive(Debug, Clone)]
pub struct ResourceSettings {
    pub documents: Vec<DocumentFile>,

    /// Directory of example programs, relative to the project directory.
    pub examples_dir: PathBuf,

    /// File-name patterns selecting which example files are shipped.
    pub example_patterns: Vec<String>,
}

impl Default for ResourceSettings {
    fn default() -> Self {
        Self {
            documents: vec![
                DocumentFile::optional("LICENSE", "LICENSE"),
                DocumentFile::optional("README-GITHUB.md", "README.md"),
                DocumentFile::optional("DOCUMENTATION.md", "DOCUMENTATION.md"),
                DocumentFile::optional("QUICK-REFERENCE.md", "QUICK-REFERENCE.md"),
                DocumentFile::optional("TROUBLESHOOTING.md", "TROUBLESHOOTING.md"),
            ],
            examples_dir: PathBuf::from("examples"),
            example_patterns: vec!["*.minpy".into()],
        }
    }
}
