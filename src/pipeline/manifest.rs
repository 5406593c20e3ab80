//! Package manifest: the artifacts a distribution must contain.

use std::path::{Path, PathBuf};

/// What an artifact is, which decides how it is staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// The compiled binary. Staged with mode 0o755.
    Executable,
    /// The installer script. Staged with mode 0o755.
    Script,
    /// A documentation file, copied as is.
    Document,
    /// A directory whose matching files are copied into `<dest>/`.
    ResourceDirectory,
}

impl ArtifactKind {
    /// Executables and scripts get the executable bit in the package.
    pub fn is_executable(self) -> bool {
        matches!(self, ArtifactKind::Executable | ArtifactKind::Script)
    }
}

/// One entry of a [`PackageManifest`].
#[derive(Debug, Clone)]
pub struct BuildArtifact {
    /// Where the artifact lives on disk before assembly.
    pub source: PathBuf,
    /// Name relative to the distribution directory root.
    pub dest: PathBuf,
    pub kind: ArtifactKind,
    /// Missing required artifacts abort assembly.
    pub required: bool,
    /// File-name glob patterns for resource directories (e.g. `*.minpy`).
    pub patterns: Vec<String>,
}

impl BuildArtifact {
    pub fn new(
        source: impl Into<PathBuf>,
        dest: impl Into<PathBuf>,
        kind: ArtifactKind,
        required: bool,
    ) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            kind,
            required,
            patterns: Vec::new(),
        }
    }

    /// Resource directory filtered by `patterns`.
    pub fn resources(
        source: impl Into<PathBuf>,
        dest: impl Into<PathBuf>,
        patterns: Vec<String>,
        required: bool,
    ) -> Self {
        Self {
            patterns,
            ..Self::new(source, dest, ArtifactKind::ResourceDirectory, required)
        }
    }

    /// Whether the source exists with the shape its kind requires.
    pub fn is_present(&self) -> bool {
        match self.kind {
            ArtifactKind::ResourceDirectory => self.source.is_dir(),
            _ => self.source.is_file(),
        }
    }
}

/// Ordered list of artifacts plus the distribution's identity.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    /// Distribution directory name, e.g. `minipy-linux`.
    pub dist_name: String,
    /// Version tag, e.g. `v1.0.0`.
    pub version_tag: String,
    pub artifacts: Vec<BuildArtifact>,
}

impl PackageManifest {
    pub fn new(dist_name: impl Into<String>, version_tag: impl Into<String>) -> Self {
        Self {
            dist_name: dist_name.into(),
            version_tag: version_tag.into(),
            artifacts: Vec::new(),
        }
    }

    pub fn push(&mut self, artifact: BuildArtifact) -> &mut Self {
        self.artifacts.push(artifact);
        self
    }

    /// Archive file name: `<dist_name>-<version_tag>.tar.gz`.
    pub fn archive_name(&self) -> String {
        format!("{}-{}.tar.gz", self.dist_name, self.version_tag)
    }

    /// Distribution directory under `output_dir`.
    pub fn dist_dir(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.dist_name)
    }

    /// Required artifacts whose source is absent.
    pub fn missing_required(&self) -> Vec<&BuildArtifact> {
        self.artifacts
            .iter()
            .filter(|a| a.required && !a.is_present())
            .collect()
    }
}
