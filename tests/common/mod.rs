//! Shared fixtures for integration tests.

#![allow(dead_code)]

use distpack::pipeline::{
    CommandOutcome, CommandRunner, CompilerSettings, DocumentFile, PackageSettings,
    ResourceMapping, ResourceSettings, Result, Settings, SettingsBuilder, TargetPlatform,
};
use std::{
    cell::{Cell, RefCell},
    path::{Path, PathBuf},
};

pub const TOOL: &str = "fakec";
pub const INSTALLER: &str = "fake-pip";
pub const BINARY: &[u8] = b"#!/bin/sh\necho \"app 1.0.0\"\n";

/// Stand-in for the external compiler and its package installer.
///
/// The compiler writes [`BINARY`] to `<cwd>/dist/app` when `writes_output`
/// is set and exits with `compile_exit`. The installer makes the tool
/// locatable when it exits zero and `install_fixes` is set.
pub struct FakeRunner {
    pub installed: Cell<bool>,
    pub install_exit: i32,
    pub install_fixes: bool,
    pub compile_exit: i32,
    pub writes_output: bool,
    pub calls: RefCell<Vec<String>>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self {
            installed: Cell::new(true),
            install_exit: 0,
            install_fixes: true,
            compile_exit: 0,
            writes_output: true,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeRunner {
    pub fn programs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.split_whitespace().next().unwrap_or_default().to_string())
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutcome> {
        self.calls
            .borrow_mut()
            .push(format!("{} {}", program, args.join(" ")));

        if program == TOOL {
            if self.compile_exit == 0 && self.writes_output {
                let dist = cwd.join("dist");
                std::fs::create_dir_all(&dist)?;
                std::fs::write(dist.join("app"), BINARY)?;
            }
            return Ok(CommandOutcome::exited(self.compile_exit));
        }

        if self.install_exit == 0 && self.install_fixes {
            self.installed.set(true);
        }
        Ok(CommandOutcome::exited(self.install_exit))
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        (program == TOOL && self.installed.get()).then(|| PathBuf::from("/fake/bin").join(program))
    }
}

/// A project directory with `prog.src` and `examples/hello.res`.
pub fn project() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("prog.src"), "print 1\n").unwrap();
    std::fs::create_dir(tmp.path().join("examples")).unwrap();
    std::fs::write(tmp.path().join("examples/hello.res"), "hello\n").unwrap();
    std::fs::write(tmp.path().join("examples/notes.txt"), "skip me\n").unwrap();
    tmp
}

pub fn settings(project_dir: &Path) -> Settings {
    SettingsBuilder::new()
        .project_dir(project_dir)
        .package_settings(PackageSettings {
            name: "app".into(),
            version: "1.0.0".into(),
            description: "Test application".into(),
            ..Default::default()
        })
        .compiler_settings(CompilerSettings {
            tool: TOOL.into(),
            install: Some(vec![INSTALLER.into(), "install".into(), TOOL.into()]),
            entry_point: "prog.src".into(),
            resources: vec![ResourceMapping::new("examples", "examples")],
            ..Default::default()
        })
        .resource_settings(ResourceSettings {
            documents: vec![DocumentFile::optional("LICENSE", "LICENSE")],
            examples_dir: "examples".into(),
            example_patterns: vec!["*.res".into()],
        })
        .platform(TargetPlatform::Linux)
        .build()
        .unwrap()
}

/// `(path, mode)` of every entry in a `.tar.gz`, trailing slashes removed.
pub fn archive_entries(archive: &Path) -> Vec<(String, u32)> {
    let file = std::fs::File::open(archive).unwrap();
    let mut tar = tar::Archive::new(flate2::read::GzDecoder::new(file));
    tar.entries()
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            let path = entry.path().unwrap().display().to_string();
            let mode = entry.header().mode().unwrap();
            (path.trim_end_matches('/').to_string(), mode)
        })
        .collect()
}
