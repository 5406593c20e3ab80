//! Runs the generated installer script under bash against a fake `$HOME`.

#![cfg(unix)]

use distpack::pipeline::{
    InstallerSettings, PackageSettings, Settings, SettingsBuilder, TargetPlatform,
    stages::installer::synthesize, utils::fs::is_executable,
};
use std::{
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    process::{Command, Output},
};

struct Sandbox {
    _tmp: tempfile::TempDir,
    root: PathBuf,
    home: PathBuf,
    package: PathBuf,
    fake_bin: PathBuf,
}

impl Sandbox {
    /// A package directory holding `install.sh`, the binary and examples.
    async fn new(uid: u32, installer: InstallerSettings, binary: &str) -> Self {
        Self::described(uid, installer, binary, "").await
    }

    async fn described(
        uid: u32,
        installer: InstallerSettings,
        binary: &str,
        description: &str,
    ) -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        let home = root.join("home");
        let package = root.join("app-linux");
        let fake_bin = root.join("fakebin");
        for dir in [&home, &package, &fake_bin] {
            std::fs::create_dir_all(dir).unwrap();
        }

        write_exec(&fake_bin.join("id"), &format!("#!/bin/sh\necho {}\n", uid));
        write_exec(&package.join("app"), binary);
        std::fs::create_dir(package.join("examples")).unwrap();
        std::fs::write(package.join("examples/hello.res"), "hello\n").unwrap();

        let settings = settings(&root, installer, description);
        let result = synthesize(&settings, TargetPlatform::Linux).await.unwrap();
        let script = result.output_path().unwrap();
        assert!(is_executable(script));
        std::fs::copy(script, package.join("install.sh")).unwrap();

        Self {
            _tmp: tmp,
            root,
            home,
            package,
            fake_bin,
        }
    }

    fn install(&self) -> Output {
        Command::new("bash")
            .arg("install.sh")
            .current_dir(&self.package)
            .env_clear()
            .env("HOME", &self.home)
            .env(
                "PATH",
                format!("{}:/usr/bin:/bin", self.fake_bin.display()),
            )
            .output()
            .unwrap()
    }

    fn user_bin(&self) -> PathBuf {
        self.home.join(".local/bin")
    }
}

fn write_exec(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

fn settings(root: &Path, installer: InstallerSettings, description: &str) -> Settings {
    SettingsBuilder::new()
        .project_dir(root)
        .package_settings(PackageSettings {
            name: "app".into(),
            version: "1.0.0".into(),
            description: description.into(),
            ..Default::default()
        })
        .entry_point("prog.src")
        .installer_settings(installer)
        .platform(TargetPlatform::Linux)
        .build()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const WORKING_BINARY: &str = "#!/bin/sh\necho \"app 1.0.0\"\n";

#[tokio::test]
async fn unprivileged_install_goes_to_home() {
    let sandbox = Sandbox::new(1000, InstallerSettings::default(), WORKING_BINARY).await;
    std::fs::write(sandbox.home.join(".bashrc"), "# rc\n").unwrap();

    let output = sandbox.install();

    assert!(output.status.success(), "{}", stdout(&output));
    let installed = sandbox.user_bin().join("app");
    assert!(is_executable(&installed));
    assert!(
        sandbox
            .home
            .join(".config/app/examples/hello.res")
            .is_file()
    );

    let bashrc = std::fs::read_to_string(sandbox.home.join(".bashrc")).unwrap();
    let export = format!("export PATH=\"$PATH:{}\"", sandbox.user_bin().display());
    assert_eq!(bashrc.matches(&export).count(), 1);
    assert!(stdout(&output).contains("Added to PATH: Yes"));
}

#[tokio::test]
async fn privileged_install_uses_system_dirs() {
    let tmp = tempfile::tempdir().unwrap();
    let sys_bin = tmp.path().join("usr/local/bin");
    let sys_etc = tmp.path().join("etc/app");
    let installer = InstallerSettings {
        system_install_dir: sys_bin.display().to_string(),
        system_config_dir: Some(sys_etc.display().to_string()),
        ..Default::default()
    };
    let sandbox = Sandbox::new(0, installer, WORKING_BINARY).await;

    let output = sandbox.install();

    assert!(output.status.success(), "{}", stdout(&output));
    assert!(is_executable(&sys_bin.join("app")));
    assert!(sys_etc.join("examples/hello.res").is_file());
    assert!(!sandbox.user_bin().exists());
    assert!(stdout(&output).contains("Installing system-wide"));
}

#[tokio::test]
async fn reinstall_does_not_duplicate_path_entry() {
    let sandbox = Sandbox::new(1000, InstallerSettings::default(), WORKING_BINARY).await;
    std::fs::write(sandbox.home.join(".bashrc"), "").unwrap();
    std::fs::write(sandbox.home.join(".profile"), "").unwrap();

    assert!(sandbox.install().status.success());
    let second = sandbox.install();
    assert!(second.status.success());
    assert!(stdout(&second).contains("Added to PATH: Already configured"));

    let needle = sandbox.user_bin().display().to_string();
    let bashrc = std::fs::read_to_string(sandbox.home.join(".bashrc")).unwrap();
    let profile = std::fs::read_to_string(sandbox.home.join(".profile")).unwrap();
    assert_eq!(bashrc.matches(&needle).count(), 1);
    assert_eq!(profile.matches(&needle).count(), 0);
}

#[tokio::test]
async fn no_profile_requires_manual_path_setup() {
    let sandbox = Sandbox::new(1000, InstallerSettings::default(), WORKING_BINARY).await;

    let output = sandbox.install();

    assert!(output.status.success(), "{}", stdout(&output));
    let text = stdout(&output);
    assert!(text.contains("Added to PATH: Manual required"));
    assert!(text.contains(&format!("source {}/.bashrc", sandbox.home.display())));
    assert!(!sandbox.home.join(".bashrc").exists());
}

#[tokio::test]
async fn missing_executable_aborts_before_installing() {
    let sandbox = Sandbox::new(1000, InstallerSettings::default(), WORKING_BINARY).await;
    std::fs::remove_file(sandbox.package.join("app")).unwrap();

    let output = sandbox.install();

    assert!(!output.status.success());
    assert!(!sandbox.user_bin().exists());
}

#[tokio::test]
async fn failing_self_test_exits_non_zero() {
    let sandbox = Sandbox::new(1000, InstallerSettings::default(), "#!/bin/sh\nexit 1\n").await;

    let output = sandbox.install();

    assert!(!output.status.success());
    assert!(stdout(&output).contains("Installation test failed"));
}

#[tokio::test]
async fn synthesized_script_lives_in_output_dir() {
    let sandbox = Sandbox::new(1000, InstallerSettings::default(), WORKING_BINARY).await;
    assert!(sandbox.root.join("install_linux.sh").is_file());
}

#[tokio::test]
async fn longer_path_in_profile_does_not_count_as_registered() {
    let sandbox = Sandbox::new(1000, InstallerSettings::default(), WORKING_BINARY).await;
    let old = format!("export PATH=\"$PATH:{}-old\"\n", sandbox.user_bin().display());
    std::fs::write(sandbox.home.join(".bashrc"), &old).unwrap();

    let output = sandbox.install();

    assert!(output.status.success(), "{}", stdout(&output));
    assert!(stdout(&output).contains("Added to PATH: Yes"));
    let bashrc = std::fs::read_to_string(sandbox.home.join(".bashrc")).unwrap();
    let export = format!("export PATH=\"$PATH:{}\"", sandbox.user_bin().display());
    assert!(bashrc.starts_with(&old));
    assert_eq!(bashrc.matches(&export).count(), 1);
}

#[tokio::test]
async fn hand_written_path_entry_counts_as_registered() {
    let sandbox = Sandbox::new(1000, InstallerSettings::default(), WORKING_BINARY).await;
    let line = format!("export PATH={}:$PATH\n", sandbox.user_bin().display());
    std::fs::write(sandbox.home.join(".zshrc"), &line).unwrap();
    std::fs::write(sandbox.home.join(".bashrc"), "").unwrap();

    let output = sandbox.install();

    assert!(stdout(&output).contains("Added to PATH: Already configured"));
    assert_eq!(std::fs::read_to_string(sandbox.home.join(".bashrc")).unwrap(), "");
}

#[tokio::test]
async fn description_backslashes_are_printed_literally() {
    let sandbox = Sandbox::described(
        1000,
        InstallerSettings::default(),
        WORKING_BINARY,
        r"Tabs\tand $HOME stay literal",
    )
    .await;

    let output = sandbox.install();

    assert!(output.status.success(), "{}", stdout(&output));
    assert!(stdout(&output).contains(r"Tabs\tand $HOME stay literal"));
}
