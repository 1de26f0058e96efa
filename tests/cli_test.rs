//! Integration tests for the pipensure binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn install_fake(site: &Path, name: &str, version: &str) {
    let dist_info = site.join(format!("{}-{}.dist-info", name, version));
    fs::create_dir_all(&dist_info).unwrap();
    fs::write(
        dist_info.join("METADATA"),
        format!("Metadata-Version: 2.1\nName: {}\nVersion: {}\n", name, version),
    )
    .unwrap();
}

fn install_fake_git(site: &Path, name: &str, commit: &str) {
    install_fake(site, name, "0.1");
    fs::write(
        site.join(format!("{}-0.1.dist-info", name)).join("direct_url.json"),
        format!(
            r#"{{"url": "https://github.com/org/{}", "vcs_info": {{"vcs": "git", "commit_id": "{}"}}}}"#,
            name, commit
        ),
    )
    .unwrap();
}

fn pipensure(site: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("pipensure"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("PIPENSURE_PYTHON");
    cmd.arg("--site-packages").arg(site.path());
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pipensure"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("require-git"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pipensure"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_require_satisfied() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;
    install_fake(site.path(), "requests", "2.31.0");

    pipensure(&site)
        .args(["require", "requests", "--pin", ">=2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("requests up to date"));
    Ok(())
}

#[test]
fn cli_require_check_outdated() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;
    install_fake(site.path(), "requests", "1.0");

    pipensure(&site)
        .args(["require", "requests", "--pin", ">=2.0", "--check"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("requests out of date"));
    Ok(())
}

#[test]
fn cli_require_missing_only_update_existing() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;

    pipensure(&site)
        .args(["require", "flask", "--only-update-existing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("flask not installed"));
    Ok(())
}

#[test]
fn cli_require_invalid_pin() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;

    pipensure(&site)
        .args(["require", "requests", "--pin", "latest"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a valid version string"));
    Ok(())
}

#[test]
fn cli_require_unknown_operator() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;
    install_fake(site.path(), "requests", "1.0");

    pipensure(&site)
        .args(["require", "requests", "--pin", "=>1.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown operator '=>'"));
    Ok(())
}

#[test]
fn cli_require_git_matching_commit() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;
    install_fake_git(site.path(), "mylib", "abc123");

    pipensure(&site)
        .args(["require-git", "mylib", "org/mylib", "--commit", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mylib up to date"));
    Ok(())
}

#[test]
fn cli_require_git_index_install_warns() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;
    install_fake(site.path(), "mylib", "1.0");

    pipensure(&site)
        .args(["require-git", "mylib", "org/mylib", "--commit", "abc123"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains(
            "Given package mylib is not a VCS package. Skipping.",
        ));
    Ok(())
}

#[test]
fn cli_require_git_index_install_strict() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;
    install_fake(site.path(), "mylib", "1.0");

    pipensure(&site)
        .args([
            "require-git",
            "mylib",
            "org/mylib",
            "--commit",
            "abc123",
            "--strict",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to auto install mylib"));
    Ok(())
}

#[test]
fn cli_show_json() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;
    install_fake_git(site.path(), "mylib", "abc123");

    pipensure(&site)
        .args(["show", "MyLib", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"commit_id\": \"abc123\""));
    Ok(())
}

#[test]
fn cli_show_missing() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;

    pipensure(&site)
        .args(["show", "nothing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("is not installed"));
    Ok(())
}

#[test]
fn cli_sync_check() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;
    install_fake(site.path(), "requests", "2.31.0");
    let project = TempDir::new()?;
    fs::write(
        project.path().join("pipensure.yml"),
        "packages:\n  - name: requests\n    version: \">=2.0\"\n  - name: flask\n",
    )?;

    pipensure(&site)
        .current_dir(project.path())
        .args(["sync", "--check"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("requests up to date"))
        .stdout(predicate::str::contains("1 of 2 package(s) satisfied"))
        .stderr(predicate::str::contains("flask not installed"));
    Ok(())
}

#[test]
fn cli_sync_missing_manifest() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;
    let project = TempDir::new()?;

    pipensure(&site)
        .current_dir(project.path())
        .arg("sync")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No manifest found"));
    Ok(())
}

#[test]
fn cli_quiet_suppresses_status() -> Result<(), Box<dyn std::error::Error>> {
    let site = TempDir::new()?;
    install_fake(site.path(), "requests", "2.31.0");

    pipensure(&site)
        .args(["--quiet", "require", "requests"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[cfg(unix)]
mod fake_python {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Write an executable script standing in for the interpreter.
    ///
    /// `-m pip install ...` appends its arguments to `calls.log` and exits
    /// with `exit_code`; `-c ...` prints the given `sys.path`.
    fn write_python(dir: &Path, site: &Path, exit_code: i32) -> PathBuf {
        let script = dir.join("fake-python");
        let log = dir.join("calls.log");
        let body = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"-c\" ]; then\n\
             echo '[\"\", \"{site}\"]'\n\
             exit 0\n\
             fi\n\
             echo \"$@\" >> \"{log}\"\n\
             echo \"Successfully installed\"\n\
             exit {code}\n",
            site = site.display(),
            log = log.display(),
            code = exit_code,
        );
        fs::write(&script, body).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    fn calls(dir: &Path) -> String {
        fs::read_to_string(dir.join("calls.log")).unwrap_or_default()
    }

    #[test]
    fn installs_outdated_package() -> Result<(), Box<dyn std::error::Error>> {
        let site = TempDir::new()?;
        install_fake(site.path(), "requests", "1.0");
        let bin = TempDir::new()?;
        let python = write_python(bin.path(), site.path(), 0);

        pipensure(&site)
            .arg("--python")
            .arg(&python)
            .args(["require", "requests", "--pin", ">=2.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Installing package requests"));

        assert_eq!(calls(bin.path()).trim(), "-m pip install requests>=2.0");
        Ok(())
    }

    #[test]
    fn installs_git_package_from_custom_host() -> Result<(), Box<dyn std::error::Error>> {
        let site = TempDir::new()?;
        install_fake_git(site.path(), "mylib", "abc123");
        let bin = TempDir::new()?;
        let python = write_python(bin.path(), site.path(), 0);

        pipensure(&site)
            .env("PIPENSURE_PYTHON", &python)
            .args([
                "require-git",
                "mylib",
                "org/mylib",
                "--commit",
                "def456",
                "--host",
                "gitlab.example.com/",
            ])
            .assert()
            .success();

        assert_eq!(
            calls(bin.path()).trim(),
            "-m pip install git+https://gitlab.example.com/org/mylib"
        );
        Ok(())
    }

    #[test]
    fn failed_install_is_reported() -> Result<(), Box<dyn std::error::Error>> {
        let site = TempDir::new()?;
        let bin = TempDir::new()?;
        let python = write_python(bin.path(), site.path(), 1);

        pipensure(&site)
            .arg("--python")
            .arg(&python)
            .args(["require", "requests"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unable to auto install requests"))
            .stderr(predicate::str::contains("requests install failed"));
        Ok(())
    }

    #[test]
    fn discovers_sys_path_from_interpreter() -> Result<(), Box<dyn std::error::Error>> {
        let site = TempDir::new()?;
        install_fake(site.path(), "six", "1.16.0");
        let bin = TempDir::new()?;
        let python = write_python(bin.path(), site.path(), 0);

        let mut cmd = Command::new(cargo_bin("pipensure"));
        cmd.env("NO_COLOR", "1")
            .arg("--python")
            .arg(&python)
            .args(["show", "six"])
            .assert()
            .success()
            .stdout(predicate::str::contains("six 1.16.0"));
        assert!(calls(bin.path()).is_empty());
        Ok(())
    }

    #[test]
    fn sync_uses_manifest_pip_args() -> Result<(), Box<dyn std::error::Error>> {
        let site = TempDir::new()?;
        let bin = TempDir::new()?;
        let python = write_python(bin.path(), site.path(), 0);
        let project = TempDir::new()?;
        fs::write(
            project.path().join("pipensure.yml"),
            format!(
                "settings:\n  python: {}\n  pip_args: [\"--quiet\"]\npackages:\n  - name: six\n",
                python.display()
            ),
        )?;

        let mut cmd = Command::new(cargo_bin("pipensure"));
        cmd.env("NO_COLOR", "1")
            .env_remove("PIPENSURE_PYTHON")
            .current_dir(project.path())
            .arg("sync")
            .assert()
            .success();

        assert_eq!(calls(bin.path()).trim(), "-m pip install --quiet six");
        Ok(())
    }
}
