//! Installer backed by `python -m pip install`.

use super::{InstallFailure, InstallOutput, Installer};
use crate::config::Settings;
use crate::shell::execute;

/// Default interpreter used to run pip.
pub const DEFAULT_PYTHON: &str = "python3";

/// Runs `<python> -m pip install [extra args] <requirement>`.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    python: String,
    extra_args: Vec<String>,
}

impl Default for PipInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl PipInstaller {
    /// Create an installer for the given interpreter.
    pub fn new(python: &str) -> Self {
        Self {
            python: python.to_string(),
            extra_args: Vec::new(),
        }
    }

    /// Installer for the manifest settings.
    ///
    /// `python` overrides `settings.python` when given.
    pub fn from_settings(settings: &Settings, python: Option<&str>) -> Self {
        Self::new(python.unwrap_or(&settings.python)).with_extra_args(settings.pip_args.clone())
    }

    /// Pass extra arguments (e.g. `--quiet`, `--user`) before the requirement.
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Interpreter this installer runs.
    pub fn python(&self) -> &str {
        &self.python
    }

    /// Arguments passed to the interpreter for `requirement`.
    pub fn args_for(&self, requirement: &str) -> Vec<String> {
        let mut args = vec!["-m".to_string(), "pip".to_string(), "install".to_string()];
        args.extend(self.extra_args.iter().cloned());
        args.push(requirement.to_string());
        args
    }
}

impl Installer for PipInstaller {
    fn install(&self, requirement: &str) -> Result<InstallOutput, InstallFailure> {
        let args = self.args_for(requirement);
        tracing::debug!("Running {} {}", self.python, args.join(" "));

        let result = execute(&self.python, args).map_err(|e| InstallFailure {
            code: None,
            stderr: e.to_string(),
        })?;
        tracing::debug!(
            "pip exited with {:?} after {:.2?}",
            result.exit_code,
            result.duration
        );

        if result.success {
            Ok(InstallOutput {
                stdout: result.stdout,
            })
        } else {
            Err(InstallFailure {
                code: result.exit_code,
                stderr: result.stderr,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_place_requirement_last() {
        let installer = PipInstaller::new("python3")
            .with_extra_args(vec!["--quiet".to_string(), "--user".to_string()]);
        assert_eq!(
            installer.args_for("foo>=2.0"),
            vec!["-m", "pip", "install", "--quiet", "--user", "foo>=2.0"]
        );
    }

    #[test]
    fn default_uses_python3() {
        assert_eq!(PipInstaller::default().python(), "python3");
        assert_eq!(
            PipInstaller::default().args_for("git+https://github.com/org/foo"),
            vec!["-m", "pip", "install", "git+https://github.com/org/foo"]
        );
    }

    #[test]
    fn from_settings_uses_pip_args() {
        let settings = Settings {
            python: "python3.11".to_string(),
            pip_args: vec!["--quiet".to_string()],
            ..Default::default()
        };

        let installer = PipInstaller::from_settings(&settings, None);
        assert_eq!(installer.python(), "python3.11");
        assert_eq!(
            installer.args_for("foo"),
            vec!["-m", "pip", "install", "--quiet", "foo"]
        );

        let overridden = PipInstaller::from_settings(&settings, Some("/opt/py/bin/python"));
        assert_eq!(overridden.python(), "/opt/py/bin/python");
    }

    #[test]
    fn missing_interpreter_is_failure_without_code() {
        let installer = PipInstaller::new("definitely-not-a-python-xyz");
        let failure = installer.install("foo").unwrap_err();
        assert_eq!(failure.code, None);
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_failure_with_code() {
        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("fake-python");
        std::fs::write(&script, "#!/bin/sh\necho \"ERROR: $4\" >&2\nexit 1\n").unwrap();
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let installer = PipInstaller::new(script.to_str().unwrap());
        let failure = installer.install("foo==9.9").unwrap_err();
        assert_eq!(failure.code, Some(1));
        assert!(failure.stderr.contains("ERROR: foo==9.9"));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success_with_stdout() {
        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("fake-python");
        std::fs::write(&script, "#!/bin/sh\necho \"$1 $2 $3 $4\"\n").unwrap();
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let installer = PipInstaller::new(script.to_str().unwrap());
        let output = installer.install("foo").unwrap();
        assert_eq!(output.stdout.trim(), "-m pip install foo");
    }
}
