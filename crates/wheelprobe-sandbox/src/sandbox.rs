//! One disposable venv: create, install into, run code in.
//!
//! A `Sandbox` never deletes its directory. Tear-down belongs to whoever owns
//! the directory, typically a `tempfile::TempDir` held by the test.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::env::builder::{build_runtime_paths, create_venv, which_python};
use crate::error::SandboxError;
use crate::installer::install_wheel;
use crate::layout::VenvLayout;
use crate::runner::{run_code, ExecutionResult, RuntimePaths};

/// Handle to a provisioned venv.
#[derive(Debug, Clone)]
pub struct Sandbox {
    paths: RuntimePaths,
}

impl Sandbox {
    /// Provision a fresh venv at `env_dir` using the configured host interpreter.
    pub fn create(env_dir: &Path) -> Result<Self, SandboxError> {
        let host = which_python(None)?;
        Self::create_with(env_dir, &host)
    }

    /// Provision a fresh venv at `env_dir` using `host_python`.
    pub fn create_with(env_dir: &Path, host_python: &Path) -> Result<Self, SandboxError> {
        let paths = create_venv(env_dir, host_python)?;
        Ok(Self { paths })
    }

    /// Provision a venv under a new temporary directory (`<tmp>/venv`).
    ///
    /// The returned `TempDir` removes everything when dropped; keep it alive as long
    /// as the sandbox is in use.
    pub fn create_temp() -> Result<(TempDir, Self), SandboxError> {
        let tmp = tempfile::Builder::new().prefix("wheelprobe-").tempdir()?;
        let sandbox = Self::create(&tmp.path().join("venv"))?;
        Ok((tmp, sandbox))
    }

    /// Attach to an existing venv without provisioning.
    pub fn open(env_dir: &Path) -> Result<Self, SandboxError> {
        let paths = build_runtime_paths(env_dir, VenvLayout::for_host());
        if !paths.python.exists() {
            return Err(SandboxError::NotAVenv {
                env_dir: env_dir.to_path_buf(),
                python: paths.python,
            });
        }
        Ok(Self { paths })
    }

    pub fn root(&self) -> &Path {
        &self.paths.env_dir
    }

    pub fn python(&self) -> &Path {
        &self.paths.python
    }

    pub fn pip(&self) -> &Path {
        &self.paths.pip
    }

    pub fn paths(&self) -> &RuntimePaths {
        &self.paths
    }

    pub fn install(&self, wheel: &Path) -> Result<(), SandboxError> {
        install_wheel(&self.paths, wheel)
    }

    /// Run `code` under the venv interpreter. Non-zero exits are returned, not raised.
    pub fn run(&self, code: &str) -> Result<ExecutionResult, SandboxError> {
        run_code(&self.paths, code)
    }
}

impl From<Sandbox> for PathBuf {
    fn from(sandbox: Sandbox) -> Self {
        sandbox.paths.env_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rejects_plain_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Sandbox::open(tmp.path()).unwrap_err();
        assert!(matches!(err, SandboxError::NotAVenv { .. }));
    }

    #[test]
    fn test_open_accepts_venv_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = VenvLayout::for_host();
        let python = layout.python_in(tmp.path());
        std::fs::create_dir_all(python.parent().unwrap()).unwrap();
        std::fs::write(&python, b"").unwrap();

        let sandbox = Sandbox::open(tmp.path()).unwrap();
        assert_eq!(sandbox.root(), tmp.path());
        assert_eq!(sandbox.python(), python.as_path());
        assert_eq!(sandbox.pip(), layout.pip_in(tmp.path()).as_path());
        assert_eq!(PathBuf::from(sandbox), tmp.path().to_path_buf());
    }
}
