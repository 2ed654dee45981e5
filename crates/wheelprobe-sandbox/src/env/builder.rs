//! Build isolated Python venvs and resolve RuntimePaths.

use std::path::{Path, PathBuf};
use std::process::Command;

use wheelprobe_core::config::HarnessConfig;

use crate::common::{exit_code, run_captured, stream_text};
use crate::error::SandboxError;
use crate::layout::VenvLayout;
use crate::runner::RuntimePaths;

/// Interpreter names probed on PATH when no override is configured.
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Locate the host interpreter used to create venvs.
///
/// An explicit `override_python` (or `WHEELPROBE_PYTHON`) is resolved as given;
/// otherwise the first of `python3`, `python` found on PATH.
pub fn which_python(override_python: Option<&str>) -> Result<PathBuf, SandboxError> {
    let configured = override_python
        .map(str::to_string)
        .or_else(|| HarnessConfig::from_env().python);
    if let Some(python) = configured {
        return which::which(&python).map_err(|_| SandboxError::PythonNotFound { tried: python });
    }
    PYTHON_CANDIDATES
        .iter()
        .find_map(|name| which::which(name).ok())
        .ok_or_else(|| SandboxError::PythonNotFound {
            tried: PYTHON_CANDIDATES.join(", "),
        })
}

/// Create a venv at `env_dir` with the host interpreter and return its paths.
///
/// Blocks until `python -m venv` exits. A non-zero exit is fatal and reported as
/// [`SandboxError::Provision`] with the captured stderr; there is no retry.
pub fn create_venv(env_dir: &Path, host_python: &Path) -> Result<RuntimePaths, SandboxError> {
    let mut cmd = Command::new(host_python);
    cmd.arg("-m").arg("venv").arg(env_dir);
    let out = run_captured(host_python, &mut cmd)?;
    if !out.status.success() {
        let stderr = stream_text(&out.stderr);
        tracing::error!(
            env_dir = %env_dir.display(),
            code = exit_code(&out),
            "venv creation failed: {}",
            stderr.trim()
        );
        return Err(SandboxError::Provision {
            env_dir: env_dir.to_path_buf(),
            code: out.status.code(),
            stderr,
        });
    }
    crate::info_log!("created venv at {}", env_dir.display());
    Ok(build_runtime_paths(env_dir, VenvLayout::for_host()))
}

/// Resolve interpreter and pip locations for a venv root.
pub fn build_runtime_paths(env_dir: &Path, layout: VenvLayout) -> RuntimePaths {
    RuntimePaths {
        python: layout.python_in(env_dir),
        pip: layout.pip_in(env_dir),
        env_dir: env_dir.to_path_buf(),
    }
}
