//! Run a code snippet under a venv interpreter and capture the outcome.

use std::path::PathBuf;
use std::process::Command;

use crate::common::{exit_code, run_captured, stream_text};
use crate::error::SandboxError;

/// Execution result from sandbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Resolved runtime paths of one venv.
///
/// Callers construct this via `env::builder` helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimePaths {
    /// Venv interpreter (`bin/python` or `Scripts/python.exe`)
    pub python: PathBuf,
    /// Venv pip (`bin/pip` or `Scripts/pip.exe`)
    pub pip: PathBuf,
    /// Venv root
    pub env_dir: PathBuf,
}

/// Run `python -c <code>` inside the venv.
///
/// A non-zero exit is returned as data, never as an error: negative assertions
/// (an old import path must fail after a rename) rely on it. The only error is
/// an interpreter that cannot be started.
pub fn run_code(paths: &RuntimePaths, code: &str) -> Result<ExecutionResult, SandboxError> {
    let mut cmd = Command::new(&paths.python);
    cmd.arg("-c").arg(code);
    let out = run_captured(&paths.python, &mut cmd)?;
    let result = ExecutionResult {
        stdout: stream_text(&out.stdout),
        stderr: stream_text(&out.stderr),
        exit_code: exit_code(&out),
    };
    tracing::debug!(
        env_dir = %paths.env_dir.display(),
        exit_code = result.exit_code,
        "ran code snippet"
    );
    Ok(result)
}
