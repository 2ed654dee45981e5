use std::path::PathBuf;

use thiserror::Error;

/// Failures of the provisioning and installation steps.
///
/// Running code never produces one of these for a non-zero exit; that outcome is
/// returned as [`crate::ExecutionResult`] data.
#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("no Python interpreter found (tried: {tried}); set WHEELPROBE_PYTHON")]
    PythonNotFound { tried: String },

    #[error("failed to start {}: {}", .program.display(), .source)]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("venv creation in {} failed (exit {:?}): {}", .env_dir.display(), .code, .stderr)]
    Provision {
        env_dir: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to install {}: {}", .wheel.display(), .stderr)]
    Install { wheel: PathBuf, stderr: String },

    #[error("{} is not a virtual environment (missing {})", .env_dir.display(), .python.display())]
    NotAVenv { env_dir: PathBuf, python: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
