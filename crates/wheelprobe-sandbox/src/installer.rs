//! `pip install <wheel>` inside a venv.

use std::path::Path;
use std::process::Command;

use crate::common::{exit_code, run_captured, stream_text};
use crate::error::SandboxError;
use crate::runner::RuntimePaths;

/// Install a wheel with the venv's own pip.
///
/// A rejected wheel surfaces as [`SandboxError::Install`] carrying the wheel path
/// and pip's stderr, so it can be told apart from a provisioning failure.
/// Installing a second wheel under a different distribution name is the supported
/// way to have two builds side by side; in-place upgrades are not relied upon.
pub fn install_wheel(paths: &RuntimePaths, wheel: &Path) -> Result<(), SandboxError> {
    let mut cmd = Command::new(&paths.pip);
    cmd.arg("install").arg(wheel);
    let out = run_captured(&paths.pip, &mut cmd)?;
    if !out.status.success() {
        let stderr = stream_text(&out.stderr);
        tracing::warn!(
            wheel = %wheel.display(),
            code = exit_code(&out),
            "pip rejected wheel"
        );
        return Err(SandboxError::Install {
            wheel: wheel.to_path_buf(),
            stderr,
        });
    }
    crate::info_log!(
        "installed {} into {}",
        wheel.display(),
        paths.env_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_pip_is_spawn_not_install_error() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = crate::env::builder::build_runtime_paths(
            tmp.path(),
            crate::layout::VenvLayout::for_host(),
        );
        let err = install_wheel(&paths, &tmp.path().join("x-1.0-py3-none-any.whl")).unwrap_err();
        assert!(matches!(err, SandboxError::Spawn { .. }));
    }

    #[test]
    fn test_install_error_message_names_wheel() {
        let err = SandboxError::Install {
            wheel: "/tmp/bogus.whl".into(),
            stderr: "ERROR: bogus.whl is not a valid wheel filename.".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to install /tmp/bogus.whl: "));
        assert!(msg.contains("not a valid wheel"));
    }
}
