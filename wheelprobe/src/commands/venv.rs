//! `wheelprobe venv` / `install` / `exec`

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use wheelprobe_sandbox::env::builder::which_python;
use wheelprobe_sandbox::Sandbox;

pub fn cmd_venv(dir: &Path, python: Option<&str>) -> Result<PathBuf> {
    let host = which_python(python)?;
    let sandbox = Sandbox::create_with(dir, &host)?;
    Ok(sandbox.root().to_path_buf())
}

pub fn cmd_install(venv: &Path, wheel: &Path) -> Result<()> {
    let sandbox = Sandbox::open(venv)?;
    sandbox.install(wheel)?;
    Ok(())
}

/// Forward the snippet's output and return its exit code.
pub fn cmd_exec(venv: &Path, code: &str) -> Result<i32> {
    let sandbox = Sandbox::open(venv)?;
    let result = sandbox.run(code)?;
    std::io::stdout()
        .write_all(result.stdout.as_bytes())
        .context("Failed to write stdout")?;
    std::io::stderr()
        .write_all(result.stderr.as_bytes())
        .context("Failed to write stderr")?;
    Ok(result.exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_into_non_venv_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = cmd_install(tmp.path(), &tmp.path().join("x-1.0-py3-none-any.whl")).unwrap_err();
        assert!(err.to_string().contains("is not a virtual environment"));
    }
}
