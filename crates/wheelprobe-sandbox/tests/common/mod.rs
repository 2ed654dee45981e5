use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wheelprobe_artifact::{build_wheel, ArtifactSpec};
use wheelprobe_sandbox::env::builder::which_python;
use wheelprobe_sandbox::{Sandbox, SandboxError};

/// Provision `<tmp>/venv`, or `None` (with a note on stderr) when the host has no
/// usable Python or its `venv` module is unavailable.
pub fn provision_or_skip(tmp: &TempDir, test: &str) -> Option<Sandbox> {
    let host = match which_python(None) {
        Ok(host) => host,
        Err(e) => {
            eprintln!("skipping {test} ({e})");
            return None;
        }
    };
    match Sandbox::create_with(&tmp.path().join("venv"), &host) {
        Ok(sandbox) => Some(sandbox),
        Err(SandboxError::Provision { stderr, .. }) => {
            eprintln!("skipping {test} (venv unavailable: {})", stderr.trim());
            None
        }
        Err(e) => panic!("unexpected provisioning error: {e}"),
    }
}

pub fn wheel_in(dir: &Path, name: &str, version: &str, with_submodule: bool) -> PathBuf {
    let spec = ArtifactSpec::new(name, version).with_submodule(with_submodule);
    build_wheel(dir, &spec).expect("build wheel")
}
