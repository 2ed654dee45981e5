//! `wheelprobe build` / `wheelprobe entries`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use wheelprobe_artifact::{build_wheel, read_entries, ArtifactSpec};
use wheelprobe_core::config::HarnessConfig;

/// Build a wheel into `out` (or the configured work dir, created if needed).
pub fn cmd_build(
    name: &str,
    version: &str,
    include_submodule: bool,
    out: Option<PathBuf>,
) -> Result<PathBuf> {
    let out_dir = out.unwrap_or_else(|| HarnessConfig::from_env().work_dir);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output dir {}", out_dir.display()))?;
    let spec = ArtifactSpec::new(name, version).with_submodule(include_submodule);
    let wheel = build_wheel(&out_dir, &spec)
        .with_context(|| format!("Failed to build {}", spec.wheel_filename()))?;
    tracing::info!("built {}", wheel.display());
    Ok(wheel)
}

pub fn cmd_entries(wheel: &Path) -> Result<Vec<String>> {
    read_entries(wheel).with_context(|| format!("Failed to read {}", wheel.display()))
}
