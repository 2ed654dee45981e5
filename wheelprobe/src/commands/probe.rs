//! `wheelprobe probe`: the standard end-to-end import checks against one wheel.
//!
//! Every check is a `python -c` snippet run in the same fresh venv. A check passes
//! when its outcome matches [`Expect`]; failures never abort the remaining checks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use wheelprobe_artifact::{build_wheel, ArtifactSpec};
use wheelprobe_sandbox::env::builder::which_python;
use wheelprobe_sandbox::{ExecutionResult, Sandbox};

/// Expected outcome of one snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expect {
    /// Exit 0 with exactly this stdout (trailing newline ignored)
    Stdout(String),
    /// Non-zero exit
    Failure,
}

impl Expect {
    fn matches(&self, result: &ExecutionResult) -> bool {
        match self {
            Expect::Stdout(expected) => {
                result.success() && result.stdout.trim_end() == expected.as_str()
            }
            Expect::Failure => !result.success(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeCheck {
    pub name: &'static str,
    pub code: String,
    pub expect: Expect,
}

/// Checks covering the import chain, core→utils delegation and the nested package.
pub fn standard_checks(spec: &ArtifactSpec) -> Vec<ProbeCheck> {
    let pkg = spec.package_name.as_str();
    let version = spec.version.as_str();
    let mut checks = vec![
        ProbeCheck {
            name: "import_chain",
            code: format!("import {pkg}; print({pkg}.get_version())"),
            expect: Expect::Stdout(version.to_string()),
        },
        ProbeCheck {
            name: "core_delegation",
            code: format!(
                "from {pkg}.core import get_helper_version\n\
                 from {pkg}.utils import get_utils_version\n\
                 assert get_helper_version() == get_utils_version()\n\
                 print(get_helper_version())"
            ),
            expect: Expect::Stdout(version.to_string()),
        },
    ];
    if spec.include_submodule {
        checks.push(ProbeCheck {
            name: "submodule_feature",
            code: format!("from {pkg}.sub import Feature; print(Feature().version)"),
            expect: Expect::Stdout(version.to_string()),
        });
        checks.push(ProbeCheck {
            name: "submodule_core_version",
            code: format!(
                "from {pkg}.sub.feature import core_version\n\
                 from {pkg}.core import get_core_version\n\
                 assert core_version() == get_core_version()\n\
                 print(core_version())"
            ),
            expect: Expect::Stdout(version.to_string()),
        });
    } else {
        checks.push(ProbeCheck {
            name: "no_submodule",
            code: format!("import {pkg}.sub"),
            expect: Expect::Failure,
        });
    }
    checks
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub name: &'static str,
    pub passed: bool,
    pub expect: Expect,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub ts: String,
    pub package: String,
    pub version: String,
    pub wheel: PathBuf,
    pub venv: PathBuf,
    /// Set only with `--keep`; otherwise the directory is gone when the report prints
    pub kept: bool,
    pub passed: bool,
    pub checks: Vec<CheckReport>,
}

fn evaluate(check: ProbeCheck, result: ExecutionResult) -> CheckReport {
    CheckReport {
        name: check.name,
        passed: check.expect.matches(&result),
        expect: check.expect,
        exit_code: result.exit_code,
        stdout: result.stdout,
        stderr: result.stderr,
    }
}

pub fn cmd_probe(
    name: &str,
    version: &str,
    include_submodule: bool,
    keep: bool,
    python: Option<&str>,
) -> Result<ProbeReport> {
    let spec = ArtifactSpec::new(name, version).with_submodule(include_submodule);
    let tmp = tempfile::Builder::new()
        .prefix("wheelprobe-probe-")
        .tempdir()
        .context("Failed to create temp directory")?;

    let wheel = build_wheel(tmp.path(), &spec)
        .with_context(|| format!("Failed to build {}", spec.wheel_filename()))?;
    let host = which_python(python)?;
    let sandbox = Sandbox::create_with(&tmp.path().join("venv"), &host)?;
    sandbox.install(&wheel)?;

    let mut checks = Vec::new();
    for check in standard_checks(&spec) {
        let result = sandbox.run(&check.code)?;
        let report = evaluate(check, result);
        if !report.passed {
            tracing::warn!(
                check = report.name,
                exit_code = report.exit_code,
                "probe check failed"
            );
        }
        checks.push(report);
    }

    let report = ProbeReport {
        ts: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        package: spec.package_name.clone(),
        version: spec.version.clone(),
        wheel,
        venv: sandbox.root().to_path_buf(),
        kept: keep,
        passed: checks.iter().all(|c| c.passed),
        checks,
    };

    if keep {
        #[allow(deprecated)]
        let kept = tmp.into_path();
        tracing::info!("kept probe directory {}", kept.display());
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(stdout: &str, exit_code: i32) -> ExecutionResult {
        ExecutionResult {
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_code,
        }
    }

    #[test]
    fn test_standard_checks_with_submodule() {
        let checks = standard_checks(&ArtifactSpec::new("mypkg", "1.0"));
        let names: Vec<&str> = checks.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "import_chain",
                "core_delegation",
                "submodule_feature",
                "submodule_core_version"
            ]
        );
        assert_eq!(checks[0].code, "import mypkg; print(mypkg.get_version())");
        assert!(checks
            .iter()
            .all(|c| c.expect == Expect::Stdout("1.0".to_string())));
    }

    #[test]
    fn test_standard_checks_without_submodule() {
        let checks = standard_checks(&ArtifactSpec::new("mypkg", "1.0").with_submodule(false));
        let last = checks.last().unwrap();
        assert_eq!(last.name, "no_submodule");
        assert_eq!(last.code, "import mypkg.sub");
        assert_eq!(last.expect, Expect::Failure);
    }

    #[test]
    fn test_expect_matching() {
        let want = Expect::Stdout("1.0".to_string());
        assert!(want.matches(&result("1.0\n", 0)));
        assert!(!want.matches(&result("1.0\n", 1)));
        assert!(!want.matches(&result("2.0\n", 0)));
        assert!(Expect::Failure.matches(&result("", 1)));
        assert!(!Expect::Failure.matches(&result("", 0)));
    }

    #[test]
    fn test_expect_serializes_tagged() {
        let json = serde_json::to_value(Expect::Stdout("1.0".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "stdout", "value": "1.0"}));
        let json = serde_json::to_value(Expect::Failure).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "failure"}));
    }
}
