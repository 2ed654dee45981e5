//! Process helpers shared by the provisioning, install and run paths.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::error::SandboxError;

/// Run `cmd` to completion with stdin closed and stdout/stderr captured.
///
/// Only a failure to start the program is an error; the exit status is left to the caller.
pub fn run_captured(program: &Path, cmd: &mut Command) -> Result<Output, SandboxError> {
    tracing::debug!(program = %program.display(), "running {:?}", cmd);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| SandboxError::Spawn {
            program: program.to_path_buf(),
            source,
        })
}

/// Lossy UTF-8 text of a captured stream.
pub fn stream_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Exit code, or -1 when the process was terminated by a signal.
pub fn exit_code(output: &Output) -> i32 {
    output.status.code().unwrap_or(-1)
}
