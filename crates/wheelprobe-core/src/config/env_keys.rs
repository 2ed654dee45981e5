//! 环境变量 key 常量与别名定义
//!
//! 主变量优先使用 `WHEELPROBE_*`。

/// 宿主解释器与工作目录
pub mod harness {
    /// Host interpreter used to run `-m venv`. Falls back to `python3` / `python` on PATH.
    pub const WHEELPROBE_PYTHON: &str = "WHEELPROBE_PYTHON";
    pub const PYTHON_ALIASES: &[&str] = &["PYTHON"];

    /// Default directory for CLI-built wheels.
    pub const WHEELPROBE_WORK_DIR: &str = "WHEELPROBE_WORK_DIR";
}

/// 可观测性与日志
pub mod observability {
    pub const WHEELPROBE_QUIET: &str = "WHEELPROBE_QUIET";
    pub const QUIET_ALIASES: &[&str] = &[];

    pub const WHEELPROBE_LOG_LEVEL: &str = "WHEELPROBE_LOG_LEVEL";
    pub const LOG_LEVEL_ALIASES: &[&str] = &[];

    pub const WHEELPROBE_LOG_JSON: &str = "WHEELPROBE_LOG_JSON";
    pub const LOG_JSON_ALIASES: &[&str] = &[];
}
