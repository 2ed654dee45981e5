//! 按领域分组的配置结构体
//!
//! 从环境变量加载，统一 fallback 逻辑。

use super::env_keys::{harness, observability as obv_keys};
use super::loader::{env_bool, env_optional, env_or};
use std::path::PathBuf;

/// 宿主解释器与默认输出目录
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Explicit host interpreter; `None` means discover `python3` / `python` on PATH
    pub python: Option<String>,
    /// Where `wheelprobe build` writes wheels when `--out` is omitted
    pub work_dir: PathBuf,
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        let python = env_optional(harness::WHEELPROBE_PYTHON, harness::PYTHON_ALIASES);
        let work_dir = env_optional(harness::WHEELPROBE_WORK_DIR, &[])
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_work_dir);
        Self { python, work_dir }
    }

    fn default_work_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".").join(".cache"))
            .join("wheelprobe")
            .join("wheels")
    }
}

/// 可观测性配置：quiet、log_level、log_json
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| {
            super::loader::load_dotenv();
            Self::load()
        })
    }

    fn load() -> Self {
        let quiet = env_bool(obv_keys::WHEELPROBE_QUIET, obv_keys::QUIET_ALIASES, false);
        let log_level = env_or(
            obv_keys::WHEELPROBE_LOG_LEVEL,
            obv_keys::LOG_LEVEL_ALIASES,
            || "wheelprobe=info".to_string(),
        );
        let log_json = env_bool(obv_keys::WHEELPROBE_LOG_JSON, obv_keys::LOG_JSON_ALIASES, false);
        Self {
            quiet,
            log_level,
            log_json,
        }
    }
}
