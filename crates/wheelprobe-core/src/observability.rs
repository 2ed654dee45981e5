//! Observability: tracing init.
//!
//! Uses config::ObservabilityConfig for WHEELPROBE_QUIET, WHEELPROBE_LOG_LEVEL, WHEELPROBE_LOG_JSON.

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter directive derived from config. Quiet mode keeps WARN and above only.
fn filter_directive(cfg: &ObservabilityConfig) -> String {
    if cfg.quiet {
        "wheelprobe=warn".to_string()
    } else {
        cfg.log_level.clone()
    }
}

/// Initialize tracing. Call at process startup.
/// `RUST_LOG` wins over `WHEELPROBE_LOG_LEVEL` when set. Repeated calls are no-ops.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let level = filter_directive(cfg);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    // Logs go to stderr: stdout carries command output (wheel paths, probe reports).
    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}
