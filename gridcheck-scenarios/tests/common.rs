use std::sync::OnceLock;

use gridcheck_common::observability::LogConfig;

static INIT_PATH: OnceLock<std::path::PathBuf> = OnceLock::new();

/// Route test tracing through the shared sink, once per process.
pub fn init_test_tracing() {
    let _ = INIT_PATH.get_or_init(|| {
        gridcheck_common::observability::init_logging(LogConfig {
            app_name: "gridcheck-tests",
            emit_stderr: true,
            default_filter: "debug",
            ..LogConfig::default()
        })
        .unwrap_or_default()
    });
}
