/// Log filter when nothing else is configured. Keeps stderr quiet.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolve the stderr log filter: `--log-level` > `RUST_LOG` > default.
///
/// Only diagnostics are configurable; the input path is fixed.
pub fn resolve_log_filter(cli_log_level: Option<String>, rust_log: Option<String>) -> String {
    cli_log_level
        .or(rust_log)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
