//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// The output format comes from `LOG_FORMAT` (`json`, the default, or
/// `pretty`). This is safe to call multiple times; subsequent calls become
/// no-ops.
pub fn init() {
    match std::env::var(tracing::LOG_FORMAT_VAR) {
        Ok(v) => tracing::init_with(v.parse::<LogFormat>().unwrap_or_default()),
        Err(_) => tracing::init(),
    }
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::LogFormat;
