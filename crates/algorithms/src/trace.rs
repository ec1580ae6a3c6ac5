//! Structured diagnostics behind the `trace` feature

/// Emit a `tracing` event at the given level when `trace` is enabled.
///
/// Expands to nothing otherwise. Never pass key, IV or data bytes.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "trace")]
        {
            tracing::$level!($($arg)+);
        }
    }};
}
