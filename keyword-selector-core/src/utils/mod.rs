//! Utility modules.

/// Response body truncation for debug logs.
pub mod log_sanitizer;
