//! Structured logging for CryptoCache
//!
//! Provides a small, ergonomic logging API:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Dual output: colored console + file persistence
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cryptocache::logger::{self, LogTag};
//!
//! logger::error(LogTag::Cache, "Insert failed");
//! logger::warning(LogTag::Api, "Price request for bitcoin timed out");
//! logger::info(LogTag::Batch, "Stored 3/3 assets");
//! logger::debug(LogTag::Api, "Request details: ..."); // Only with --debug-api
//! ```
//!
//! ## Initialization
//!
//! Call once at startup, after the data directories exist:
//! ```rust,ignore
//! logger::init();
//! ```

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, init_from_args, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system
///
/// Parses command-line arguments for level and debug flags, then opens the
/// log file. Must run before any logging occurs and after
/// `paths::ensure_all_directories`.
pub fn init() {
    config::init_from_args();
    file::init_file_logging();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown unless filtered by --log-level)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when the matching --debug-<module> flag (or --debug-all) is
/// provided.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Force flush pending log writes, called during shutdown
pub fn flush() {
    file::flush_file_logging();
}
