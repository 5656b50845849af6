/// Core logging implementation with automatic filtering
///
/// Decides whether a message should be displayed, then hands it to the
/// format module for rendering and writing.

use super::config::{get_logger_config, is_debug_enabled_for_tag};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. The message level must pass the minimum level threshold
/// 3. Debug level additionally requires --debug-<module> for that tag
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    let config = get_logger_config();

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Debug {
        return is_debug_enabled_for_tag(tag);
    }

    true
}

/// Internal logging entry point used by the public level functions
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level.as_str(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_always_passes() {
        assert!(should_log(&LogTag::System, LogLevel::Error));
        assert!(should_log(&LogTag::Api, LogLevel::Error));
    }

    #[test]
    fn test_debug_gated_without_flag() {
        // Default config: Info threshold, no debug tags
        assert!(should_log(&LogTag::Batch, LogLevel::Info));
        assert!(should_log(&LogTag::Batch, LogLevel::Warning));
        assert!(!should_log(&LogTag::Batch, LogLevel::Debug));
        assert!(!should_log(&LogTag::Batch, LogLevel::Verbose));
    }
}
