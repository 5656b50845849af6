/// Logger configuration derived from command-line arguments
///
/// The configuration is a process-wide snapshot: `init_from_args` reads the
/// centralized CMD_ARGS store once at startup and later lookups only touch
/// the snapshot. Tests that never call `logger::init` get the defaults
/// (Info level, no debug tags) without consulting the argument store.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

use crate::arguments;
use super::levels::LogLevel;
use super::tags::LogTag;

/// Runtime logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level a message needs to be displayed (Error always passes)
    pub min_level: LogLevel,
    /// Tags with Debug-level output enabled via --debug-<key>
    pub debug_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Returns a snapshot of the current logger configuration
pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(_) => LoggerConfig::default(),
    }
}

/// Replaces the logger configuration
pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut current) = LOGGER_CONFIG.write() {
        *current = config;
    }
}

/// Builds the configuration from command-line arguments
///
/// Flag precedence for the minimum level: --log-level wins, then --verbose,
/// then --quiet, otherwise Info.
pub fn init_from_args() {
    let mut config = LoggerConfig::default();

    if arguments::patterns::is_quiet_mode() {
        config.min_level = LogLevel::Warning;
    }
    if arguments::patterns::is_verbose_mode() {
        config.min_level = LogLevel::Verbose;
    }
    if let Some(level) = arguments::get_arg_value("--log-level").and_then(|s| LogLevel::from_str(&s))
    {
        config.min_level = level;
    }

    let debug_all = arguments::has_arg("--debug-all");
    for tag in LogTag::all() {
        let key = tag.to_debug_key();
        if debug_all || arguments::has_arg(&format!("--debug-{}", key)) {
            config.debug_tags.insert(key.to_string());
        }
    }

    // A --debug-<module> flag implies Debug-level visibility for the run;
    // which tags actually emit at Debug stays gated per tag.
    if !config.debug_tags.is_empty() && config.min_level < LogLevel::Debug {
        config.min_level = LogLevel::Debug;
    }

    set_logger_config(config);
}

/// Whether Debug-level messages for this tag should be displayed
pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config()
        .debug_tags
        .contains(tag.to_debug_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_gates_debug() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Info);
        assert!(config.debug_tags.is_empty());
    }
}
