/// Centralized argument handling for CryptoCache
///
/// All command-line flag parsing and debug flag checking goes through this
/// module so binaries, the logger and tests see the same argument state.
///
/// Features:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Debug flag checking functions for all modules
/// - Unified argument parsing utilities
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the process
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by binaries and tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if the mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// These functions check for specific debug flags in the command-line arguments
// =============================================================================

/// API calls debug mode
pub fn is_debug_api_enabled() -> bool {
    has_arg("--debug-api") || has_arg("--debug-all")
}

/// Cache/database debug mode
pub fn is_debug_cache_enabled() -> bool {
    has_arg("--debug-cache") || has_arg("--debug-all")
}

/// Batch orchestration debug mode
pub fn is_debug_batch_enabled() -> bool {
    has_arg("--debug-batch") || has_arg("--debug-all")
}

/// System/startup debug mode
pub fn is_debug_system_enabled() -> bool {
    has_arg("--debug-system") || has_arg("--debug-all")
}

// =============================================================================
// HELP SYSTEM
// =============================================================================

/// Displays the help menu with all available flags and their descriptions
pub fn print_help() {
    println!("CryptoCache - concurrent CoinGecko price snapshot cache");
    println!();
    println!("Fetches the tracked assets concurrently and appends one row per");
    println!("successful quote to the local cache database. One run per invocation.");
    println!();
    println!("USAGE:");
    println!("    cryptocache [FLAGS]");
    println!();
    println!("CORE FLAGS:");
    println!("    --help, -h                Show this help message");
    println!("    --quiet, -q               Only show warnings and errors");
    println!("    --verbose, -v             Show verbose trace output");
    println!("    --log-level <LEVEL>       Minimum log level (error/warning/info/debug/verbose)");
    println!();
    println!("DEBUG FLAGS:");
    println!("    --debug-all               Enable every debug mode below");
    println!("    --debug-api               API request/response debug mode");
    println!("    --debug-batch             Batch orchestration debug mode");
    println!("    --debug-cache             Cache/database debug mode");
    println!("    --debug-system            System/startup debug mode");
    println!();
    println!("EXAMPLES:");
    println!("    cryptocache                          # Run one batch normally");
    println!("    cryptocache --debug-api              # Run with API diagnostics");
    println!("    cryptocache --quiet                  # Warnings and errors only");
    println!("    cryptocache --help                   # Show this help");
}

// =============================================================================
// UTILITY FUNCTIONS
// =============================================================================

/// Checks if any debug mode is enabled
pub fn is_any_debug_enabled() -> bool {
    is_debug_api_enabled()
        || is_debug_cache_enabled()
        || is_debug_batch_enabled()
        || is_debug_system_enabled()
}

/// Gets a list of all enabled debug modes
pub fn get_enabled_debug_modes() -> Vec<&'static str> {
    let mut modes = Vec::new();

    if is_debug_api_enabled() {
        modes.push("api");
    }
    if is_debug_cache_enabled() {
        modes.push("cache");
    }
    if is_debug_batch_enabled() {
        modes.push("batch");
    }
    if is_debug_system_enabled() {
        modes.push("system");
    }

    modes
}

/// Prints debug information about current arguments and enabled debug modes
pub fn print_debug_info() {
    if !is_any_debug_enabled() {
        return;
    }

    println!("Command-line arguments: {:?}", get_cmd_args());
    println!("Enabled debug modes: {:?}", get_enabled_debug_modes());
}

// =============================================================================
// COMMON ARGUMENT PATTERNS
// =============================================================================

/// Common argument parsing patterns shared across binaries
pub mod patterns {
    use super::*;

    /// Checks for help flags
    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h")
    }

    /// Checks for version flags
    pub fn is_version_requested() -> bool {
        has_arg("--version") || has_arg("-V")
    }

    /// Checks for quiet/silent mode
    pub fn is_quiet_mode() -> bool {
        has_arg("--quiet") || has_arg("-q")
    }

    /// Checks for verbose mode
    pub fn is_verbose_mode() -> bool {
        has_arg("--verbose") || has_arg("-v")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // CMD_ARGS is process-global and cargo runs test functions on parallel
    // threads, so everything that mutates it lives in one sequential test.
    #[test]
    fn test_argument_handling() {
        let test_args = vec![
            "cryptocache".to_string(),
            "--debug-api".to_string(),
            "--log-level".to_string(),
            "debug".to_string(),
        ];

        set_cmd_args(test_args.clone());
        assert_eq!(get_cmd_args(), test_args);

        assert!(has_arg("--debug-api"));
        assert!(!has_arg("--debug-cache"));

        assert_eq!(get_arg_value("--log-level"), Some("debug".to_string()));
        assert_eq!(get_arg_value("--db-path"), None);

        assert!(is_debug_api_enabled());
        assert!(!is_debug_batch_enabled());
        assert!(is_any_debug_enabled());
        assert_eq!(get_enabled_debug_modes(), vec!["api"]);

        // --debug-all turns every module on
        set_cmd_args(vec!["cryptocache".to_string(), "--debug-all".to_string()]);
        assert!(is_debug_api_enabled());
        assert!(is_debug_cache_enabled());
        assert!(is_debug_batch_enabled());
        assert!(is_debug_system_enabled());
        assert_eq!(
            get_enabled_debug_modes(),
            vec!["api", "cache", "batch", "system"]
        );

        set_cmd_args(vec![
            "cryptocache".to_string(),
            "--help".to_string(),
            "-q".to_string(),
        ]);
        assert!(patterns::is_help_requested());
        assert!(patterns::is_quiet_mode());
        assert!(!patterns::is_verbose_mode());
        assert!(!patterns::is_version_requested());
    }
}
