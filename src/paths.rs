//! Centralized path resolution for CryptoCache
//!
//! All file and directory paths are resolved through this module so every
//! binary sees the same layout across platforms:
//! - **macOS**: `~/Library/Application Support/CryptoCache/`
//! - **Windows**: `%LOCALAPPDATA%\CryptoCache\`
//! - **Linux**: `$XDG_DATA_HOME/CryptoCache/` (fallback `~/.local/share/CryptoCache/`)
//!
//! Layout:
//!
//! ```text
//! CryptoCache/
//! ├── data/
//! │   └── DatabaseFile.db
//! └── logs/
//!     └── cryptocache_*.log
//! ```

use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

// =============================================================================
// BASE DIRECTORY RESOLUTION
// =============================================================================

/// Tracks whether the base directory has been resolved yet
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Lazy-initialized base directory (thread-safe)
static BASE_DIRECTORY: Lazy<PathBuf> = Lazy::new(|| {
    let base_dir = resolve_base_directory();
    INITIALIZED.store(true, Ordering::SeqCst);
    base_dir
});

/// Resolves the base directory for all CryptoCache data
fn resolve_base_directory() -> PathBuf {
    const APP_DIR: &str = "CryptoCache";

    if let Some(dir) = dirs::data_local_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(dir) = dirs::data_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(APP_DIR);
    }

    PathBuf::from(APP_DIR)
}

// =============================================================================
// DIRECTORY AND FILE ACCESSORS
// =============================================================================

/// Returns the base directory for all CryptoCache data
pub fn get_base_directory() -> PathBuf {
    BASE_DIRECTORY.clone()
}

/// Returns the data directory path (databases live here)
pub fn get_data_directory() -> PathBuf {
    BASE_DIRECTORY.join("data")
}

/// Returns the logs directory path
pub fn get_logs_directory() -> PathBuf {
    BASE_DIRECTORY.join("logs")
}

/// Returns the price cache database path
///
/// The file name is fixed; the cryptocache table inside it is created on
/// first open.
pub fn get_cache_db_path() -> PathBuf {
    get_data_directory().join("DatabaseFile.db")
}

// =============================================================================
// DIRECTORY CREATION
// =============================================================================

/// Ensures all required directories exist
///
/// Creates the base directory and the subdirectories needed for operation.
/// Called early in startup, before the logger opens its file sink, which is
/// why failures are reported as plain strings rather than logged.
pub fn ensure_all_directories() -> Result<(), String> {
    if !is_initialized() {
        eprintln!("Base directory: {}", get_base_directory().display());
    }

    let dirs_to_create = vec![
        ("base", get_base_directory()),
        ("data", get_data_directory()),
        ("logs", get_logs_directory()),
    ];

    for (name, dir) in dirs_to_create {
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| {
                format!(
                    "Failed to create {} directory at {}: {}",
                    name,
                    dir.display(),
                    e
                )
            })?;

            eprintln!("Created directory: {}", dir.display());
        }
    }

    Ok(())
}

/// Checks if the base directory has been resolved
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_directory_not_empty() {
        let base = get_base_directory();
        assert!(!base.as_os_str().is_empty());
    }

    #[test]
    fn test_data_directory_is_subdir() {
        let base = get_base_directory();
        let data = get_data_directory();
        assert!(data.starts_with(&base));
    }

    #[test]
    fn test_logs_directory_is_subdir() {
        let base = get_base_directory();
        let logs = get_logs_directory();
        assert!(logs.starts_with(&base));
    }

    #[test]
    fn test_cache_db_path_in_data_dir() {
        let data = get_data_directory();
        let db = get_cache_db_path();
        assert!(db.starts_with(&data));
        assert_eq!(db.file_name().unwrap(), "DatabaseFile.db");
    }
}
