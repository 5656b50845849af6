/// File sink for log output
///
/// One dated log file per process start, created under the logs directory.
/// When the file cannot be opened the sink stays disabled and console
/// logging carries on alone.

use chrono::Local;
use once_cell::sync::Lazy;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use crate::paths;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Opens the log file for this run
///
/// Called once from `logger::init`, after the directories exist.
pub fn init_file_logging() {
    let file_name = format!("cryptocache_{}.log", Local::now().format("%Y-%m-%d"));
    let path = paths::get_logs_directory().join(file_name);

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            if let Ok(mut guard) = LOG_FILE.lock() {
                *guard = Some(file);
            }
        }
        Err(e) => {
            eprintln!("Could not open log file {}: {}", path.display(), e);
        }
    }
}

/// Appends one line to the log file, if the sink is open
pub fn write_to_file(line: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            let _ = writeln!(file, "{}", line);
        }
    }
}

/// Flushes pending writes, called during shutdown
pub fn flush_file_logging() {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            let _ = file.flush();
        }
    }
}
