use cryptocache::{
    arguments::{patterns, print_debug_info, print_help},
    batch,
    logger::{self, LogTag},
};

/// Main entry point for CryptoCache
///
/// Runs one fetch-and-persist batch over the tracked assets, then exits.
/// Startup order matters: directories first (the logger writes into the
/// logs directory), then the logger, then the batch itself.
#[tokio::main]
async fn main() {
    // Ensure all directories exist BEFORE logger initialization
    // (Logger needs logs directory to create log files)
    if let Err(e) = cryptocache::paths::ensure_all_directories() {
        eprintln!("❌ Failed to create required directories: {}", e);
        std::process::exit(1);
    }

    logger::init();

    // Check for help request first (before any other processing)
    if patterns::is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    logger::info(LogTag::System, "🚀 CryptoCache starting up...");

    // Print debug information if any debug modes are enabled
    print_debug_info();

    match batch::run_batch().await {
        Ok(summary) => {
            if !summary.skipped_assets.is_empty() {
                logger::warning(
                    LogTag::Batch,
                    &format!("⚠️ Skipped assets: {}", summary.skipped_assets.join(", ")),
                );
            }
            logger::info(
                LogTag::System,
                &format!(
                    "✅ Batch complete: {}/{} assets cached in {}ms",
                    summary.stored_assets.len(),
                    summary.total_processed,
                    summary.processing_time_ms
                ),
            );
            logger::flush();
        }
        Err(e) => {
            logger::error(LogTag::System, &format!("❌ Batch failed: {}", e));
            logger::flush();
            std::process::exit(1);
        }
    }
}
