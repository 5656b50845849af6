/// Batch orchestration: fetch every tracked asset concurrently, then persist
///
/// Fetches fan out together and are joined in submission order, so the
/// persistence pass always walks assets in the same order they are listed.
/// A failed fetch skips its asset without touching the others; only cache
/// I/O aborts the batch.
use crate::apis::coingecko::types::{price_to_text, usd_entry};
use crate::apis::coingecko::CoinGeckoClient;
use crate::cache::PriceCache;
use crate::errors::CacheError;
use crate::logger::{self, LogTag};
use crate::paths;
use std::path::Path;
use std::time::Instant;

/// Assets cached on every run, in persistence order
pub const TRACKED_ASSETS: [&str; 3] = ["bitcoin", "ethereum", "litecoin"];

/// Outcome report for one batch run
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub stored_assets: Vec<String>,
    pub skipped_assets: Vec<String>,
    pub total_processed: usize,
    pub processing_time_ms: u64,
}

/// Run one fetch-and-persist cycle over the tracked assets
pub async fn run_batch() -> Result<BatchSummary, CacheError> {
    let client = CoinGeckoClient::new().map_err(CacheError::Http)?;
    let db_path = paths::get_cache_db_path();
    run_batch_with(&client, &TRACKED_ASSETS, &db_path).await
}

/// Run one fetch-and-persist cycle against an explicit client and database
pub async fn run_batch_with(
    client: &CoinGeckoClient,
    assets: &[&str],
    db_path: &Path,
) -> Result<BatchSummary, CacheError> {
    let start_time = Instant::now();

    logger::info(
        LogTag::Batch,
        &format!("Fetching {} assets: {}", assets.len(), assets.join(", ")),
    );

    // Fetch all assets concurrently; join_all keeps submission order
    let fetches: Vec<_> = assets
        .iter()
        .map(|asset| {
            let asset = *asset;
            async move { client.fetch_price(asset).await }
        })
        .collect();
    let outcomes = futures::future::join_all(fetches).await;

    logger::info(LogTag::Batch, &format!("Raw outcomes: {:?}", outcomes));

    let cache = PriceCache::open(db_path)?;
    logger::debug(
        LogTag::Cache,
        &format!("Cache database ready at {}", db_path.display()),
    );

    let mut stored_assets = Vec::new();
    let mut skipped_assets = Vec::new();

    for (asset, outcome) in assets.iter().zip(outcomes.iter()) {
        match outcome {
            Some(quote) => match usd_entry(quote) {
                Some((name, price)) => {
                    cache.insert_price(name, &price_to_text(price))?;
                    stored_assets.push(asset.to_string());
                }
                None => {
                    logger::warning(
                        LogTag::Batch,
                        &format!("Quote for {} has no usd price, skipping", asset),
                    );
                    skipped_assets.push(asset.to_string());
                }
            },
            // The fetch layer already logged why this one is missing
            None => skipped_assets.push(asset.to_string()),
        }
    }

    // Release the store as soon as the insert loop is done
    drop(cache);

    let summary = BatchSummary {
        stored_assets,
        skipped_assets,
        total_processed: assets.len(),
        processing_time_ms: start_time.elapsed().as_millis() as u64,
    };

    let stats = client.get_stats().await;
    logger::debug(
        LogTag::Api,
        &format!(
            "API requests: {} total, {} ok, {} failed, avg {:.0}ms",
            stats.total_requests,
            stats.successful_requests,
            stats.failed_requests,
            stats.avg_response_time_ms
        ),
    );

    logger::info(
        LogTag::Batch,
        &format!(
            "Stored {}/{} assets in {}ms",
            summary.stored_assets.len(),
            summary.total_processed,
            summary.processing_time_ms
        ),
    );

    Ok(summary)
}
