use thiserror::Error;

/// Crate-level error type for batch runs and cache access.
///
/// Fetch-layer failures never show up here: the fetcher collapses them to
/// absent outcomes. What remains is the fatal category - store and setup
/// problems that abort the whole run.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Database error: {0}")] Database(#[from] rusqlite::Error),

    #[error("HTTP client error: {0}")] Http(String),
}

pub type CacheResult<T> = Result<T, CacheError>;
