/// SQLite-backed price cache
///
/// One table, `cryptocache`, holding (crypto_name, price) rows as TEXT.
/// Inserts are append-only: repeated runs accumulate rows rather than
/// upserting, so the table doubles as a crude fetch history.
use crate::errors::CacheResult;
use rusqlite::{params, Connection};
use serde::Serialize;
use std::path::Path;

/// One cached price row
#[derive(Debug, Clone, Serialize)]
pub struct CachedPrice {
    pub crypto_name: String,
    pub price: String,
}

/// Open handle to the cache database
///
/// Owns its connection; dropping the cache closes the underlying
/// SQLite handle.
pub struct PriceCache {
    connection: Connection,
}

/// Configure database connection for concurrency-friendly defaults
fn configure_connection(connection: &Connection) -> Result<(), rusqlite::Error> {
    // Write-Ahead Logging for better concurrency
    connection.pragma_update(None, "journal_mode", "WAL")?;
    // Reasonable durability/perf tradeoff
    connection.pragma_update(None, "synchronous", "NORMAL")?;
    // Wait on lock contention instead of failing immediately
    connection.busy_timeout(std::time::Duration::from_millis(5_000))?;
    Ok(())
}

impl PriceCache {
    /// Open (creating if needed) the cache database at the given path
    pub fn open(path: &Path) -> CacheResult<Self> {
        let connection = Connection::open(path)?;
        configure_connection(&connection)?;

        connection.execute(
            "CREATE TABLE IF NOT EXISTS cryptocache (
                crypto_name TEXT,
                price TEXT
            )",
            [],
        )?;

        Ok(Self { connection })
    }

    /// Append one price row
    pub fn insert_price(&self, crypto_name: &str, price: &str) -> CacheResult<()> {
        self.connection.execute(
            "INSERT INTO cryptocache (crypto_name, price) VALUES (?1, ?2)",
            params![crypto_name, price],
        )?;
        Ok(())
    }

    /// Count all cached rows
    pub fn count_rows(&self) -> CacheResult<i64> {
        let count = self
            .connection
            .query_row("SELECT COUNT(*) FROM cryptocache", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Get every row stored for one asset, oldest first
    pub fn rows_for(&self, crypto_name: &str) -> CacheResult<Vec<CachedPrice>> {
        let mut stmt = self.connection.prepare(
            "SELECT crypto_name, price FROM cryptocache WHERE crypto_name = ?1 ORDER BY rowid",
        )?;

        let row_iter = stmt.query_map([crypto_name], |row| {
            Ok(CachedPrice {
                crypto_name: row.get(0)?,
                price: row.get(1)?,
            })
        })?;

        let mut rows = Vec::new();
        for row in row_iter {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// Get all cached rows in insertion order
    pub fn fetch_all(&self) -> CacheResult<Vec<CachedPrice>> {
        let mut stmt = self
            .connection
            .prepare("SELECT crypto_name, price FROM cryptocache ORDER BY rowid")?;

        let row_iter = stmt.query_map([], |row| {
            Ok(CachedPrice {
                crypto_name: row.get(0)?,
                price: row.get(1)?,
            })
        })?;

        let mut rows = Vec::new();
        for row in row_iter {
            rows.push(row?);
        }
        Ok(rows)
    }
}
