/// CoinGecko API integration for USD price lookups
///
/// Wraps the public `/simple/price` endpoint. One request covers one asset;
/// the parsed body passes through untouched so callers see exactly what the
/// API answered. Failures are reported through `ApiError`, and `fetch_price`
/// flattens them to an absent quote after logging a diagnostic, so a bad
/// asset never takes down a batch.
pub mod types;

use crate::apis::client::HttpClient;
use crate::apis::stats::{ApiStats, ApiStatsTracker};
use crate::apis::types::ApiError;
use crate::logger::{self, LogTag};
use std::time::Instant;
use types::PriceQuote;

// ===== API CONFIGURATION =====

const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Per-request timeout covering connect, send and body read
pub const TIMEOUT_SECS: u64 = 10;

/// Quote currency requested from the API
const VS_CURRENCY: &str = "usd";

// ===== CLIENT =====

/// HTTP client for CoinGecko price lookups with request statistics
pub struct CoinGeckoClient {
    http_client: HttpClient,
    stats: ApiStatsTracker,
    base_url: String,
}

impl CoinGeckoClient {
    /// Create a client against the public CoinGecko API
    pub fn new() -> Result<Self, String> {
        Self::with_base_url(COINGECKO_BASE_URL, TIMEOUT_SECS)
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(timeout_secs)?,
            stats: ApiStatsTracker::new(),
            base_url: base_url.into(),
        })
    }

    /// Get current request statistics
    pub async fn get_stats(&self) -> ApiStats {
        self.stats.get_stats().await
    }

    /// Fetch the USD quote for a single asset id
    ///
    /// Returns the parsed response body as-is on HTTP 200. Any other
    /// status, a timeout, or a transport problem becomes an `ApiError`.
    pub async fn fetch_simple_price(&self, asset_id: &str) -> Result<PriceQuote, ApiError> {
        let start_time = Instant::now();
        let url = format!("{}/simple/price", self.base_url);

        let response = match self
            .http_client
            .client()
            .get(&url)
            .query(&[("ids", asset_id), ("vs_currencies", VS_CURRENCY)])
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let elapsed = start_time.elapsed().as_millis() as f64;
                self.stats.record_request(false, elapsed).await;
                return Err(if e.is_timeout() {
                    ApiError::Timeout
                } else {
                    ApiError::NetworkError(e.to_string())
                });
            }
        };

        // Only a clean 200 counts as a usable quote
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let elapsed = start_time.elapsed().as_millis() as f64;
            self.stats.record_request(false, elapsed).await;
            return Err(ApiError::InvalidResponse(format!("HTTP {}", status)));
        }

        match response.json::<PriceQuote>().await {
            Ok(quote) => {
                let elapsed = start_time.elapsed().as_millis() as f64;
                self.stats.record_request(true, elapsed).await;
                Ok(quote)
            }
            Err(e) => {
                let elapsed = start_time.elapsed().as_millis() as f64;
                self.stats.record_request(false, elapsed).await;
                Err(if e.is_timeout() {
                    ApiError::Timeout
                } else {
                    ApiError::InvalidResponse(format!("Body decode failed: {}", e))
                })
            }
        }
    }

    /// Fetch a quote, flattening every failure to None
    ///
    /// Diagnostics go to the Api log tag; callers only have to distinguish
    /// present from absent.
    pub async fn fetch_price(&self, asset_id: &str) -> Option<PriceQuote> {
        match self.fetch_simple_price(asset_id).await {
            Ok(quote) => {
                logger::verbose(LogTag::Api, &format!("Quote for {}: {:?}", asset_id, quote));
                Some(quote)
            }
            Err(ApiError::Timeout) => {
                logger::warning(
                    LogTag::Api,
                    &format!(
                        "Request for {} timed out after {}s",
                        asset_id,
                        self.http_client.timeout().as_secs()
                    ),
                );
                None
            }
            Err(ApiError::InvalidResponse(msg)) => {
                logger::warning(
                    LogTag::Api,
                    &format!("Bad response for {}: {}", asset_id, msg),
                );
                None
            }
            Err(ApiError::NetworkError(msg)) => {
                logger::warning(
                    LogTag::Api,
                    &format!("Network error for {}: {}", asset_id, msg),
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Spawn a local HTTP stub answering every request with a fixed response
    async fn spawn_stub_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let (mut socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => break,
                };
                tokio::spawn(async move {
                    let mut buf = [0u8; 2048];
                    let _ = socket.read(&mut buf).await;
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status_line,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                });
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_request_shape_and_body_passthrough() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (request_tx, request_rx) = tokio::sync::oneshot::channel();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 2048];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let _ = request_tx.send(String::from_utf8_lossy(&buf[..n]).into_owned());
                let body = r#"{"ali":{"usd":87899}}"#;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        let client = CoinGeckoClient::with_base_url(format!("http://{}", addr), 2).unwrap();
        let quote = client.fetch_simple_price("ali").await.unwrap();

        let request = request_rx.await.unwrap();
        assert!(request.starts_with("GET /simple/price?"));
        assert!(request.contains("ids=ali"));
        assert!(request.contains("vs_currencies=usd"));

        // The body must come back exactly as served, unknown asset name included
        let mut currencies = HashMap::new();
        currencies.insert("usd".to_string(), json!(87899));
        let mut expected = PriceQuote::new();
        expected.insert("ali".to_string(), currencies);
        assert_eq!(quote, expected);

        let stats = client.get_stats().await;
        assert_eq!(stats.total_requests, 1);
        assert_eq!(stats.successful_requests, 1);
    }

    #[tokio::test]
    async fn test_server_error_yields_absent_quote() {
        let base_url = spawn_stub_server("500 Internal Server Error", "{}").await;
        let client = CoinGeckoClient::with_base_url(base_url, 2).unwrap();

        let result = client.fetch_simple_price("bitcoin").await;
        match result {
            Err(ApiError::InvalidResponse(msg)) => assert!(msg.contains("500")),
            other => panic!("expected InvalidResponse, got {:?}", other),
        }

        assert!(client.fetch_price("bitcoin").await.is_none());

        let stats = client.get_stats().await;
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.failed_requests, 2);
    }

    #[tokio::test]
    async fn test_timeout_yields_absent_quote() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let (socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => break,
                };
                // Hold the connection open without ever answering
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    drop(socket);
                });
            }
        });

        let client = CoinGeckoClient::with_base_url(format!("http://{}", addr), 1).unwrap();
        let result = client.fetch_simple_price("bitcoin").await;
        assert!(matches!(result, Err(ApiError::Timeout)));

        assert!(client.fetch_price("bitcoin").await.is_none());
    }

    #[tokio::test]
    async fn test_connection_error_yields_absent_quote() {
        // Bind then drop so the port is very likely unreachable
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = CoinGeckoClient::with_base_url(format!("http://{}", addr), 1).unwrap();
        let result = client.fetch_simple_price("bitcoin").await;
        assert!(matches!(result, Err(ApiError::NetworkError(_))));

        assert!(client.fetch_price("bitcoin").await.is_none());
    }

    #[tokio::test]
    async fn test_unparseable_body_yields_absent_quote() {
        let base_url = spawn_stub_server("200 OK", "not json at all").await;
        let client = CoinGeckoClient::with_base_url(base_url, 2).unwrap();

        let result = client.fetch_simple_price("bitcoin").await;
        assert!(matches!(result, Err(ApiError::InvalidResponse(_))));

        assert!(client.fetch_price("bitcoin").await.is_none());
    }
}
