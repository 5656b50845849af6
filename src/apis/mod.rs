//! Remote API integrations
//!
//! One module per upstream service plus the shared HTTP client plumbing and
//! per-client request statistics.

pub mod client;
pub mod coingecko;
pub mod stats;
pub mod types;
