/// Per-API request statistics tracking
///
/// Every API client owns one tracker and records the outcome of each
/// request. Snapshots are cheap to take and serializable for diagnostics.
use tokio::sync::RwLock;

/// Snapshot of one API client's request counters
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ApiStats {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub avg_response_time_ms: f64,
}

/// Mutable counters behind an async lock
#[derive(Default)]
pub struct ApiStatsTracker {
    stats: RwLock<ApiStats>,
}

impl ApiStatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished request and fold its latency into the running average
    pub async fn record_request(&self, success: bool, elapsed_ms: f64) {
        let mut stats = self.stats.write().await;

        stats.total_requests += 1;
        if success {
            stats.successful_requests += 1;
        } else {
            stats.failed_requests += 1;
        }

        let n = stats.total_requests as f64;
        stats.avg_response_time_ms = (stats.avg_response_time_ms * (n - 1.0) + elapsed_ms) / n;
    }

    /// Take a snapshot of the current counters
    pub async fn get_stats(&self) -> ApiStats {
        self.stats.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_request_updates_counters() {
        let tracker = ApiStatsTracker::new();

        tracker.record_request(true, 100.0).await;
        tracker.record_request(false, 300.0).await;

        let stats = tracker.get_stats().await;
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.successful_requests, 1);
        assert_eq!(stats.failed_requests, 1);
        assert!((stats.avg_response_time_ms - 200.0).abs() < f64::EPSILON);
    }
}
