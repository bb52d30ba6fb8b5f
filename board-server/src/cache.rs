//! Caching layer for live-trains responses.
//!
//! The Digitraffic live-trains feed updates continuously, but a board
//! that is a few seconds stale is indistinguishable to the user. A
//! short-TTL in-memory cache keyed by station absorbs repeated
//! selections and refresh clicks without re-fetching.
//!
//! Nothing is persisted; the cache lives and dies with the process.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::digitraffic::{DigitrafficClient, DigitrafficError};
use crate::domain::{ShortCode, TrainRun};

/// Cached live-trains entry for one station.
type BoardEntry = Arc<Vec<TrainRun>>;

/// Configuration for the live-trains cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached stations.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 500,
        }
    }
}

/// Digitraffic client with a live-trains cache.
///
/// Wraps a [`DigitrafficClient`] and caches live-trains responses per
/// station. Concurrent fetches for the same station may race; the last
/// completed write wins, which is harmless since both carry equally
/// fresh data.
pub struct CachedDigitrafficClient {
    client: DigitrafficClient,
    boards: MokaCache<ShortCode, BoardEntry>,
}

impl CachedDigitrafficClient {
    /// Create a new cached client.
    pub fn new(client: DigitrafficClient, config: &CacheConfig) -> Self {
        let boards = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, boards }
    }

    /// Get live trains for a station, using the cache when fresh.
    pub async fn live_trains(
        &self,
        station: &ShortCode,
    ) -> Result<Arc<Vec<TrainRun>>, DigitrafficError> {
        if let Some(cached) = self.boards.get(station).await {
            return Ok(cached);
        }

        let trains = self.client.fetch_live_trains(station).await?;
        let entry = Arc::new(trains);

        self.boards.insert(station.clone(), entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &DigitrafficClient {
        &self.client
    }

    /// Number of cached stations.
    pub fn entry_count(&self) -> u64 {
        self.boards.entry_count()
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        self.boards.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digitraffic::DigitrafficConfig;

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(30));
        assert_eq!(config.max_capacity, 500);
    }

    #[test]
    fn cache_starts_empty() {
        let client = DigitrafficClient::new(DigitrafficConfig::new()).unwrap();
        let cached = CachedDigitrafficClient::new(client, &CacheConfig::default());
        assert_eq!(cached.entry_count(), 0);
    }

    #[tokio::test]
    async fn fetch_failure_propagates_and_caches_nothing() {
        let client = DigitrafficClient::new(
            DigitrafficConfig::new().with_base_url("http://127.0.0.1:9"),
        )
        .unwrap();
        let cached = CachedDigitrafficClient::new(client, &CacheConfig::default());

        let station = ShortCode::parse("HKI").unwrap();
        assert!(cached.live_trains(&station).await.is_err());
        assert_eq!(cached.entry_count(), 0);
    }
}
