//! Shared station catalog with background refresh.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::digitraffic::{DigitrafficClient, DigitrafficError};
use crate::domain::{ShortCode, Station};

use super::index::StationIndex;

/// Thread-safe station catalog.
///
/// Wraps a [`StationIndex`] behind a lock so the web layer can share
/// it, and owns the fetch/refresh lifecycle against the Digitraffic
/// metadata feed. The index itself is replaced atomically; readers
/// never observe a partially-loaded set.
#[derive(Clone)]
pub struct StationCatalog {
    inner: Arc<RwLock<StationIndex>>,
    client: DigitrafficClient,
}

impl StationCatalog {
    /// Create a catalog by fetching the station metadata.
    ///
    /// A failed or malformed fetch degrades to an empty index with a
    /// warning rather than failing the session: no suggestions will be
    /// offered, but the process stays up.
    pub async fn bootstrap(client: DigitrafficClient) -> Self {
        let index = match client.fetch_stations().await {
            Ok(raw) => StationIndex::load(raw),
            Err(e) => {
                warn!(error = %e, "station catalog load failed; starting with empty index");
                StationIndex::empty()
            }
        };

        Self {
            inner: Arc::new(RwLock::new(index)),
            client,
        }
    }

    /// Create an empty catalog (for tests).
    pub fn empty(client: DigitrafficClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StationIndex::empty())),
            client,
        }
    }

    /// Create a catalog from already-loaded stations (for tests).
    pub fn from_index(client: DigitrafficClient, index: StationIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
            client,
        }
    }

    /// Run a closure against the current index under the read lock.
    ///
    /// This is how the session controller sees the index: the closure
    /// observes one consistent snapshot, never a partial load.
    pub async fn with_index<R>(&self, f: impl FnOnce(&StationIndex) -> R) -> R {
        let guard = self.inner.read().await;
        f(&guard)
    }

    /// Suggestion query; see [`StationIndex::query`].
    pub async fn query(&self, text: &str) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard.query(text).into_iter().cloned().collect()
    }

    /// Exact short-code lookup; see [`StationIndex::resolve`].
    pub async fn resolve(&self, code: &ShortCode) -> Option<Station> {
        let guard = self.inner.read().await;
        guard.resolve(code).cloned()
    }

    /// Number of loaded stations.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Whether the catalog is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Re-fetch the station metadata.
    ///
    /// On success the index is replaced in one step. On failure the
    /// existing set is preserved and the error returned, so a transient
    /// upstream outage never erases a previously good catalog.
    pub async fn refresh(&self) -> Result<usize, DigitrafficError> {
        let raw = self.client.fetch_stations().await?;
        let index = StationIndex::load(raw);
        let count = index.len();

        let mut guard = self.inner.write().await;
        *guard = index;

        Ok(count)
    }
}
