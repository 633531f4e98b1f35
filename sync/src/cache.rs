//! Time-limited cache around the variant index

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::info;

use crate::SyncError;
use crate::index::VariantIndex;

#[derive(Debug)]
struct Snapshot {
    index: Arc<VariantIndex>,
    built_at: Instant,
}

/// Holds the last built index and rebuilds it once it is older than the TTL
///
/// Rebuilds run outside the lock. Two callers racing past an expired
/// snapshot both rebuild, and the later one wins.
#[derive(Debug)]
pub struct SpriteCache {
    dirs: Vec<PathBuf>,
    ttl: Duration,
    snapshot: RwLock<Option<Snapshot>>,
}

impl SpriteCache {
    pub fn new(dirs: Vec<PathBuf>, ttl: Duration) -> Self {
        Self {
            dirs,
            ttl,
            snapshot: RwLock::new(None),
        }
    }

    /// Current index, rebuilding it when missing or expired
    pub async fn index(&self) -> Result<Arc<VariantIndex>, SyncError> {
        if let Some(snapshot) = self.snapshot.read().await.as_ref()
            && snapshot.built_at.elapsed() < self.ttl
        {
            return Ok(snapshot.index.clone());
        }

        let started = Instant::now();
        let index = Arc::new(VariantIndex::scan(&self.dirs).await?);
        info!(
            fusions = index.total_fusions(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "rebuilt sprite index"
        );

        *self.snapshot.write().await = Some(Snapshot {
            index: index.clone(),
            built_at: Instant::now(),
        });
        Ok(index)
    }

    /// Drop the current snapshot so the next read rebuilds
    pub async fn invalidate(&self) {
        *self.snapshot.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::tests::scratch_dir;

    #[tokio::test]
    async fn test_snapshot_reused_within_ttl() {
        let dir = scratch_dir("cache-ttl");
        std::fs::write(dir.join("1.2.png"), b"").unwrap();
        let cache = SpriteCache::new(vec![dir.clone()], Duration::from_secs(300));

        let first = cache.index().await.unwrap();
        std::fs::write(dir.join("3.4.png"), b"").unwrap();
        let second = cache.index().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.total_fusions(), 1);

        cache.invalidate().await;
        assert_eq!(cache.index().await.unwrap().total_fusions(), 2);
    }

    #[tokio::test]
    async fn test_expired_snapshot_is_rebuilt() {
        let dir = scratch_dir("cache-expiry");
        let cache = SpriteCache::new(vec![dir.clone()], Duration::ZERO);

        assert_eq!(cache.index().await.unwrap().total_fusions(), 0);
        std::fs::write(dir.join("5.6.png"), b"").unwrap();
        assert_eq!(cache.index().await.unwrap().total_fusions(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_rebuilds_agree() {
        let dir = scratch_dir("cache-race");
        std::fs::write(dir.join("7.8.png"), b"").unwrap();
        std::fs::write(dir.join("7.8a.png"), b"").unwrap();
        let cache = Arc::new(SpriteCache::new(vec![dir], Duration::ZERO));

        let (a, b) = tokio::join!(cache.index(), cache.index());
        assert_eq!(a.unwrap().variants(7, 8), b.unwrap().variants(7, 8));
    }
}
