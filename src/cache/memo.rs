//! Generic cache-or-compute accessor over the shared cache.

use std::future::Future;
use std::time::Duration;

use metrics::counter;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::store::SharedCache;

/// Look up `key`; on a miss run `compute`, cache the result for `ttl`, and
/// return it.
///
/// A missing key, an expired entry, and a cached value that fails to decode
/// all count as a miss. A decoded value is a hit even when it is empty, so
/// an empty computed result shields the backing store for the full TTL.
/// Cache write failures are non-fatal: the computed value is returned and
/// the failure is logged and counted.
///
/// Concurrent callers may race to populate the same key; last writer wins.
/// `compute` must be deterministic over the same underlying data so the
/// race costs only duplicated work.
pub async fn get_or_compute<T, F, Fut, E>(
    cache: &dyn SharedCache,
    key: &str,
    ttl: Duration,
    compute: F,
) -> Result<T, E>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Some(value) = cache.get(key) {
        match serde_json::from_value(value) {
            Ok(decoded) => {
                counter!("cosmos_rail_cache_hit_total").increment(1);
                debug!(key, result = "hit", "shared cache lookup");
                return Ok(decoded);
            }
            Err(error) => {
                warn!(key, %error, "cached value failed to decode; recomputing");
            }
        }
    }

    counter!("cosmos_rail_cache_miss_total").increment(1);
    debug!(key, result = "miss", "shared cache lookup");

    let computed = compute().await?;

    match serde_json::to_value(&computed) {
        Ok(value) => {
            if let Err(error) = cache.set(key, value, ttl) {
                counter!("cosmos_rail_cache_write_fail_total").increment(1);
                warn!(key, %error, "cache write failed; returning computed value");
            }
        }
        Err(error) => {
            counter!("cosmos_rail_cache_write_fail_total").increment(1);
            warn!(key, %error, "computed value could not be serialised for caching");
        }
    }

    Ok(computed)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::{Value, json};

    use super::*;
    use crate::cache::store::{CacheError, MemoryCache};

    const TTL: Duration = Duration::from_secs(30);

    struct RejectingCache;

    impl SharedCache for RejectingCache {
        fn get(&self, _key: &str) -> Option<Value> {
            None
        }

        fn set(&self, _key: &str, _value: Value, _ttl: Duration) -> Result<(), CacheError> {
            Err(CacheError::store("write rejected"))
        }
    }

    async fn counted_compute(
        cache: &dyn SharedCache,
        calls: &AtomicUsize,
        result: Vec<u32>,
    ) -> Vec<u32> {
        get_or_compute(cache, "k", TTL, || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(result)
        })
        .await
        .expect("compute never fails here")
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_cache() {
        let cache = MemoryCache::new();
        let calls = AtomicUsize::new(0);

        let first = counted_compute(&cache, &calls, vec![1, 2, 3]).await;
        let second = counted_compute(&cache, &calls, vec![9, 9, 9]).await;

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, first);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_value_is_still_a_hit() {
        let cache = MemoryCache::new();
        let calls = AtomicUsize::new(0);

        counted_compute(&cache, &calls, Vec::new()).await;
        let cached = counted_compute(&cache, &calls, vec![7]).await;

        assert!(cached.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn undecodable_value_counts_as_miss() {
        let cache = MemoryCache::new();
        cache
            .set("k", json!("not a list"), TTL)
            .expect("seed cache");
        let calls = AtomicUsize::new(0);

        let value = counted_compute(&cache, &calls, vec![4]).await;

        assert_eq!(value, vec![4]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // The recomputed value replaces the broken entry.
        assert_eq!(cache.get("k"), Some(json!([4])));
    }

    #[tokio::test]
    async fn write_failure_still_returns_computed_value() {
        let cache = RejectingCache;
        let calls = AtomicUsize::new(0);

        let value = counted_compute(&cache, &calls, vec![5, 6]).await;

        assert_eq!(value, vec![5, 6]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn compute_error_propagates() {
        let cache = MemoryCache::new();

        let result: Result<Vec<u32>, String> =
            get_or_compute(&cache, "k", TTL, || async move { Err("store down".to_string()) }).await;

        assert_eq!(result.unwrap_err(), "store down");
        assert!(cache.get("k").is_none());
    }
}
