//! Shared-cache contract and the bundled TTL-aware in-memory store.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use serde_json::Value;
use thiserror::Error;

use super::lock::{rw_read, rw_write};

const SOURCE: &str = "cache::store";

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache store error: {0}")]
    Store(String),
}

impl CacheError {
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }
}

/// Process-external key-value cache contract.
///
/// Values cross the seam as JSON, matching what a networked cache would
/// hold. Reads never fail visibly (a broken read is a miss); writes may
/// fail and callers treat that as non-fatal.
pub trait SharedCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), CacheError>;
}

struct Entry {
    value: Value,
    expires_at: Instant,
}

/// TTL-aware in-process implementation of [`SharedCache`].
///
/// Default and test implementation; hosts with a networked cache implement
/// the trait over their own client. Expired entries are dropped lazily on
/// the next write.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        rw_read(&self.entries, SOURCE, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SharedCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let entries = rw_read(&self.entries, SOURCE, "get");
        entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.value.clone())
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), CacheError> {
        let now = Instant::now();
        let mut entries = rw_write(&self.entries, SOURCE, "set");
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: now + ttl,
            },
        );
        Ok(())
    }
}
