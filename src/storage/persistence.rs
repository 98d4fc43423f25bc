use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::bucket::Bucket;
use super::store::KeyValueStore;

const BUCKET_VERSION: u32 = 1;

/// On-disk wrapper around a bucket value.
#[derive(Debug, Serialize, Deserialize)]
struct StoredBucket<T> {
    version: u32,
    saved_at: DateTime<Utc>,
    value: T,
}

/// Load/save/clear of named buckets over a key-value store.
///
/// No operation here fails: unreadable or corrupt buckets fall back to the
/// caller's default and failed writes are logged.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
    namespace: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Namespaced storage key for a bucket
    pub fn key(&self, bucket: Bucket) -> String {
        bucket.key(&self.namespace)
    }

    /// Store `value` under the bucket's key.
    ///
    /// Returns whether the value reached the store.
    pub fn save<T: Serialize>(&mut self, bucket: Bucket, value: &T) -> bool {
        let key = self.key(bucket);
        let stored = StoredBucket {
            version: BUCKET_VERSION,
            saved_at: Utc::now(),
            value,
        };

        let json = match serde_json::to_string_pretty(&stored) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("failed to serialize {}: {}", key, e);
                return false;
            }
        };

        match self.store.set(&key, &json) {
            Ok(()) => {
                tracing::debug!("saved {}", key);
                true
            }
            Err(e) => {
                tracing::warn!("failed to save {}: {}", key, e);
                false
            }
        }
    }

    /// Previously saved value, or `default` if absent, unreadable or corrupt.
    pub fn load<T: DeserializeOwned>(&self, bucket: Bucket, default: T) -> T {
        match self.read::<T>(bucket) {
            Some(stored) => stored.value,
            None => default,
        }
    }

    /// When the bucket was last saved, if it can be read.
    pub fn saved_at(&self, bucket: Bucket) -> Option<DateTime<Utc>> {
        self.read::<serde_json::Value>(bucket).map(|s| s.saved_at)
    }

    /// Remove the given buckets. Failures are logged and skipped.
    pub fn clear(&mut self, buckets: &[Bucket]) {
        for bucket in buckets {
            let key = self.key(*bucket);
            match self.store.remove(&key) {
                Ok(()) => tracing::debug!("cleared {}", key),
                Err(e) => tracing::warn!("failed to clear {}: {}", key, e),
            }
        }
    }

    fn read<T: DeserializeOwned>(&self, bucket: Bucket) -> Option<StoredBucket<T>> {
        let key = self.key(bucket);
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("{} not saved yet", key);
                return None;
            }
            Err(e) => {
                tracing::warn!("failed to load {}: {}", key, e);
                return None;
            }
        };

        let stored: StoredBucket<T> = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("ignoring corrupt {}: {}", key, e);
                return None;
            }
        };

        if stored.version != BUCKET_VERSION {
            tracing::warn!("ignoring {}: unsupported version {}", key, stored.version);
            return None;
        }

        Some(stored)
    }
}
