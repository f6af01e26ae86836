//! Content store backends.

use super::key::ContentKey;
use crate::types::ContentRecord;
use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Append-only store of generated content, shared for the process lifetime.
///
/// Implementations must provide atomic check-then-set semantics per key: the
/// first write for a key wins and later writes are ignored. Only successful
/// generations are ever stored, so concurrent writers for the same key always
/// carry identical data and the race converges.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn get(&self, key: &ContentKey) -> Result<Option<ContentRecord>>;
    /// Insert if absent. Returns `true` when the record was written, `false`
    /// when the key already held one.
    async fn insert(&self, key: &ContentKey, record: &ContentRecord) -> Result<bool>;
    async fn contains(&self, key: &ContentKey) -> Result<bool>;
    async fn len(&self) -> Result<usize>;
    fn name(&self) -> &'static str;
}

/// In-memory store. No eviction and no TTL: the universe of topics times
/// languages is small and finite, so entries live as long as the process.
pub struct MemoryStore {
    entries: RwLock<HashMap<ContentKey, ContentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get(&self, key: &ContentKey) -> Result<Option<ContentRecord>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(key).cloned())
    }

    async fn insert(&self, key: &ContentKey, record: &ContentRecord) -> Result<bool> {
        let mut entries = self.entries.write().unwrap();
        if entries.contains_key(key) {
            return Ok(false);
        }
        entries.insert(key.clone(), record.clone());
        Ok(true)
    }

    async fn contains(&self, key: &ContentKey) -> Result<bool> {
        Ok(self.entries.read().unwrap().contains_key(key))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.entries.read().unwrap().len())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// No-op store for disabling caching (every fetch goes to the network).
pub struct NullStore;

impl NullStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for NullStore {
    async fn get(&self, _: &ContentKey) -> Result<Option<ContentRecord>> {
        Ok(None)
    }

    async fn insert(&self, _: &ContentKey, _: &ContentRecord) -> Result<bool> {
        Ok(false)
    }

    async fn contains(&self, _: &ContentKey) -> Result<bool> {
        Ok(false)
    }

    async fn len(&self) -> Result<usize> {
        Ok(0)
    }

    fn name(&self) -> &'static str {
        "null"
    }
}
