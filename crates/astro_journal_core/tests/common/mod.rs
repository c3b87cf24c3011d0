#![allow(dead_code)]

use astro_journal_core::{KeyValueStore, KvError, KvResult, SqliteKeyValueStore};
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory SQLite store whose reads and writes can be switched to fail.
pub struct FlakyStore {
    inner: SqliteKeyValueStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    yield_reads: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self {
            inner: SqliteKeyValueStore::open_in_memory().unwrap(),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            yield_reads: AtomicBool::new(false),
        }
    }

    pub fn fail_reads(&self, enabled: bool) {
        self.fail_reads.store(enabled, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, enabled: bool) {
        self.fail_writes.store(enabled, Ordering::SeqCst);
    }

    /// Makes every read return `Pending` once before completing.
    pub fn yield_reads(&self, enabled: bool) {
        self.yield_reads.store(enabled, Ordering::SeqCst);
    }

    /// Reads straight from the backing store, bypassing read failures.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key).await.unwrap()
    }
}

impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        if self.yield_reads.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(KvError::LockPoisoned);
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> KvResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KvError::LockPoisoned);
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, keys: &[&str]) -> KvResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KvError::LockPoisoned);
        }
        self.inner.remove(keys).await
    }
}
