//! Shared test helpers for persistence tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use storekeep_persistence::{ProductLookup, StaticCatalog};
use storekeep_storage::{MemoryStore, SecureStore, StorageError, StorageResult};
use storekeep_types::{ProductId, ProductKind, ProductRecord};

pub const PRO: &str = "com.example.pro";
pub const LITE: &str = "com.example.lite";
pub const MONTHLY: &str = "com.example.monthly";

/// Routes `tracing` output to the test harness. Set `RUST_LOG` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn id(s: &str) -> ProductId {
    ProductId::new(s)
}

pub fn ids(list: &[&str]) -> HashSet<ProductId> {
    list.iter().map(|s| ProductId::new(*s)).collect()
}

pub fn record(id: &str) -> ProductRecord {
    ProductRecord::new(id, format!("Title of {id}"), "4.99", "USD")
}

pub fn catalog() -> StaticCatalog {
    StaticCatalog::from_records([
        record(PRO),
        record(LITE),
        record(MONTHLY).with_kind(ProductKind::AutoRenewable),
    ])
}

/// Lookup that records every request it receives.
#[derive(Default)]
pub struct CountingLookup {
    catalog: StaticCatalog,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<HashSet<ProductId>>>,
}

impl CountingLookup {
    pub fn new(catalog: StaticCatalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    /// Sleeps for `delay` before answering each request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<HashSet<ProductId>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductLookup for CountingLookup {
    async fn lookup(&self, ids: &HashSet<ProductId>) -> HashSet<ProductRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(ids.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.catalog.lookup(ids).await
    }
}

/// Store that counts calls and can be told to fail reads or writes.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl FlakyStore {
    pub fn failing_reads(inner: MemoryStore) -> Self {
        Self {
            inner,
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SecureStore for FlakyStore {
    fn get_bytes(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(StorageError::Io(std::io::Error::other("read failed")));
        }
        self.inner.get_bytes(key)
    }

    fn set_bytes(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StorageError::Io(std::io::Error::other("write failed")));
        }
        self.inner.set_bytes(key, bytes)
    }

    fn remove_bytes(&self, key: &str) -> StorageResult<()> {
        self.inner.remove_bytes(key)
    }
}
