#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_neighbors_application::ports::NeighborTable;
use ferrous_neighbors_domain::{DomainError, Neighbor};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Table whose "host" contents are set by the test; `refresh` publishes them.
pub struct MockNeighborTable {
    host: Arc<RwLock<Vec<Neighbor>>>,
    published: Arc<RwLock<Vec<Neighbor>>>,
    refresh_count: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
}

impl MockNeighborTable {
    pub fn new() -> Self {
        Self {
            host: Arc::new(RwLock::new(Vec::new())),
            published: Arc::new(RwLock::new(Vec::new())),
            refresh_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_entries(entries: Vec<(&str, &str)>) -> Self {
        let mock = Self::new();
        for (ip, mac) in entries {
            mock.add_entry(ip, mac);
        }
        mock
    }

    pub fn add_entry(&self, ip: &str, mac: &str) {
        let neighbor = Neighbor::parse(ip, mac).unwrap();
        self.host.write().unwrap().push(neighbor);
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl NeighborTable for MockNeighborTable {
    async fn refresh(&self) -> Result<usize, DomainError> {
        self.refresh_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::NeighborCommandFailed(
                "ip neigh: exit status 1".to_string(),
            ));
        }
        let snapshot = self.host.read().unwrap().clone();
        let count = snapshot.len();
        *self.published.write().unwrap() = snapshot;
        Ok(count)
    }

    fn neighbors(&self) -> Vec<Neighbor> {
        self.published.read().unwrap().clone()
    }
}
