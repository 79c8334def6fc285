#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_neighbors_application::ports::NeighborTable;
use ferrous_neighbors_domain::{DomainError, Neighbor};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

pub struct MockNeighborTable {
    entries: Arc<RwLock<Vec<Neighbor>>>,
    refresh_count: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
}

impl MockNeighborTable {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            refresh_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_entries(entries: Vec<(&str, &str)>) -> Self {
        let mock = Self::new();
        *mock.entries.write().unwrap() = entries
            .into_iter()
            .map(|(ip, mac)| Neighbor::parse(ip, mac).unwrap())
            .collect();
        mock
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
            return Err(DomainError::IoError("proc/net/arp: permission denied".to_string()));
        }
        Ok(self.neighbors().len())
    }

    fn neighbors(&self) -> Vec<Neighbor> {
        self.entries.read().unwrap().clone()
    }
}
