use super::source::NeighborSource;
use super::store::NeighborStore;
use async_trait::async_trait;
use ferrous_neighbors_application::ports::NeighborTable;
use ferrous_neighbors_domain::{DomainError, MacAddr, Neighbor};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Owns the bound source and the published snapshot.
///
/// A failed refresh leaves the last good snapshot in place and hands the
/// error back to the caller; retry cadence is the scheduler's business.
pub struct NeighborRefresher {
    source: NeighborSource,
    store: NeighborStore,
}

impl NeighborRefresher {
    pub fn new(source: NeighborSource) -> Self {
        Self {
            source,
            store: NeighborStore::new(),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn snapshot(&self) -> Arc<[Neighbor]> {
        self.store.snapshot()
    }
}

#[async_trait]
impl NeighborTable for NeighborRefresher {
    async fn refresh(&self) -> Result<usize, DomainError> {
        let neighbors = self.source.fetch().await?;

        debug!(
            source = self.source.name(),
            entries = neighbors.len(),
            "Neighbor snapshot replaced"
        );

        let count = neighbors.len();
        self.store.set_all(neighbors);
        Ok(count)
    }

    fn neighbors(&self) -> Vec<Neighbor> {
        self.store.neighbors()
    }

    fn lookup(&self, ip: IpAddr) -> Option<MacAddr> {
        let ip = ip.to_canonical();
        self.store
            .snapshot()
            .iter()
            .find(|n| n.ip == ip)
            .map(|n| n.mac)
    }
}
