use async_trait::async_trait;
use ferrous_neighbors_domain::{DomainError, MacAddr, Neighbor};
use std::net::IpAddr;

/// The host neighbor table as seen by the rest of the appliance.
///
/// `refresh` may block on file reads or process execution and belongs to a
/// background scheduler, never to a request path. `neighbors` and `lookup`
/// only read the last published snapshot.
#[async_trait]
pub trait NeighborTable: Send + Sync {
    /// Re-reads the table and returns the size of the snapshot it published.
    /// On error the previous snapshot stays in place.
    async fn refresh(&self) -> Result<usize, DomainError>;

    /// Copy of the last successfully refreshed snapshot, in source order.
    fn neighbors(&self) -> Vec<Neighbor>;

    /// MAC of the first snapshot entry with this IP. IPv4-mapped IPv6
    /// queries match the stored IPv4 entry.
    fn lookup(&self, ip: IpAddr) -> Option<MacAddr> {
        let ip = ip.to_canonical();
        self.neighbors()
            .into_iter()
            .find(|n| n.ip == ip)
            .map(|n| n.mac)
    }
}
