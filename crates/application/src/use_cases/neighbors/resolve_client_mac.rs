use crate::ports::NeighborTable;
use ferrous_neighbors_domain::MacAddr;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::trace;

/// Use case: map a DNS client IP to the hardware address of the device.
///
/// Built without a table when neighbor discovery is unsupported on the host;
/// every lookup then misses and clients are identified by IP only.
pub struct ResolveClientMacUseCase {
    table: Option<Arc<dyn NeighborTable>>,
}

impl ResolveClientMacUseCase {
    pub fn new(table: Arc<dyn NeighborTable>) -> Self {
        Self { table: Some(table) }
    }

    pub fn disabled() -> Self {
        Self { table: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.table.is_some()
    }

    pub fn execute(&self, client_ip: IpAddr) -> Option<MacAddr> {
        let table = self.table.as_ref()?;
        let mac = table.lookup(client_ip);
        trace!(ip = %client_ip, found = mac.is_some(), "Client MAC lookup");
        mac
    }
}
