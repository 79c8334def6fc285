use crate::ports::NeighborTable;
use ferrous_neighbors_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: re-read the host neighbor table.
/// Driven by the periodic refresh job, never by request handlers.
pub struct RefreshNeighborsUseCase {
    table: Arc<dyn NeighborTable>,
}

impl RefreshNeighborsUseCase {
    pub fn new(table: Arc<dyn NeighborTable>) -> Self {
        Self { table }
    }

    /// Returns the number of entries in the new snapshot.
    pub async fn execute(&self) -> Result<usize, DomainError> {
        debug!("Refreshing neighbor table");

        let count = self.table.refresh().await?;

        info!(entries = count, "Neighbor table refreshed");
        Ok(count)
    }
}
