use ferrous_neighbors_application::ports::NeighborTable;
use ferrous_neighbors_domain::NeighborsConfig;
use ferrous_neighbors_infrastructure::system::{bind_neighbor_table, NeighborSourceSelector};
use std::sync::Arc;
use tracing::{info, warn};

/// `None` means clients are identified by IP only.
pub async fn build_neighbor_table(config: &NeighborsConfig) -> Option<Arc<dyn NeighborTable>> {
    if !config.enabled {
        info!("Neighbor discovery disabled by configuration");
        return None;
    }

    match bind_neighbor_table(NeighborSourceSelector::for_host(config)).await {
        Ok(refresher) => {
            info!(
                source = refresher.source_name(),
                entries = refresher.snapshot().len(),
                "Neighbor discovery enabled"
            );
            let table: Arc<dyn NeighborTable> = refresher;
            Some(table)
        }
        Err(e) => {
            warn!(
                error = %e,
                "Neighbor discovery unavailable, MAC-based client identification disabled"
            );
            None
        }
    }
}
