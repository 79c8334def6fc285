use crate::ports::NeighborTable;
use ferrous_neighbors_domain::Neighbor;
use std::sync::Arc;

pub struct GetNeighborsUseCase {
    table: Arc<dyn NeighborTable>,
}

impl GetNeighborsUseCase {
    pub fn new(table: Arc<dyn NeighborTable>) -> Self {
        Self { table }
    }

    pub fn execute(&self) -> Vec<Neighbor> {
        self.table.neighbors()
    }
}
