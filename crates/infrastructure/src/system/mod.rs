pub mod neighbors;

pub use neighbors::{
    bind_neighbor_table, host_candidates, NeighborRefresher, NeighborSource,
    NeighborSourceSelector,
};
