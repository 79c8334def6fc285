mod neighbor_table;

pub use neighbor_table::NeighborTable;
