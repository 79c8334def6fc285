pub mod neighbor_refresh;
pub mod runner;

pub use neighbor_refresh::NeighborRefreshJob;
pub use runner::JobRunner;
