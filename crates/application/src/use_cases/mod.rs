pub mod neighbors;

pub use neighbors::{GetNeighborsUseCase, RefreshNeighborsUseCase, ResolveClientMacUseCase};
