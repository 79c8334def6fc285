pub mod get_neighbors;
pub mod refresh_neighbors;
pub mod resolve_client_mac;

pub use get_neighbors::GetNeighborsUseCase;
pub use refresh_neighbors::RefreshNeighborsUseCase;
pub use resolve_client_mac::ResolveClientMacUseCase;
