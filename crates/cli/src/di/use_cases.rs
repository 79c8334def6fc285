use super::neighbors::build_neighbor_table;
use ferrous_neighbors_application::use_cases::{
    GetNeighborsUseCase, RefreshNeighborsUseCase, ResolveClientMacUseCase,
};
use ferrous_neighbors_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub refresh_neighbors: Option<Arc<RefreshNeighborsUseCase>>,
    pub get_neighbors: Option<Arc<GetNeighborsUseCase>>,
    pub resolve_client_mac: Arc<ResolveClientMacUseCase>,
}

impl UseCases {
    pub async fn new(config: &Config) -> Self {
        match build_neighbor_table(&config.neighbors).await {
            Some(table) => Self {
                refresh_neighbors: Some(Arc::new(RefreshNeighborsUseCase::new(table.clone()))),
                get_neighbors: Some(Arc::new(GetNeighborsUseCase::new(table.clone()))),
                resolve_client_mac: Arc::new(ResolveClientMacUseCase::new(table)),
            },
            None => Self {
                refresh_neighbors: None,
                get_neighbors: None,
                resolve_client_mac: Arc::new(ResolveClientMacUseCase::disabled()),
            },
        }
    }
}
