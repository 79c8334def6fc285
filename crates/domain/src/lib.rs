//! Ferrous Neighbors Domain Layer
pub mod config;
pub mod errors;
pub mod neighbor;

pub use config::{
    CliOverrides, Config, ConfigError, LoggingConfig, NeighborsConfig, MAX_DURATION_SECS,
};
pub use errors::DomainError;
pub use neighbor::{MacAddr, Neighbor};
