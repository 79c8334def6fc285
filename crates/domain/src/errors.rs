use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Neighbor source unavailable: {0}")]
    NeighborSourceUnavailable(String),

    #[error("Neighbor command failed: {0}")]
    NeighborCommandFailed(String),

    #[error("Neighbor discovery is not supported on this host")]
    NeighborDiscoveryUnsupported,

    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
