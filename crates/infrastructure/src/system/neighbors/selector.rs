use super::refresher::NeighborRefresher;
use super::source::NeighborSource;
use ferrous_neighbors_application::ports::NeighborTable;
use ferrous_neighbors_domain::{DomainError, NeighborsConfig};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Picks the first usable acquisition source, in the order given.
///
/// Selection happens once; the bound source is never swapped later, even if
/// it starts failing.
pub struct NeighborSourceSelector {
    candidates: Vec<NeighborSource>,
}

impl NeighborSourceSelector {
    pub fn new(candidates: Vec<NeighborSource>) -> Self {
        Self { candidates }
    }

    pub fn for_host(config: &NeighborsConfig) -> Self {
        Self::new(host_candidates(config))
    }

    /// Fails with [`DomainError::NeighborDiscoveryUnsupported`] when no
    /// candidate is usable.
    pub async fn select(self) -> Result<NeighborRefresher, DomainError> {
        for candidate in self.candidates {
            match candidate.probe().await {
                Ok(()) => {
                    info!(source = candidate.name(), "Neighbor table source selected");
                    return Ok(NeighborRefresher::new(candidate));
                }
                Err(e) => {
                    debug!(source = candidate.name(), error = %e, "Neighbor table source rejected");
                }
            }
        }

        Err(DomainError::NeighborDiscoveryUnsupported)
    }
}

/// Selects a source and loads the first snapshot.
///
/// A failing initial refresh is only logged; the table starts empty and the
/// scheduler retries on its next tick.
pub async fn bind_neighbor_table(
    selector: NeighborSourceSelector,
) -> Result<Arc<NeighborRefresher>, DomainError> {
    let refresher = Arc::new(selector.select().await?);

    if let Err(e) = refresher.refresh().await {
        warn!(
            source = refresher.source_name(),
            error = %e,
            "Initial neighbor table refresh failed"
        );
    }

    Ok(refresher)
}

#[cfg(target_os = "linux")]
pub fn host_candidates(config: &NeighborsConfig) -> Vec<NeighborSource> {
    use super::command::system_command;
    use super::fs::RootFs;
    use super::parsers::Dialect;
    use super::source::{CmdSource, FsysSource};
    use std::time::Duration;

    let timeout = Duration::from_secs(config.command_timeout_secs);

    vec![
        NeighborSource::Fsys(FsysSource::new(
            Arc::new(RootFs::new(&config.fs_root)),
            config.arp_file.clone(),
        )),
        NeighborSource::Cmd(CmdSource::new(
            "ip neigh show",
            system_command("ip", &["neigh", "show"], timeout),
            Dialect::IpNeigh,
        )),
        NeighborSource::Cmd(CmdSource::new(
            "arp -a",
            system_command("arp", &["-a"], timeout),
            Dialect::ArpA,
        )),
    ]
}

#[cfg(target_os = "windows")]
pub fn host_candidates(config: &NeighborsConfig) -> Vec<NeighborSource> {
    use super::command::system_command;
    use super::parsers::Dialect;
    use super::source::CmdSource;
    use std::time::Duration;

    let timeout = Duration::from_secs(config.command_timeout_secs);

    vec![NeighborSource::Cmd(CmdSource::new(
        "arp -a",
        system_command("arp", &["-a"], timeout),
        Dialect::ArpAWindows,
    ))]
}

/// macOS and the BSDs.
#[cfg(not(any(target_os = "linux", target_os = "windows")))]
pub fn host_candidates(config: &NeighborsConfig) -> Vec<NeighborSource> {
    use super::command::system_command;
    use super::parsers::Dialect;
    use super::source::CmdSource;
    use std::time::Duration;

    let timeout = Duration::from_secs(config.command_timeout_secs);

    vec![NeighborSource::Cmd(CmdSource::new(
        "arp -a",
        system_command("arp", &["-a"], timeout),
        Dialect::ArpA,
    ))]
}
