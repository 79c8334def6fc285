use ferrous_neighbors_application::use_cases::RefreshNeighborsUseCase;
use ferrous_neighbors_domain::MAX_DURATION_SECS;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Periodically re-reads the host neighbor table.
///
/// The first tick comes one interval after start since the table is already
/// loaded when the source is bound. Failures are logged and the next tick
/// tries again; the previous snapshot stays readable meanwhile.
pub struct NeighborRefreshJob {
    refresh: Arc<RefreshNeighborsUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl NeighborRefreshJob {
    pub fn new(refresh: Arc<RefreshNeighborsUseCase>) -> Self {
        Self {
            refresh,
            interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Effective tick period, kept within one second and one day.
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.interval_secs.clamp(1, MAX_DURATION_SECS))
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting neighbor table refresh job"
        );

        let job = Arc::clone(&self);
        tokio::spawn(async move {
            let period = job.period();
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = job.shutdown.cancelled() => {
                        info!("NeighborRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = job.refresh.execute().await {
                            error!(error = %e, "Neighbor table refresh failed");
                        }
                    }
                }
            }
        });
    }
}
