use clap::Parser;
use ferrous_neighbors_domain::{CliOverrides, Neighbor};
use ferrous_neighbors_jobs::{JobRunner, NeighborRefreshJob};
use std::net::IpAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-neighbors")]
#[command(version)]
#[command(about = "Ferrous Neighbors - host neighbor table discovery for DNS client identification")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Refresh interval in seconds
    #[arg(short = 'i', long)]
    interval: Option<u64>,

    /// Print the neighbor table once and exit
    #[arg(long)]
    once: bool,

    /// Print the MAC address of one client IP and exit
    #[arg(long, value_name = "IP")]
    lookup: Option<IpAddr>,

    /// Print as JSON instead of columns
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        refresh_interval_secs: cli.interval,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Neighbors v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = di::UseCases::new(&config).await;

    if let Some(ip) = cli.lookup {
        match use_cases.resolve_client_mac.execute(ip) {
            Some(mac) => println!("{}", mac),
            None => anyhow::bail!("no neighbor entry for {}", ip),
        }
        return Ok(());
    }

    if cli.once {
        let Some(get_neighbors) = use_cases.get_neighbors else {
            anyhow::bail!("neighbor discovery is not supported on this host");
        };
        print_neighbors(&get_neighbors.execute(), cli.json)?;
        return Ok(());
    }

    let shutdown = CancellationToken::new();

    if let Some(refresh) = use_cases.refresh_neighbors {
        let job = NeighborRefreshJob::new(refresh)
            .with_interval(config.neighbors.refresh_interval_secs);

        JobRunner::new()
            .with_neighbor_refresh(job)
            .with_shutdown_token(shutdown.clone())
            .start()
            .await;
    }

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    shutdown.cancel();

    info!("Shutdown complete");
    Ok(())
}

fn print_neighbors(neighbors: &[Neighbor], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(neighbors)?);
        return Ok(());
    }

    println!("{:<40} {:<17} NAME", "IP", "MAC");
    for n in neighbors {
        println!(
            "{:<40} {:<17} {}",
            n.ip.to_string(),
            n.mac.to_string(),
            n.name.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
