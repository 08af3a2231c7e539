//! azhealthcheck daemon entry point.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use azhealthcheck::config::{self, HealthcheckConfig};
use azhealthcheck::http::HttpServer;
use azhealthcheck::lifecycle::{shutdown::wait_for_signal, Shutdown};
use azhealthcheck::observability::logging;
use azhealthcheck::probe::{ProbeScheduler, TargetProber};
use azhealthcheck::status::StatusStore;

#[derive(Debug, Parser)]
#[command(name = "azhealthcheck", about = "Aggregated AZ health endpoint")]
struct Args {
    /// Path to the YAML config file; defaults to the conventional
    /// /etc/azhealthcheck.yaml then ./azhealthcheck.yaml.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("azhealthcheck=info,tower_http=info");

    let args = Args::parse();
    let path = match args.config {
        Some(path) => path,
        None => config::locate_config()
            .ok_or("unable to locate azhealthcheck.yaml config file")?,
    };

    tracing::info!(path = %path.display(), "loading configuration");
    let config = config::load_config(&path).map_err(|e| {
        tracing::error!(error = %e, "configuration rejected");
        e
    })?;
    log_config(&config);

    let status = Arc::new(StatusStore::new());
    let shutdown = Shutdown::new();

    // Probers are built once; host config is immutable while running.
    let mut probers = Vec::with_capacity(config.hosts.len());
    for (key, host) in &config.hosts {
        probers.push(TargetProber::new(
            key.clone(),
            host,
            &config.browser_agent,
        )?);
    }

    let scheduler = ProbeScheduler::new(
        probers,
        Duration::from_secs(config.check_interval),
        status.clone(),
    );
    let scheduler_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        scheduler.run(scheduler_shutdown).await;
    });

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = TcpListener::bind(addr).await?;

    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(status);
    server.run(listener, server_shutdown).await?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Startup summary of the loaded configuration, replacing the legacy
/// console dump.
fn log_config(config: &HealthcheckConfig) {
    tracing::info!(
        browser_agent = %config.browser_agent,
        check_mk_service_name = %config.check_mk_service_name,
        check_interval_secs = config.check_interval,
        port = config.port,
        hosts = config.hosts.len(),
        "configuration loaded"
    );
    for (key, host) in &config.hosts {
        tracing::info!(
            host = %key,
            name = %host.name,
            url = %host.url,
            headers = host.headers.len(),
            client_certs = host.uses_client_certs(),
            "host check configured"
        );
    }
}
