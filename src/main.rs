//! Resource API entry point.

use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use resource_api::api::AppState;
use resource_api::config::Config;
use resource_api::error::Error;
use resource_api::metrics;
use resource_api::server::run_server;
use resource_api::utils::shutdown_signal;

/// In-memory CRUD service for blog posts, recipes and shopping-list items.
#[derive(Parser, Debug)]
#[command(name = "resource-api")]
#[command(about = "Serve blog posts, recipes and a shopping list from memory")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// HTTP listening port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Start with empty stores instead of sample records.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.no_seed {
        config.seed_samples = false;
    }
    config.verbose |= args.verbose;

    // Initialize logging
    let filter = if config.verbose {
        EnvFilter::new("resource_api=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let (text, json) = if config.log_json {
        (None, Some(fmt::layer().json()))
    } else {
        (Some(fmt::layer()), None)
    };
    tracing_subscriber::registry()
        .with(text)
        .with(json)
        .with(filter)
        .init();

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(Error::InvalidConfig(e).into());
    }
    let addr = config.socket_addr().map_err(Error::InvalidConfig)?;

    // Initialize metrics
    let prometheus = PrometheusBuilder::new().install_recorder()?;
    metrics::init_metrics();

    let state = if config.seed_samples {
        info!("Seeding stores with sample records");
        AppState::seeded()
    } else {
        AppState::new()
    }
    .with_prometheus(prometheus);

    let server = run_server(addr, state).await?;
    shutdown_signal().await;
    server.close().await?;

    info!("Shutdown complete");
    Ok(())
}
