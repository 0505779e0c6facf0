use brt_server::config::ServerConfig;
use brt_server::network::TransitNetwork;
use brt_server::seed::{NetworkSeed, demo_network};
use brt_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|err| {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            eprintln!("invalid {}, falling back to 'info': {err}", EnvFilter::DEFAULT_ENV);
        }
        EnvFilter::new("info")
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn load_network(config: &ServerConfig) -> Result<TransitNetwork, Box<dyn std::error::Error>> {
    let network = match &config.seed_path {
        Some(path) => {
            info!(path = %path.display(), "loading network seed");
            NetworkSeed::from_path(path)?.build(config.network.clone())?
        }
        None => {
            info!("no BRT_SEED set, using demo network");
            demo_network(config.network.clone())?
        }
    };

    info!(
        stations = network.station_count(),
        routes = network.route_count(),
        trunks = network.trunk_count(),
        default_segment_minutes = network.config().default_segment_minutes,
        "network ready"
    );
    Ok(network)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ServerConfig::from_env()?;
    let network = load_network(&config)?;

    let state = AppState::new(network);
    let app = create_router(state);

    info!(addr = %config.addr, "BRT network server listening");
    info!("  GET  /health");
    info!("  GET  /stations/:id/wait");
    info!("  PUT  /stations/:id/occupancy");
    info!("  GET  /routes");
    info!("  GET  /routes/:code/stops?origin=&destination=");
    info!("  GET  /direct?origin=&destination=");
    info!("  GET  /trunks/:name/travel-time?origin=&destination=");

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
