use std::net::SocketAddr;
use std::time::Duration;

use tracing::{info, warn};

use board_server::cache::{CacheConfig, CachedDigitrafficClient};
use board_server::digitraffic::{DigitrafficClient, DigitrafficConfig};
use board_server::domain::ShortCode;
use board_server::session::Directive;
use board_server::web::{AppState, create_router};

/// How often to refresh the station catalog (24 hours).
const CATALOG_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Station shown before the user picks one.
const DEFAULT_STATION: &str = "HKI";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "board_server=info".into()),
        )
        .init();

    // Optional overrides from the environment
    let mut config = DigitrafficConfig::new();
    if let Ok(base_url) = std::env::var("DIGITRAFFIC_BASE_URL") {
        config = config.with_base_url(base_url);
    }

    let client = DigitrafficClient::new(config).expect("Failed to create Digitraffic client");
    let cached = CachedDigitrafficClient::new(client.clone(), &CacheConfig::default());

    // Load the station catalog; a failed load degrades to an empty
    // index (no suggestions) rather than aborting.
    info!("loading station catalog");
    let catalog = board_server::stations::StationCatalog::bootstrap(client).await;
    info!(stations = catalog.len().await, "station catalog loaded");

    // Refresh the catalog daily in the background. Failures keep the
    // current set.
    let catalog_refresh = catalog.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CATALOG_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match catalog_refresh.refresh().await {
                Ok(count) => info!(stations = count, "refreshed station catalog"),
                Err(e) => warn!(error = %e, "failed to refresh station catalog"),
            }
        }
    });

    let state = AppState::new(cached, catalog);

    // Default selection: resolve the configured station and warm its
    // board so the first page load shows it immediately. An unknown
    // default leaves the session uninitialized with no board.
    let default_code = std::env::var("BOARD_DEFAULT_STATION")
        .unwrap_or_else(|_| DEFAULT_STATION.to_string());
    match ShortCode::parse_normalized(&default_code) {
        Ok(code) => {
            let directive = {
                let mut session = state.session.lock().await;
                state
                    .stations
                    .with_index(|index| session.bootstrap(index, &code))
                    .await
            };
            match directive {
                Some(Directive::FetchBoard(code)) => {
                    if let Err(e) = state.trains.live_trains(&code).await {
                        warn!(station = %code, error = %e, "default board fetch failed");
                    }
                    info!(station = %code, "default station selected");
                }
                _ => warn!(station = %code, "default station not in catalog; no board shown"),
            }
        }
        Err(e) => warn!(code = %default_code, error = %e, "invalid default station code"),
    }

    let app = create_router(state, "board-server/static");

    let addr: SocketAddr = std::env::var("BOARD_BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    info!(%addr, "arrival board listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
