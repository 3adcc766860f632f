use std::net::SocketAddr;
use std::sync::Arc;

use concierge_api::{app, AppState};
use concierge_infra::config::Config;
use concierge_infra::{HttpItineraryConnector, HttpProfileClient};
use concierge_reservations::ReservationAdapter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "concierge_api=debug,concierge_reservations=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting Concierge API on port {}", config.server.port);

    let connector = HttpItineraryConnector::new(&config.itinerary.base_url, config.itinerary.timeout())?;
    let profiles = HttpProfileClient::new(&config.profiles.base_url, config.profiles.timeout())?;

    let app_state = AppState {
        adapter: Arc::new(ReservationAdapter::new(Arc::new(connector), config.defaults.clone().into())),
        profiles: Arc::new(profiles),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;
    Ok(())
}
