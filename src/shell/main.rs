use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use appointment_requests::shared::config::{AppConfig, BOOKING_PATH, GRAPHQL_PATH};
use appointment_requests::shared::infrastructure::http_client::build_http_client;
use appointment_requests::shell::http::router;
use appointment_requests::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let client = build_http_client(config.http_timeout)?;
    let state = AppState::from_config(&config, client);

    let app = router(state, &config.relay.path)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let channels: Vec<_> = config.booking.channels.iter().map(|c| c.kind().as_str()).collect();
    tracing::info!(?channels, "booking channels configured");
    tracing::info!("Booking endpoint: http://{}{}", config.addr, BOOKING_PATH);
    tracing::info!("GraphQL endpoint: http://{}{}", config.addr, GRAPHQL_PATH);
    tracing::info!("Relay endpoint: http://{}{}", config.addr, config.relay.path);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
