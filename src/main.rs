use std::{future::IntoFuture, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use rustbroker::{config, routes, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = config::load();

    let state = AppState::connect(settings.clone())
        .await
        .expect("Failed to open SQLite databases");

    let ip = settings
        .host
        .parse::<std::net::IpAddr>()
        .expect("HOST must be an IP address");
    let api_addr = SocketAddr::from((ip, settings.port));
    let report_addr = SocketAddr::from((ip, settings.report_port));

    let api_listener = tokio::net::TcpListener::bind(api_addr).await.unwrap();
    let report_listener = tokio::net::TcpListener::bind(report_addr).await.unwrap();

    tracing::info!("api listening on http://{}", api_addr);
    tracing::info!("reports listening on http://{}", report_addr);

    let api = axum::serve(api_listener, routes::app(state.clone())).into_future();
    let reports = axum::serve(report_listener, routes::report_app(state)).into_future();

    if let Err(e) = tokio::try_join!(api, reports) {
        tracing::error!("server error: {e}");
    }
}
