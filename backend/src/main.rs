use std::net::SocketAddr;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod domain;
mod rest;

use domain::ReservationBook;
use rest::{create_router, AppState};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:8080";

/// Server settings read from the environment
struct BackendConfig {
    addr: SocketAddr,
    frontend_origin: HeaderValue,
}

impl BackendConfig {
    fn from_env() -> anyhow::Result<Self> {
        let addr = std::env::var("RESERVATION_BACKEND_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let origin =
            std::env::var("RESERVATION_FRONTEND_ORIGIN").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_string());

        Ok(Self {
            addr: addr
                .parse()
                .with_context(|| format!("invalid RESERVATION_BACKEND_ADDR: {addr}"))?,
            frontend_origin: origin
                .parse()
                .with_context(|| format!("invalid RESERVATION_FRONTEND_ORIGIN: {origin}"))?,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BackendConfig::from_env()?;

    // CORS setup to allow the calendar page to call us
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(AppState::new(ReservationBook::new())).layer(cors);

    info!("Starting reservation service on {}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
