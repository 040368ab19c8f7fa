use std::net::SocketAddr;

use signal_relay::{config, routes, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = config::load();
    for var in settings.missing_vars() {
        tracing::warn!("{} is not set", var);
    }
    if settings.webhook_secret.is_empty() {
        tracing::warn!("webhook secret is empty: every request will be accepted");
    }

    let addr = SocketAddr::from((settings.host.parse::<std::net::IpAddr>()?, settings.port));
    let app = routes::app(AppState::new(settings));

    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
