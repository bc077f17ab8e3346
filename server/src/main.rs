mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    match &config.proxy_target {
        Some(target) => tracing::info!(%target, "api proxy enabled"),
        None => tracing::info!("api proxy disabled (SATS_JAR_API_PROXY_TARGET unset)"),
    }

    let port = config.port;
    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "satsjar listening");
    axum::serve(listener, app).await.expect("server failed");
}
