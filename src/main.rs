use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use meta_proxy::config::Config;
use meta_proxy::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration first so APP_ENV from .env picks the log format.
    let config = Config::from_env().expect("Failed to load configuration");

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("meta_proxy=info,tower_http=info"));

    if config.is_production {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🚀 Meta proxy starting...");
    info!(
        user_agent = %config.user_agent,
        fetch_timeout = ?config.fetch_timeout,
        "📝 Configuration loaded"
    );

    let http_client = config
        .http_client()
        .expect("Failed to build upstream HTTP client");

    let app = meta_proxy::app(AppState { http_client });

    let addr = config.server_addr();
    info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed to start");
}

async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    info!("👋 Shutting down");
}
