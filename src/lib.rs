pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router. Routing is done by [`handlers::dispatch`],
/// so every path and method lands in the same fallback.
pub fn app(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
