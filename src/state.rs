/// Shared application state passed to the dispatcher.
/// Only the upstream client is shared; every request builds its own reader.
#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
}
