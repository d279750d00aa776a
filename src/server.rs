use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::Mutex;

use crate::{
    Res, api,
    config::Config,
    management::SnapshotStore,
    spotify::SpotifyApi,
    types::Token,
};

/// State shared by every handler.
///
/// `token` holds the one access token the service works with. Logging in again
/// replaces it for everybody.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub spotify: Arc<dyn SpotifyApi>,
    pub store: Arc<dyn SnapshotStore>,
    pub token: Arc<Mutex<Option<Token>>>,
}

impl AppState {
    pub fn new(
        config: Config,
        spotify: Arc<dyn SpotifyApi>,
        store: Arc<dyn SnapshotStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            spotify,
            store,
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Access token of the current login, if any.
    pub async fn access_token(&self) -> Option<String> {
        self.token
            .lock()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/top-tracks", get(api::top_tracks))
        .route("/history", get(api::history))
        .route("/health", get(api::health))
        .with_state(state)
}

pub async fn start_api_server(state: AppState, addr: SocketAddr) -> Res<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
