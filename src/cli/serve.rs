use std::{net::SocketAddr, sync::Arc};

use crate::{
    config::Config,
    error, logging,
    management::SqliteSnapshotStore,
    server::{AppState, start_api_server},
    spotify::SpotifyClient,
    success, warning,
};

/// Starts the web server and blocks until it stops.
///
/// # Arguments
///
/// * `address` - Overrides `SERVER_ADDRESS` when given
/// * `open` - Opens the welcome page in the default browser once the server
///   task is running
///
/// # Error Handling
///
/// Configuration and database failures end the process through `error!`.
/// Failures inside a request never do; they are answered by the handler.
pub async fn serve(address: Option<SocketAddr>, open: bool) {
    logging::init_logging(logging::DEFAULT_FILTER);

    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };
    if let Some(addr) = address {
        config.server_address = addr;
    }

    let store = match SqliteSnapshotStore::connect(&config.database_url).await {
        Ok(s) => s,
        Err(e) => error!("Cannot open snapshot database {}. Err: {}", config.database_url, e),
    };

    let addr = config.server_address;
    let spotify = SpotifyClient::new(&config);
    let state = AppState::new(config, Arc::new(spotify), Arc::new(store));

    let server = tokio::spawn(start_api_server(state, addr));
    success!("Server running on http://{}", addr);

    if open {
        let url = format!("http://{addr}/");
        if webbrowser::open(&url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }

    match server.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Server stopped. Err: {}", e),
        Err(e) => error!("Server task failed. Err: {}", e),
    }
}
