use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use super::PageError;
use crate::{server::AppState, spotify};

pub async fn home() -> Html<&'static str> {
    Html(
        "<h1>Welcome to the Spotify Top Tracks App</h1>\
         <p><a href=\"/login\">Login with Spotify</a></p>",
    )
}

/// Sends the browser to Spotify's authorization page with a `302 Found`.
pub async fn login(State(state): State<AppState>) -> Result<Response, PageError> {
    let auth_url = spotify::auth::authorize_url(&state.config)
        .map_err(|e| PageError::new("Error building login url", e))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, auth_url.to_string())]).into_response())
}
