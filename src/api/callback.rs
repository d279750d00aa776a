use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::PageError;
use crate::server::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    /// Set by Spotify instead of `code` when the user denies access.
    pub error: Option<String>,
}

pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Response, PageError> {
    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        if let Some(error) = &params.error {
            tracing::warn!(%error, "authorization was not granted");
        }
        return Ok("No code provided".into_response());
    };

    let token = state
        .spotify
        .exchange_code(&code)
        .await
        .map_err(|e| PageError::new("Error getting tokens", e))?;

    tracing::info!(
        scope = %token.scope,
        expires_in = token.expires_in,
        "access token received"
    );
    *state.token.lock().await = Some(token);

    Ok(Html(
        "<h2>Access Token Received! ✅</h2><br>\
         <a href=\"/top-tracks\">View Your Top Songs (Last 4 Years)</a>",
    )
    .into_response())
}
