use axum::{extract::State, response::Html};

use super::{LOGIN_PROMPT, PageError};
use crate::{management::TopTracksCollector, server::AppState};

const FAILURE_PREFIX: &str = "Error fetching top tracks";

/// Collects the user's long-term top tracks and overwrites their snapshot.
pub async fn top_tracks(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let Some(token) = state.access_token().await else {
        return Ok(Html(LOGIN_PROMPT.to_string()));
    };

    let user_id = state
        .spotify
        .current_user_id(&token)
        .await
        .map_err(|e| PageError::new(FAILURE_PREFIX, e))?;

    let tracks = TopTracksCollector::default()
        .collect(state.spotify.as_ref(), &token)
        .await
        .map_err(|e| PageError::new(FAILURE_PREFIX, e))?;

    let snapshot = state
        .store
        .upsert_snapshot(&user_id, tracks)
        .await
        .map_err(|e| PageError::new(FAILURE_PREFIX, e))?;
    tracing::info!(
        user_id = %snapshot.user_id,
        tracks = snapshot.tracks.len(),
        "saved top tracks snapshot"
    );

    Ok(Html(
        "<h1>Saved Your Top Songs! ✅</h1>\
         <p>Your top tracks have been updated with more songs.</p>\
         <p><a href=\"/history\">View Your Listening History</a></p>"
            .to_string(),
    ))
}
