use axum::{extract::State, response::Html};

use super::{LOGIN_PROMPT, PageError};
use crate::{server::AppState, types::Track, utils::escape_html};

const FAILURE_PREFIX: &str = "Error fetching top tracks";

pub const NO_TRACKS_PAGE: &str = "<h1>No top tracks found.</h1>\
    <p>Try visiting <a href='/top-tracks'>/top-tracks</a> to save your top songs!</p>";

const HISTORY_STYLE: &str = r#"<style>
    .track { display: flex; align-items: center; margin-bottom: 15px; }
    .track img { width: 60px; height: 60px; margin-right: 15px; border-radius: 5px; }
    .track-info { display: flex; flex-direction: column; }
</style>"#;

/// Renders the stored snapshot of the logged in user.
pub async fn history(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let Some(token) = state.access_token().await else {
        return Ok(Html(LOGIN_PROMPT.to_string()));
    };

    let user_id = state
        .spotify
        .current_user_id(&token)
        .await
        .map_err(|e| PageError::new(FAILURE_PREFIX, e))?;

    let snapshot = state
        .store
        .get_snapshot(&user_id)
        .await
        .map_err(|e| PageError::new(FAILURE_PREFIX, e))?;

    match snapshot {
        Some(s) if !s.tracks.is_empty() => Ok(Html(render_history(&s.tracks))),
        _ => Ok(Html(NO_TRACKS_PAGE.to_string())),
    }
}

/// One `.track` block per track, artwork first when there is any.
pub fn render_history(tracks: &[Track]) -> String {
    let mut html = String::from("<h1>My 4-Year Spotify Wrapped 🎵</h1>\n");
    html.push_str(HISTORY_STYLE);
    html.push_str("\n<div>");

    for track in tracks {
        let artwork = match &track.artwork {
            Some(url) if !url.is_empty() => {
                format!(r#"<img src="{}" alt="Album Art">"#, escape_html(url))
            }
            _ => String::new(),
        };

        html.push_str(&format!(
            r#"
    <div class="track">
        {artwork}
        <div class="track-info">
            <strong>{name}</strong> - {artist}
            (<a href="{url}" target="_blank">Listen</a>)
        </div>
    </div>"#,
            name = escape_html(&track.name),
            artist = escape_html(&track.artist),
            url = escape_html(&track.spotify_url),
        ));
    }

    html.push_str("\n</div>");
    html
}
