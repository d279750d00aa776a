//! Error types shared by the upstream client, the snapshot store and the
//! HTTP front end.

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed configuration value.
    #[error("config error: {0}")]
    Config(String),

    /// Transport or decoding failure while talking to Spotify.
    #[error("spotify request failed: {0}")]
    Spotify(#[from] reqwest::Error),

    /// Spotify answered with a non-success status.
    #[error("spotify returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status a handler should answer with when this error reaches it.
    ///
    /// Anything caused by Spotify is reported as `502 Bad Gateway`, local
    /// failures (store, config, serialization) as `500 Internal Server Error`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Spotify(_) | AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
