//! # API Module
//!
//! HTTP endpoints of the top tracks service.
//!
//! ## Endpoints
//!
//! - [`home`] - `GET /`, welcome page with a login link
//! - [`login`] - `GET /login`, redirect to Spotify's authorization page
//! - [`callback`] - `GET /callback`, exchanges the authorization code and keeps
//!   the access token in [`AppState`](crate::server::AppState)
//! - [`top_tracks`] - `GET /top-tracks`, collects the user's top tracks and
//!   overwrites their stored snapshot
//! - [`history`] - `GET /history`, renders the stored snapshot
//! - [`health`] - `GET /health`, status and version as JSON
//!
//! ## Responses
//!
//! Missing preconditions (no `code`, no login yet, nothing saved yet) are
//! answered with `200` and a short page telling the user what to do next.
//! Failures of Spotify or the store are answered through [`PageError`] with
//! `502` or `500` and the error text.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! let app = toptracks::server::router(state);
//! axum::serve(listener, app).await?;
//! ```

mod callback;
mod error;
mod health;
mod history;
mod home;
mod top_tracks;

pub use callback::{CallbackParams, callback};
pub use error::PageError;
pub use health::health;
pub use history::{NO_TRACKS_PAGE, history, render_history};
pub use home::{home, login};
pub use top_tracks::top_tracks;

/// Shown by `/top-tracks` and `/history` while no access token is held.
pub const LOGIN_PROMPT: &str = "No access token. Please <a href='/login'>log in</a> first.";
