use axum::response::{Html, IntoResponse, Response};

use crate::{error::AppError, utils::escape_html};

/// A failed request, rendered as an HTML line `"<prefix>: <error>"`.
///
/// The status code comes from [`AppError::status_code`].
#[derive(Debug)]
pub struct PageError {
    prefix: &'static str,
    source: AppError,
}

impl PageError {
    pub fn new(prefix: &'static str, source: AppError) -> Self {
        Self { prefix, source }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.source, "{}", self.prefix);

        let body = format!(
            "<p>{prefix}: {message}</p>",
            prefix = self.prefix,
            message = escape_html(&self.source.to_string())
        );
        (self.source.status_code(), Html(body)).into_response()
    }
}
