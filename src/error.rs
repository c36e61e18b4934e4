//! Application error taxonomy.
//!
//! Only one class of error is fatal to a request: an unexpected internal
//! fault (render failure, parameters a handler cannot coerce). Backend
//! failures are caught inside the live handlers and turned into the
//! failover response; they never reach this type. Routing and sandbox
//! misses are expected outcomes with their own pages, not errors.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Fatal-to-the-request faults surfaced as a generic server-error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("template rendering failed: {0}")]
    Render(#[from] crate::render::RenderError),

    #[error("malformed request parameter {name}: {reason}")]
    BadParameter { name: &'static str, reason: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Never leak internals to the user; the structured event carries them.
        let body = "<!doctype html><html lang=\"en\"><head><title>Sorry, something went wrong</title></head>\
            <body><h1>Sorry, something went wrong</h1>\
            <p>Mae'n ddrwg gennym, aeth rhywbeth o'i le.</p></body></html>";
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}
