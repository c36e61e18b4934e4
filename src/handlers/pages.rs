//! Root redirect, postcode entry form, and the not-found fallback.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Redirect, Response};
use axum::Extension;
use serde_json::Value;

use crate::http::server::AppState;
use crate::i18n::Locale;
use crate::render::Template;
use crate::routing::table::POSTCODE_FORM_EN;

/// `GET /` — unconditional redirect to the English postcode form.
pub async fn redirect_root() -> Redirect {
    Redirect::to(POSTCODE_FORM_EN)
}

/// Postcode entry form, shared by the English and Welsh routes.
pub async fn postcode_form(
    State(state): State<AppState>,
    Extension(locale): Extension<Locale>,
) -> Response {
    state.render_page(Template::PostcodeForm, locale, Value::Null, StatusCode::OK)
}

/// Router fallback for unmatched (path, method) pairs. An expected
/// outcome, logged at debug and never reported as an error.
pub async fn not_found(
    State(state): State<AppState>,
    Extension(locale): Extension<Locale>,
    uri: axum::http::Uri,
) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    state.render_page(Template::NotFound, locale, Value::Null, StatusCode::NOT_FOUND)
}
