//! Live lookups against the ballot backend.
//!
//! The backend call is time-bounded at the call site. A single failed or
//! slow attempt switches straight to the failover response; there are no
//! retries, and backend detail never reaches the user.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Extension;
use serde::Deserialize;

use crate::error::AppError;
use crate::handlers::failover::failover_response;
use crate::http::server::AppState;
use crate::i18n::Locale;
use crate::lookup::LookupQuery;
use crate::render::Template;
use crate::routing::table::{RouteEntry, POSTCODE_FORM_CY, POSTCODE_FORM_EN};

#[derive(Debug, Deserialize)]
pub struct PostcodeParams {
    postcode: Option<String>,
}

/// Live lookup by query-string postcode (`/polling-stations`,
/// `/cy/polling-stations`). A blank or missing postcode goes back to
/// the locale's entry form; a query string the extractor cannot coerce
/// is an unexpected fault (generic server-error page, error sink).
pub async fn postcode_results(
    State(state): State<AppState>,
    Extension(locale): Extension<Locale>,
    Extension(entry): Extension<&'static RouteEntry>,
    params: Result<Query<PostcodeParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            return state.internal_fault(AppError::BadParameter {
                name: "postcode",
                reason: rejection.body_text(),
            });
        }
    };

    let postcode = match params.postcode.as_deref().map(str::trim) {
        Some(postcode) if !postcode.is_empty() => postcode.to_string(),
        _ => {
            let form = match locale {
                Locale::English => POSTCODE_FORM_EN,
                Locale::Welsh => POSTCODE_FORM_CY,
            };
            return Redirect::to(form).into_response();
        }
    };

    let query = LookupQuery {
        postcode,
        uprn: None,
        locale,
    };
    lookup_or_failover(&state, entry, query).await
}

/// Live lookup by postcode + UPRN path params. Both segments are opaque
/// here; the backend owns their interpretation.
pub async fn uprn_results(
    State(state): State<AppState>,
    Extension(locale): Extension<Locale>,
    Extension(entry): Extension<&'static RouteEntry>,
    Path((postcode, uprn)): Path<(String, String)>,
) -> Response {
    let query = LookupQuery {
        postcode,
        uprn: Some(uprn),
        locale,
    };
    lookup_or_failover(&state, entry, query).await
}

/// One bounded attempt against the backend. Any error, and an elapsed
/// bound just the same, degrades to the failover response.
async fn lookup_or_failover(
    state: &AppState,
    entry: &'static RouteEntry,
    query: LookupQuery,
) -> Response {
    let bound = state.config.lookup.timeout();
    match tokio::time::timeout(bound, state.backend.lookup(&query)).await {
        Ok(Ok(payload)) => {
            state.render_page(Template::LiveResults, query.locale, payload.0, StatusCode::OK)
        }
        Ok(Err(error)) => {
            tracing::warn!(route = entry.name, error = %error, "Backend lookup failed, serving failover");
            failover_response()
        }
        Err(_elapsed) => {
            tracing::warn!(route = entry.name, bound_ms = bound.as_millis() as u64, "Backend lookup timed out, serving failover");
            failover_response()
        }
    }
}
