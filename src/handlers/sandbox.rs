//! Canned lookups against the fixed scenario table.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Extension;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::http::server::AppState;
use crate::i18n::Locale;
use crate::render::Template;

#[derive(Debug, Deserialize)]
pub struct PostcodeParams {
    postcode: Option<String>,
}

/// Canned lookup by query-string postcode. A query string the extractor
/// cannot coerce is an unexpected fault, same as on the live routes.
pub async fn postcode_results(
    State(state): State<AppState>,
    Extension(locale): Extension<Locale>,
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
    scenario_page(&state, locale, params.postcode.as_deref().unwrap_or(""))
}

/// Canned lookup by postcode + UPRN path params. The UPRN is accepted
/// and deliberately ignored: any UPRN under a matching postcode serves
/// that postcode's scenario.
pub async fn uprn_results(
    State(state): State<AppState>,
    Extension(locale): Extension<Locale>,
    Path((postcode, _uprn)): Path<(String, String)>,
) -> Response {
    scenario_page(&state, locale, &postcode)
}

/// received → normalize-key → found/not-found. A miss is an expected
/// branch rendered as the empty-state page, status 200.
fn scenario_page(state: &AppState, locale: Locale, postcode: &str) -> Response {
    match state.sandbox.resolve(postcode) {
        Some(entry) => {
            tracing::debug!(postcode = entry.postcode, scenario = entry.description, "Sandbox scenario matched");
            let data = json!({
                "postcode": entry.postcode,
                "description": entry.description,
                "response": entry.response,
            });
            state.render_page(Template::SandboxResults, locale, data, StatusCode::OK)
        }
        None => state.render_page(
            Template::SandboxEmptyState,
            locale,
            json!({ "postcode": postcode }),
            StatusCode::OK,
        ),
    }
}
