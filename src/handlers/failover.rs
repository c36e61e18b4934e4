//! Degraded-service response.
//!
//! Reachable as its own route and as the fallback the live handlers
//! switch to when the backend is unavailable. Returns 200 so upstream
//! infrastructure does not retry or alert on a condition already being
//! handled; both entry points produce byte-identical bodies.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Fixed bilingual body. Static on purpose: this path performs no
/// backend calls, no rendering, and cannot fail.
const FAILOVER_BODY: &str = "<!doctype html>\
<html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>Service temporarily limited</title></head><body>\
<h1>Service temporarily limited</h1>\
<p>We cannot look up polling stations right now. Please try again later, \
or contact your local council for your polling station.</p>\
<h1>Gwasanaeth wedi'i gyfyngu dros dro</h1>\
<p>Ni allwn chwilio am orsafoedd pleidleisio ar hyn o bryd. Rhowch gynnig \
arall arni yn nes ymlaen, neu cysylltwch \u{e2}'ch cyngor lleol.</p>\
</body></html>";

/// Build the failover response. Shared by the named route and by the
/// live handlers' degraded path so the two stay byte-identical.
pub fn failover_response() -> Response {
    (StatusCode::OK, Html(FAILOVER_BODY)).into_response()
}

/// `GET /failover`.
pub async fn failover() -> Response {
    failover_response()
}
