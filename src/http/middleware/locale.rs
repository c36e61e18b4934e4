//! Locale-negotiation middleware.
//!
//! Resolves the display language from the path prefix before dispatch
//! and stamps the response with `Content-Language`. Never routes: the
//! route table is the single source of truth for which URL shapes
//! exist, this stage only decides what language to render them in.

use axum::body::Body;
use axum::http::{header, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::i18n::Locale;

/// Middleware stage: annotate the request with its [`Locale`] and the
/// response with the matching `Content-Language`.
pub async fn set_locale(mut request: Request<Body>, next: Next) -> Response {
    let locale = Locale::from_path(request.uri().path());
    request.extensions_mut().insert(locale);

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CONTENT_LANGUAGE, HeaderValue::from_static(locale.tag()));
    response
}
