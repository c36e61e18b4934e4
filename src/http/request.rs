//! Request identification.
//!
//! Every request gets a UUID v4 `x-request-id` as early as possible so
//! log lines from the middleware stages, dispatch and handlers can be
//! correlated. Incoming IDs from the invocation adapter are kept;
//! generated ones are propagated onto the response.

use axum::http::{HeaderName, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// UUID v4 request-ID generator for `tower-http`'s request-id layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        // A freshly formatted UUID is always a valid header value.
        id.parse().ok().map(RequestId::new)
    }
}
