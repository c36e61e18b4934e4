//! Route-kind dispatch.
//!
//! One closed match from [`RouteKind`] to handler. Adding a route means
//! adding a table entry and, if it is a new family, a new arm here; the
//! compiler flags any kind without a handler.

use axum::routing::{get, MethodRouter};

use crate::handlers::{failover, live, pages, sandbox};
use crate::http::server::AppState;
use crate::routing::table::RouteKind;

/// Resolve the handler for a route kind. Every table entry passes
/// through here exactly once, at router construction.
pub fn method_router(kind: RouteKind) -> MethodRouter<AppState> {
    match kind {
        RouteKind::RedirectRoot => get(pages::redirect_root),
        RouteKind::PostcodeForm => get(pages::postcode_form),
        RouteKind::LivePostcode => get(live::postcode_results),
        RouteKind::LiveUprn => get(live::uprn_results),
        RouteKind::SandboxPostcode => get(sandbox::postcode_results),
        RouteKind::SandboxUprn => get(sandbox::uprn_results),
        RouteKind::Failover => get(failover::failover),
    }
}
