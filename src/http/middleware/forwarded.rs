//! Client-identity normalization.
//!
//! The service runs behind an invocation adapter that rewrites the
//! transport peer to its own address, so handlers that care about the
//! caller (rate limiting, geo checks, audit logs) must read the identity
//! resolved here, never the socket peer.

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// The originating client address for this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub addr: String,
}

/// Resolve the client identity from the forwarded-address chain.
///
/// Each hop appends its peer to `X-Forwarded-For`, so the left-most
/// non-empty entry is the originating client. Falls back to the
/// transport peer when the header is absent or carries nothing usable.
pub fn resolve_client_identity(headers: &HeaderMap, peer: Option<SocketAddr>) -> ClientIdentity {
    let forwarded = headers
        .get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|chain| {
            chain
                .split(',')
                .map(str::trim)
                .find(|entry| !entry.is_empty())
                .map(str::to_string)
        });

    let addr = match forwarded {
        Some(addr) => addr,
        None => peer.map(|p| p.ip().to_string()).unwrap_or_default(),
    };

    ClientIdentity { addr }
}

/// Middleware stage: annotate the request with its [`ClientIdentity`].
pub async fn set_client_identity(mut request: Request<Body>, next: Next) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let identity = resolve_client_identity(request.headers(), peer);

    tracing::trace!(client = %identity.addr, "Resolved client identity");
    request.extensions_mut().insert(identity);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some("10.0.0.1:443".parse().unwrap())
    }

    #[test]
    fn leftmost_forwarded_entry_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            X_FORWARDED_FOR,
            HeaderValue::from_static("203.0.113.7, 198.51.100.2, 10.0.0.1"),
        );
        let identity = resolve_client_identity(&headers, peer());
        assert_eq!(identity.addr, "203.0.113.7");
    }

    #[test]
    fn resolution_ignores_transport_peer_when_header_present() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static("203.0.113.7"));
        let a = resolve_client_identity(&headers, peer());
        let b = resolve_client_identity(&headers, Some("192.0.2.99:80".parse().unwrap()));
        assert_eq!(a, b);
    }

    #[test]
    fn missing_header_falls_back_to_peer() {
        let headers = HeaderMap::new();
        let identity = resolve_client_identity(&headers, peer());
        assert_eq!(identity.addr, "10.0.0.1");
    }

    #[test]
    fn empty_entries_are_skipped() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static(" , ,203.0.113.7"));
        let identity = resolve_client_identity(&headers, peer());
        assert_eq!(identity.addr, "203.0.113.7");
    }
}
