//! Bilingual polling-station lookup front end.
//!
//! # Architecture Overview
//!
//! ```text
//! Inbound request
//!     → request ID (uuid v4)
//!     → client-identity normalizer (X-Forwarded-For)
//!     → locale resolver (/cy prefix)
//!     → route dispatcher (static table, closed RouteKind set)
//!         ├─ redirect: / → English postcode form
//!         ├─ live:    postcode form, postcode results, UPRN results
//!         │             └─ backend error/timeout → failover response
//!         ├─ sandbox: canned scenarios keyed by normalized postcode
//!         ├─ failover: fixed degraded-service page
//!         └─ assets:  /themes, /static passthrough
//!     → unmatched: not-found page
//! ```
//!
//! The live lookup backend, template rendering and error-tracking
//! transport are external collaborators; this crate owns dispatch,
//! resilience and the sandbox response engine.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod i18n;
pub mod lookup;
pub mod observability;
pub mod render;
pub mod routing;
pub mod sandbox;

pub use config::AppConfig;
pub use http::server::{build_router, AppState, HttpServer};
pub use i18n::Locale;
