//! Request handlers.
//!
//! # Handler families
//! - pages.rs: root redirect, postcode entry form, not-found fallback
//! - live.rs: lookups against the live backend, failover on error/timeout
//! - sandbox.rs: canned lookups against the fixed scenario table
//! - failover.rs: the static degraded-service response
//!
//! # Error policy
//! Backend failures never leave live.rs; they become the failover
//! response. Routing and sandbox misses are expected pages. Only render
//! failures surface as a generic server error (and hit the error sink).

pub mod failover;
pub mod live;
pub mod pages;
pub mod sandbox;
