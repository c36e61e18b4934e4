//! Live lookup backend seam.
//!
//! # Data Flow
//! ```text
//! Live handler (postcode, optional UPRN, locale)
//!     → client.rs (HTTP call to the lookup backend)
//!     → Ok: opaque structured ballot payload
//!     → Err or timeout: handler switches to the failover response
//! ```
//!
//! # Design Decisions
//! - One attempt, no retries: availability beats masking latency
//! - The call is time-bounded at the call site; an elapsed bound is
//!   treated identically to a backend error
//! - Payload content is opaque here; rendering owns its interpretation

pub mod client;

pub use client::{BallotPayload, HttpLookupBackend, LookupBackend, LookupError, LookupQuery};
