//! Route dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, path)
//!     → table.rs (static route table: path pattern, kind, locale, name)
//!     → dispatch.rs (RouteKind → handler, one closed match)
//!     → handler (reads Locale and ClientIdentity from extensions)
//!     → unmatched: router fallback renders the not-found page
//! ```
//!
//! # Design Decisions
//! - The table is the single source of truth for which URL shapes exist
//! - Built once at startup, immutable at runtime
//! - English and Welsh variants are distinct entries sharing a handler;
//!   handlers never re-parse the path for language
//! - Exact matching only; path params pass to handlers verbatim

pub mod dispatch;
pub mod table;

pub use table::{RouteEntry, RouteKind, ROUTES};
