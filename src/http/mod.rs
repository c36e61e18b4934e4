//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound connection (or invocation-adapter request)
//!     → server.rs (router assembly, layers, serve loop)
//!     → request.rs (x-request-id generation/propagation)
//!     → middleware/ (client identity, locale)
//!     → routing + handlers
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
