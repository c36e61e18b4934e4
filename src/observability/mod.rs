//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events)
//!     → error_sink.rs (unexpected faults, when a sink is configured)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; request ID flows through all events
//! - The error sink is an optional capability: absent means every call
//!   is a no-op with identical control flow
//! - Expected outcomes (routing miss, sandbox miss) are never errors

pub mod error_sink;
pub mod logging;

pub use error_sink::ErrorSink;
pub use logging::init_tracing;
