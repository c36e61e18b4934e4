//! Sandbox response engine.
//!
//! # Data Flow
//! ```text
//! Sandbox request (postcode, optional UPRN)
//!     → table.rs (normalize key, look up scenario)
//!     → Found: canned structured payload (scenarios.rs)
//!     → Miss: empty-state page (expected, not an error)
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable, shared without locks
//! - Keys are case- and whitespace-insensitive after normalization
//! - UPRN is deliberately ignored: any UPRN under a matching postcode
//!   resolves to that postcode's scenario (documented source behavior)

pub mod scenarios;
pub mod table;

pub use table::{normalize_postcode, SandboxTable, ScenarioEntry};
