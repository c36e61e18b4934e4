//! Request-transform stages applied before dispatch.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → forwarded.rs (resolve true client address from proxy headers)
//!     → locale.rs (resolve display language from path prefix)
//!     → route dispatch
//! ```
//!
//! # Design Decisions
//! - Fixed order, forwarded-for outermost; both stages complete before
//!   any handler runs
//! - Each stage only annotates request extensions; neither routes nor
//!   short-circuits
//! - No data dependency between the two stages

pub mod forwarded;
pub mod locale;

pub use forwarded::{resolve_client_identity, set_client_identity, ClientIdentity};
pub use locale::set_locale;
