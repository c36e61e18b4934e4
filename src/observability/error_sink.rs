//! Optional error-tracking capability.
//!
//! Deployments opt in by setting `SENTRY_DSN`; without it every call is
//! a no-op and observable behavior is unchanged. The transport to the
//! tracking service is the deployment's concern; this seam only decides
//! whether a fault is forwarded, counts what it forwards, and records
//! it structurally either way.

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const DSN_ENV_VAR: &str = "SENTRY_DSN";

/// Capability handle for forwarding unexpected faults.
#[derive(Debug)]
pub struct ErrorSink {
    dsn: Option<String>,
    forwarded: AtomicUsize,
}

impl ErrorSink {
    fn new(dsn: Option<String>) -> Self {
        Self {
            dsn: dsn.filter(|v| !v.trim().is_empty()),
            forwarded: AtomicUsize::new(0),
        }
    }

    /// Build from the environment. An empty DSN counts as unset.
    pub fn from_env() -> Self {
        Self::new(std::env::var(DSN_ENV_VAR).ok())
    }

    /// A sink with an explicit DSN, regardless of the environment.
    pub fn with_dsn(dsn: impl Into<String>) -> Self {
        Self::new(Some(dsn.into()))
    }

    /// A sink that never forwards anything. Used in tests and when no
    /// DSN is configured.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.dsn.is_some()
    }

    /// Number of faults forwarded so far.
    pub fn forwarded_count(&self) -> usize {
        self.forwarded.load(Ordering::Relaxed)
    }

    /// Forward an unexpected fault. No-op when no sink is configured;
    /// the caller's control flow is identical either way.
    pub fn capture(&self, error: &dyn Error) {
        if self.dsn.is_some() {
            self.forwarded.fetch_add(1, Ordering::Relaxed);
            tracing::error!(target: "error_sink", error = %error, forwarded = true, "Unexpected fault forwarded to error tracking");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fault() -> Box<dyn Error> {
        "boom".into()
    }

    #[test]
    fn disabled_sink_is_a_noop() {
        let sink = ErrorSink::disabled();
        assert!(!sink.is_enabled());
        sink.capture(fault().as_ref());
        assert_eq!(sink.forwarded_count(), 0);
    }

    #[test]
    fn configured_sink_counts_forwarded_faults() {
        let sink = ErrorSink::with_dsn("https://examplePublicKey@o0.ingest.example.io/0");
        assert!(sink.is_enabled());
        sink.capture(fault().as_ref());
        sink.capture(fault().as_ref());
        assert_eq!(sink.forwarded_count(), 2);
    }

    #[test]
    fn blank_dsn_counts_as_unset() {
        let sink = ErrorSink::with_dsn("   ");
        assert!(!sink.is_enabled());
    }
}
