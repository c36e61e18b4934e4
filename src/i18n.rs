//! Locale resolution.
//!
//! # Responsibilities
//! - Derive the display language from the request path prefix
//! - Provide the `Content-Language` value for responses
//!
//! # Design Decisions
//! - Locale is a pure function of the path (`/cy/...` = Welsh, else English)
//! - Resolved once per request, never persisted, never inherited
//! - Routing and locale are independent: `/cy/polling-stations` and
//!   `/polling-stations` are distinct route entries sharing a handler

/// Path prefix that selects the Welsh variant of a page.
pub const WELSH_PREFIX: &str = "/cy";

/// Display language for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Welsh,
}

impl Locale {
    /// Resolve the locale from a request path.
    ///
    /// Welsh iff the path is exactly `/cy` or starts with `/cy/`;
    /// anything else is English. Pure and idempotent.
    pub fn from_path(path: &str) -> Self {
        if path == WELSH_PREFIX || path.starts_with("/cy/") {
            Locale::Welsh
        } else {
            Locale::English
        }
    }

    /// BCP 47 language tag, used for `Content-Language` and `<html lang>`.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Welsh => "cy",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welsh_prefix_selects_welsh() {
        assert_eq!(Locale::from_path("/cy/polling-stations"), Locale::Welsh);
        assert_eq!(Locale::from_path("/cy"), Locale::Welsh);
        assert_eq!(Locale::from_path("/cy/sandbox/polling-stations"), Locale::Welsh);
    }

    #[test]
    fn anything_else_is_english() {
        assert_eq!(Locale::from_path("/polling-stations"), Locale::English);
        assert_eq!(Locale::from_path("/"), Locale::English);
        // "/cy" must be a whole path segment, not a string prefix
        assert_eq!(Locale::from_path("/cymru"), Locale::English);
    }

    #[test]
    fn resolution_is_idempotent() {
        for path in ["/cy/polling-stations", "/polling-stations", "/failover"] {
            assert_eq!(Locale::from_path(path), Locale::from_path(path));
        }
    }
}
