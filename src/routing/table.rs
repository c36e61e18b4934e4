//! The static route table.

use crate::i18n::Locale;

pub const POSTCODE_FORM_EN: &str = "/i-am-a/voter/your-election-information";
pub const POSTCODE_FORM_CY: &str = "/cy/rwyf-yneg-pleidleisiwr/pleidleisiwr/gwybodaeth-etholiad";
pub const LIVE_POSTCODE_EN: &str = "/polling-stations";
pub const LIVE_POSTCODE_CY: &str = "/cy/polling-stations";
pub const FAILOVER_PATH: &str = "/failover";

/// Closed set of handler families the dispatcher knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Unconditional redirect from the site root to the English form.
    RedirectRoot,
    /// Postcode entry form.
    PostcodeForm,
    /// Live lookup by query-string postcode.
    LivePostcode,
    /// Live lookup by postcode + UPRN path params.
    LiveUprn,
    /// Canned lookup by query-string postcode.
    SandboxPostcode,
    /// Canned lookup by postcode + UPRN path params.
    SandboxUprn,
    /// Static degraded-service page.
    Failover,
}

/// One dispatchable route. All routes answer GET only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Axum path pattern; `{postcode}` / `{uprn}` are opaque segments
    /// handed to the handler verbatim.
    pub path: &'static str,
    pub kind: RouteKind,
    /// Locale variant this entry serves. Handlers read the per-request
    /// locale from extensions; this field documents the pairing and
    /// feeds the table's own invariants.
    pub locale: Locale,
    /// Globally unique stable name, used in logs.
    pub name: &'static str,
}

/// The complete dynamic route table, mirrored from the public surface.
/// The two asset mounts (`/themes`, `/static`) are registered separately
/// as opaque passthrough services.
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        kind: RouteKind::RedirectRoot,
        locale: Locale::English,
        name: "redirect_root",
    },
    RouteEntry {
        path: FAILOVER_PATH,
        kind: RouteKind::Failover,
        locale: Locale::English,
        name: "failover",
    },
    RouteEntry {
        path: POSTCODE_FORM_EN,
        kind: RouteKind::PostcodeForm,
        locale: Locale::English,
        name: "live_postcode_form_en",
    },
    RouteEntry {
        path: POSTCODE_FORM_CY,
        kind: RouteKind::PostcodeForm,
        locale: Locale::Welsh,
        name: "live_postcode_form_cy",
    },
    RouteEntry {
        path: LIVE_POSTCODE_EN,
        kind: RouteKind::LivePostcode,
        locale: Locale::English,
        name: "live_postcode_en",
    },
    RouteEntry {
        path: LIVE_POSTCODE_CY,
        kind: RouteKind::LivePostcode,
        locale: Locale::Welsh,
        name: "live_postcode_cy",
    },
    RouteEntry {
        path: "/polling-stations/address/{postcode}/{uprn}",
        kind: RouteKind::LiveUprn,
        locale: Locale::English,
        name: "live_uprn_en",
    },
    RouteEntry {
        path: "/cy/polling-stations/{postcode}/{uprn}",
        kind: RouteKind::LiveUprn,
        locale: Locale::Welsh,
        name: "live_uprn_cy",
    },
    RouteEntry {
        path: "/sandbox/polling-stations",
        kind: RouteKind::SandboxPostcode,
        locale: Locale::English,
        name: "sandbox_postcode_en",
    },
    RouteEntry {
        path: "/cy/sandbox/polling-stations",
        kind: RouteKind::SandboxPostcode,
        locale: Locale::Welsh,
        name: "sandbox_postcode_cy",
    },
    RouteEntry {
        path: "/sandbox/polling-stations/{postcode}/{uprn}",
        kind: RouteKind::SandboxUprn,
        locale: Locale::English,
        name: "sandbox_uprn_en",
    },
    RouteEntry {
        path: "/cy/sandbox/polling-stations/{postcode}/{uprn}",
        kind: RouteKind::SandboxUprn,
        locale: Locale::Welsh,
        name: "sandbox_uprn_cy",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_names_are_globally_unique() {
        let mut names = HashSet::new();
        for entry in ROUTES {
            assert!(names.insert(entry.name), "duplicate route name {}", entry.name);
        }
    }

    #[test]
    fn route_paths_are_unique() {
        let mut paths = HashSet::new();
        for entry in ROUTES {
            assert!(paths.insert(entry.path), "duplicate route path {}", entry.path);
        }
    }

    #[test]
    fn localized_kinds_have_one_entry_per_locale() {
        for kind in [
            RouteKind::PostcodeForm,
            RouteKind::LivePostcode,
            RouteKind::LiveUprn,
            RouteKind::SandboxPostcode,
            RouteKind::SandboxUprn,
        ] {
            let locales: Vec<Locale> = ROUTES
                .iter()
                .filter(|e| e.kind == kind)
                .map(|e| e.locale)
                .collect();
            assert_eq!(locales.len(), 2, "{kind:?} should have two variants");
            assert!(locales.contains(&Locale::English));
            assert!(locales.contains(&Locale::Welsh));
        }
    }

    #[test]
    fn entry_locale_agrees_with_path_prefix() {
        for entry in ROUTES {
            assert_eq!(
                entry.locale,
                Locale::from_path(entry.path),
                "locale mismatch for {}",
                entry.name
            );
        }
    }
}
