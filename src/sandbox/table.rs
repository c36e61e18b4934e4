//! Postcode-to-scenario lookup table.

use std::collections::HashMap;

use serde_json::Value;

use crate::sandbox::scenarios;

/// One canned scenario: the postcode it answers for, a human-readable
/// description, and the pre-built structured payload.
#[derive(Debug, Clone)]
pub struct ScenarioEntry {
    pub postcode: &'static str,
    pub description: &'static str,
    pub response: Value,
}

/// Normalize a postcode key: uppercase, all whitespace removed.
///
/// `"aa11aa"`, `"AA1 1AA"` and `"AA1  1AA"` all normalize to `"AA11AA"`.
/// Idempotent.
pub fn normalize_postcode(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Fixed scenario table, built once at startup and read-only thereafter.
#[derive(Debug)]
pub struct SandboxTable {
    entries: HashMap<String, ScenarioEntry>,
}

impl SandboxTable {
    pub fn new() -> Self {
        let seed: [(&'static str, &'static str, Value); 10] = [
            (
                "AA1 1AA",
                "No local ballots",
                scenarios::no_local_ballots(),
            ),
            (
                "CA1 1AB",
                "Cancelled ballot due to candidate death",
                scenarios::cancelled_candidate_death(),
            ),
            (
                "CA1 2AB",
                "Cancelled ballot due to no candidates",
                scenarios::cancelled_no_candidates(),
            ),
            (
                "CA1 3AB",
                "Cancelled ballot due to equal number of candidates",
                scenarios::cancelled_equal_candidates(),
            ),
            (
                "CA1 4AB",
                "Cancelled ballot due to not enough candidates",
                scenarios::cancelled_under_contested(),
            ),
            (
                "CA1 5AB",
                "One cancelled ballot, one not cancelled",
                scenarios::one_cancelled_one_not(),
            ),
            (
                "AA1 1AC",
                "Single local ballot (one upcoming ballot, station known, with candidates)",
                scenarios::single_ballot_with_station(),
            ),
            (
                "AA1 1AD",
                "Single local ballot (one upcoming ballot, station not known, with candidates)",
                scenarios::single_ballot_without_station(),
            ),
            (
                "AA1 1AF",
                "Multiple ballots including Greater London Assembly and Mayoral with voting system and polling station",
                scenarios::assembly_and_mayoral_with_station(),
            ),
            (
                "AA1 1AG",
                "Multiple ballots including Local, GLA, Mayoral and Parliamentary with one cancellation",
                scenarios::multiple_ballots_with_cancellation(),
            ),
        ];

        let mut entries = HashMap::with_capacity(seed.len());
        for (postcode, description, response) in seed {
            let key = normalize_postcode(postcode);
            let previous = entries.insert(
                key,
                ScenarioEntry {
                    postcode,
                    description,
                    response,
                },
            );
            debug_assert!(previous.is_none(), "duplicate sandbox postcode {postcode}");
        }
        Self { entries }
    }

    /// Look up a scenario by postcode, normalizing the key first.
    ///
    /// A miss is an expected outcome, rendered as an empty-state page by
    /// the calling handler.
    pub fn resolve(&self, postcode: &str) -> Option<&ScenarioEntry> {
        self.entries.get(&normalize_postcode(postcode))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SandboxTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_case_and_space_insensitive() {
        assert_eq!(normalize_postcode("aa11aa"), "AA11AA");
        assert_eq!(normalize_postcode("AA1 1AA"), "AA11AA");
        assert_eq!(normalize_postcode("AA1  1AA"), "AA11AA");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_postcode("ca1 5ab");
        assert_eq!(normalize_postcode(&once), once);
    }

    #[test]
    fn equivalent_spellings_resolve_to_same_entry() {
        let table = SandboxTable::new();
        let a = table.resolve("aa11aa").expect("aa11aa");
        let b = table.resolve("AA1 1AA").expect("AA1 1AA");
        let c = table.resolve("AA1  1AA").expect("AA1  1AA");
        assert_eq!(a.postcode, b.postcode);
        assert_eq!(b.postcode, c.postcode);
    }

    #[test]
    fn all_documented_keys_resolve_to_distinct_scenarios() {
        let table = SandboxTable::new();
        let keys = [
            "AA1 1AA", "CA1 1AB", "CA1 2AB", "CA1 3AB", "CA1 4AB", "CA1 5AB", "AA1 1AC",
            "AA1 1AD", "AA1 1AF", "AA1 1AG",
        ];
        assert_eq!(table.len(), keys.len());

        let mut descriptions = std::collections::HashSet::new();
        for key in keys {
            let entry = table.resolve(key).unwrap_or_else(|| panic!("missing {key}"));
            assert!(!entry.description.is_empty());
            assert!(descriptions.insert(entry.description), "duplicate scenario for {key}");
        }
    }

    #[test]
    fn unlisted_postcode_is_a_miss() {
        let table = SandboxTable::new();
        assert!(table.resolve("ZZ9 9ZZ").is_none());
        assert!(table.resolve("").is_none());
    }
}
