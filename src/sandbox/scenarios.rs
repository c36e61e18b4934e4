//! Canned ballot-scenario payloads.
//!
//! Each function builds the opaque structured payload for one sandbox
//! scenario. The payload shape belongs to the downstream response
//! builder; this module only has to produce structurally-varied,
//! deterministic bodies that exercise the edge cases the front end
//! renders: no ballots, the cancellation reasons, mixed cancelled/live,
//! station known/unknown, and multi-ballot combinations.

use serde_json::{json, Value};

const POLL_DATE: &str = "2026-05-07";

fn station(known: bool) -> Value {
    if known {
        json!({
            "polling_station_known": true,
            "station": {
                "id": "PS-0451",
                "address": "St Mary's Church Hall, High Street",
                "postcode": "AA1 1ZZ",
            },
        })
    } else {
        json!({
            "polling_station_known": false,
            "station": null,
        })
    }
}

fn ballot(
    paper_id: &str,
    title: &str,
    cancellation_reason: Option<&str>,
    voting_system: Option<&str>,
) -> Value {
    json!({
        "ballot_paper_id": paper_id,
        "ballot_title": title,
        "poll_open_date": POLL_DATE,
        "cancelled": cancellation_reason.is_some(),
        "cancellation_reason": cancellation_reason,
        "voting_system": voting_system.map(|name| json!({ "name": name })),
    })
}

fn dates(polling_station: Value, ballots: Vec<Value>) -> Value {
    json!({
        "address_picker": false,
        "dates": [{
            "date": POLL_DATE,
            "polling_station": polling_station,
            "ballots": ballots,
        }],
    })
}

pub fn no_local_ballots() -> Value {
    json!({ "address_picker": false, "dates": [] })
}

pub fn cancelled_candidate_death() -> Value {
    dates(
        station(false),
        vec![ballot(
            "local.sandbox.ward.2026-05-07",
            "Sandbox Ward local election",
            Some("CANDIDATE_DEATH"),
            None,
        )],
    )
}

pub fn cancelled_no_candidates() -> Value {
    dates(
        station(false),
        vec![ballot(
            "local.sandbox.ward.2026-05-07",
            "Sandbox Ward local election",
            Some("NO_CANDIDATES"),
            None,
        )],
    )
}

pub fn cancelled_equal_candidates() -> Value {
    dates(
        station(false),
        vec![ballot(
            "local.sandbox.ward.2026-05-07",
            "Sandbox Ward local election",
            Some("EQUAL_CANDIDATES"),
            None,
        )],
    )
}

pub fn cancelled_under_contested() -> Value {
    dates(
        station(false),
        vec![ballot(
            "local.sandbox.ward.2026-05-07",
            "Sandbox Ward local election",
            Some("UNDER_CONTESTED"),
            None,
        )],
    )
}

pub fn one_cancelled_one_not() -> Value {
    dates(
        station(true),
        vec![
            ballot(
                "local.sandbox.north-ward.2026-05-07",
                "Sandbox North Ward local election",
                Some("CANDIDATE_DEATH"),
                None,
            ),
            ballot(
                "parl.sandbox-and-district.2026-05-07",
                "Sandbox and District parliamentary by-election",
                None,
                Some("First-past-the-post"),
            ),
        ],
    )
}

pub fn single_ballot_with_station() -> Value {
    dates(
        station(true),
        vec![ballot(
            "parl.sandbox-and-district.2026-05-07",
            "Sandbox and District parliamentary by-election",
            None,
            Some("First-past-the-post"),
        )],
    )
}

pub fn single_ballot_without_station() -> Value {
    dates(
        station(false),
        vec![ballot(
            "parl.sandbox-and-district.2026-05-07",
            "Sandbox and District parliamentary by-election",
            None,
            Some("First-past-the-post"),
        )],
    )
}

pub fn assembly_and_mayoral_with_station() -> Value {
    dates(
        station(true),
        vec![
            ballot(
                "gla.a.sandbox.2026-05-07",
                "Greater London Assembly elections (Additional)",
                None,
                Some("Additional Member System"),
            ),
            ballot(
                "gla.c.sandbox.2026-05-07",
                "Greater London Assembly elections (Constituencies)",
                None,
                Some("First-past-the-post"),
            ),
            ballot(
                "mayor.london.2026-05-07",
                "Mayor of London election",
                None,
                Some("Supplementary Vote"),
            ),
        ],
    )
}

pub fn multiple_ballots_with_cancellation() -> Value {
    dates(
        station(true),
        vec![
            ballot(
                "local.sandbox.ward.2026-05-07",
                "Sandbox Ward local election",
                Some("NO_CANDIDATES"),
                None,
            ),
            ballot(
                "gla.a.sandbox.2026-05-07",
                "Greater London Assembly elections (Additional)",
                None,
                Some("Additional Member System"),
            ),
            ballot(
                "mayor.london.2026-05-07",
                "Mayor of London election",
                None,
                Some("Supplementary Vote"),
            ),
            ballot(
                "parl.sandbox-and-district.2026-05-07",
                "Sandbox and District parliamentary by-election",
                None,
                Some("First-past-the-post"),
            ),
        ],
    )
}
