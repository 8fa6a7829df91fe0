use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{filter_records, FILTER_ALL};

#[test]
fn default_filters_return_everything() {
    let bookings = common::seeded_bookings();
    let filtered = filter_records(&bookings, "", FILTER_ALL);
    assert_eq!(filtered, bookings);
}

#[test]
fn search_matches_guest_name_case_insensitively() {
    let bookings = common::seeded_bookings();

    let filtered = filter_records(&bookings, "anna", FILTER_ALL);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].guest, "Anna Petrova");

    let filtered = filter_records(&bookings, "ANNA", FILTER_ALL);
    assert_eq!(filtered.len(), 1);
}

#[test]
fn search_matches_property_and_id() {
    let bookings = common::seeded_bookings();

    let by_property = filter_records(&bookings, "mountain", FILTER_ALL);
    assert_eq!(by_property.len(), 1);
    assert_eq!(by_property[0].id, "BK002");

    let by_id = filter_records(&bookings, "bk003", FILTER_ALL);
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].guest, "Maria Ivanova");
}

#[test]
fn status_filter_is_exact() {
    let bookings = common::seeded_bookings();

    let confirmed = filter_records(&bookings, "", "confirmed");
    assert_eq!(confirmed.len(), 2);
    assert!(confirmed.iter().all(|b| b.status == "confirmed"));

    // A prefix of a real status must not match.
    let partial = filter_records(&bookings, "", "confirm");
    assert!(partial.is_empty());
}

#[test]
fn search_and_status_compose_as_and() {
    let bookings = common::seeded_bookings();

    // "Anna" matches BK001 but its status is confirmed, not pending.
    let filtered = filter_records(&bookings, "Anna", "pending");
    assert!(filtered.is_empty());

    // "Igor" + pending matches exactly BK002.
    let filtered = filter_records(&bookings, "Igor", "pending");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "BK002");
}

#[test]
fn filtering_preserves_input_order() {
    let bookings = common::seeded_bookings();
    let filtered = filter_records(&bookings, "", "confirmed");
    let ids: Vec<&str> = filtered.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["BK001", "BK003"]);
}

#[test]
fn filtering_is_idempotent() {
    let bookings = common::seeded_bookings();
    let once = filter_records(&bookings, "sea", FILTER_ALL);
    let twice = filter_records(&once, "sea", FILTER_ALL);
    assert_eq!(once, twice);
}

#[test]
fn no_match_yields_empty_not_error() {
    let bookings = common::seeded_bookings();
    assert!(filter_records(&bookings, "nonexistent guest", FILTER_ALL).is_empty());
    assert!(filter_records(&bookings, "", "archived").is_empty());
}
