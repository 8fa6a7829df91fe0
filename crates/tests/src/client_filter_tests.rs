use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{filter_records, FILTER_ALL};

#[test]
fn search_matches_name_email_and_id() {
    let clients = common::seeded_clients();

    let by_name = filter_records(&clients, "petrova", FILTER_ALL);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "CL001");

    let by_email = filter_records(&clients, "igor.smirnov@", FILTER_ALL);
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Igor Smirnov");

    let by_id = filter_records(&clients, "CL004", FILTER_ALL);
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].name, "Alexey Volkov");
}

#[test]
fn search_matches_phone() {
    let mut clients = common::seeded_clients();
    clients[0].phone = "+7 905 123-45-67".to_string();

    let filtered = filter_records(&clients, "905 123", FILTER_ALL);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "CL001");
}

#[test]
fn status_filter_selects_exact_tier() {
    let clients = common::seeded_clients();

    let vip = filter_records(&clients, "", "vip");
    assert_eq!(vip.len(), 1);
    assert_eq!(vip[0].name, "Anna Petrova");

    let regular = filter_records(&clients, "", "regular");
    assert_eq!(regular.len(), 2);
}

#[test]
fn notes_are_not_searched() {
    let mut clients = common::seeded_clients();
    clients[1].notes = "prefers quiet rooms".to_string();

    assert!(filter_records(&clients, "quiet rooms", FILTER_ALL).is_empty());
}

#[test]
fn combined_filters_narrow_to_intersection() {
    let clients = common::seeded_clients();

    let filtered = filter_records(&clients, "ivanova", "regular");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "CL003");

    assert!(filter_records(&clients, "ivanova", "vip").is_empty());
}
