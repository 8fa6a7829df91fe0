use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{filter_records, Searchable, FILTER_ALL};

#[test]
fn search_matches_name_location_and_id() {
    let properties = common::seeded_properties();

    let by_name = filter_records(&properties, "villa", FILTER_ALL);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "PR001");

    let by_location = filter_records(&properties, "yalta", FILTER_ALL);
    assert_eq!(by_location.len(), 1);
    assert_eq!(by_location[0].name, "Seaside Villa");

    let by_id = filter_records(&properties, "pr004", FILTER_ALL);
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].name, "Azure Cottage");
}

#[test]
fn status_filter_separates_active_from_maintenance() {
    let properties = common::seeded_properties();

    let active = filter_records(&properties, "", "active");
    assert_eq!(active.len(), 3);

    let maintenance = filter_records(&properties, "", "maintenance");
    assert_eq!(maintenance.len(), 1);
    assert_eq!(maintenance[0].id, "PR004");
}

#[test]
fn kind_is_not_part_of_the_search_fields() {
    let properties = common::seeded_properties();
    let fields = properties[1].search_fields();

    assert!(fields.contains(&"Mountain House"));
    assert!(fields.contains(&"Alupka"));
    assert!(!fields.contains(&"house"));
}

#[test]
fn description_is_not_searched() {
    let mut properties = common::seeded_properties();
    properties[0].description = "panoramic terrace".to_string();

    assert!(filter_records(&properties, "panoramic", FILTER_ALL).is_empty());
}

#[test]
fn combined_search_and_status() {
    let properties = common::seeded_properties();

    let filtered = filter_records(&properties, "sea", "active");
    let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["PR001", "PR003"]);

    assert!(filter_records(&properties, "sea", "maintenance").is_empty());
}
