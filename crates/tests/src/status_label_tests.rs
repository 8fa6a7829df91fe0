use pretty_assertions::assert_eq;
use shared_types::{
    amenity_label, booking_status_label, client_status_label, property_kind_label,
    property_status_label, BOOKING_STATUSES, CLIENT_STATUSES, PROPERTY_KINDS, PROPERTY_STATUSES,
};

#[test]
fn booking_labels_cover_every_known_status() {
    assert_eq!(booking_status_label("confirmed"), "Confirmed");
    assert_eq!(booking_status_label("pending"), "Pending");
    assert_eq!(booking_status_label("cancelled"), "Cancelled");
    for s in BOOKING_STATUSES {
        assert_ne!(booking_status_label(s), "Unknown", "{s}");
    }
}

#[test]
fn booking_label_fallback_never_panics() {
    assert_eq!(booking_status_label("refunded"), "Unknown");
    assert_eq!(booking_status_label(""), "Unknown");
}

#[test]
fn client_labels_cover_every_known_status() {
    assert_eq!(client_status_label("vip"), "VIP");
    assert_eq!(client_status_label("regular"), "Regular");
    assert_eq!(client_status_label("new"), "New");
    for s in CLIENT_STATUSES {
        assert_ne!(client_status_label(s), "Unknown", "{s}");
    }
}

#[test]
fn property_labels_cover_every_known_status() {
    assert_eq!(property_status_label("active"), "Active");
    assert_eq!(property_status_label("maintenance"), "Maintenance");
    assert_eq!(property_status_label("inactive"), "Inactive");
    assert_eq!(property_status_label("demolished"), "Unknown");
}

#[test]
fn kind_labels_fall_back_to_the_raw_value() {
    for k in PROPERTY_KINDS {
        assert_ne!(property_kind_label(k), *k, "{k} should be capitalized");
    }
    // Unrecognized kinds pass through untouched rather than becoming "Unknown".
    assert_eq!(property_kind_label("yurt"), "yurt");
}

#[test]
fn amenity_labels_humanize_known_tags() {
    assert_eq!(amenity_label("wifi"), "Wi-Fi");
    assert_eq!(amenity_label("sea_view"), "Sea view");
    assert_eq!(amenity_label("air_conditioning"), "A/C");
    // Unknown tags pass through so data additions degrade gracefully.
    assert_eq!(amenity_label("sauna"), "sauna");
}

#[test]
fn status_domains_do_not_overlap() {
    for s in BOOKING_STATUSES {
        assert!(!CLIENT_STATUSES.contains(s));
        assert!(!PROPERTY_STATUSES.contains(s));
    }
}
