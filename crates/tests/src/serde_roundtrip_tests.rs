use crate::common;
use pretty_assertions::assert_eq;
use shared_types::Booking;

// The JSON field names are the de facto wire format for future API work;
// pin them so struct renames do not silently change the payload shape.
#[test]
fn booking_json_uses_snake_case_field_names() {
    let booking = common::booking("BK001", "Anna Petrova", "Seaside Villa", "confirmed", 15_000);
    let value = serde_json::to_value(&booking).unwrap();

    assert_eq!(value["check_in"], "2024-09-15");
    assert_eq!(value["check_out"], "2024-09-20");
    assert_eq!(value["amount"], 15_000);
    assert_eq!(value["status"], "confirmed");
}

#[test]
fn booking_with_unknown_status_deserializes() {
    let json = r#"{
        "id": "BK099", "guest": "Test Guest", "property": "Test House",
        "check_in": "2024-09-01", "check_out": "2024-09-02",
        "status": "refunded", "amount": 1000, "guests": 1,
        "phone": "", "email": "", "created": "2024-08-01", "source": "Direct"
    }"#;

    let booking: Booking = serde_json::from_str(json).unwrap();
    assert_eq!(booking.status, "refunded");
}
