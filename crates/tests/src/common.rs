use shared_types::{Booking, Client, Property};

/// Build a booking with sensible defaults for fields a test does not care about.
pub fn booking(id: &str, guest: &str, property: &str, status: &str, amount: i64) -> Booking {
    Booking {
        id: id.to_string(),
        guest: guest.to_string(),
        property: property.to_string(),
        check_in: "2024-09-15".to_string(),
        check_out: "2024-09-20".to_string(),
        status: status.to_string(),
        amount,
        guests: 2,
        phone: "+7 900 000-00-00".to_string(),
        email: format!("{}@example.com", id.to_lowercase()),
        created: "2024-09-01".to_string(),
        source: "Direct".to_string(),
    }
}

pub fn client(id: &str, name: &str, email: &str, status: &str) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: "+7 900 000-00-00".to_string(),
        location: "Moscow".to_string(),
        total_bookings: 1,
        total_spent: 10_000,
        last_booking: "2024-09-01".to_string(),
        status: status.to_string(),
        rating: 4,
        registered: "2024-01-01".to_string(),
        notes: String::new(),
    }
}

pub fn property(id: &str, name: &str, location: &str, kind: &str, status: &str) -> Property {
    Property {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        location: location.to_string(),
        bedrooms: 2,
        max_guests: 4,
        status: status.to_string(),
        price_per_night: 2_000,
        rating: 4.5,
        total_bookings: 10,
        revenue: 50_000,
        amenities: vec!["wifi".to_string()],
        description: String::new(),
    }
}

/// The canned booking set used across the filter tests.
pub fn seeded_bookings() -> Vec<Booking> {
    vec![
        booking("BK001", "Anna Petrova", "Seaside Villa", "confirmed", 15_000),
        booking("BK002", "Igor Smirnov", "Mountain House", "pending", 8_500),
        booking("BK003", "Maria Ivanova", "Seafront Apartment", "confirmed", 12_000),
        booking("BK004", "Alexey Volkov", "Azure Cottage", "cancelled", 6_000),
    ]
}

pub fn seeded_clients() -> Vec<Client> {
    vec![
        client("CL001", "Anna Petrova", "anna.petrova@example.com", "vip"),
        client("CL002", "Igor Smirnov", "igor.smirnov@example.com", "regular"),
        client("CL003", "Maria Ivanova", "maria.ivanova@example.com", "regular"),
        client("CL004", "Alexey Volkov", "alexey.volkov@example.com", "new"),
    ]
}

pub fn seeded_properties() -> Vec<Property> {
    vec![
        property("PR001", "Seaside Villa", "Yalta", "villa", "active"),
        property("PR002", "Mountain House", "Alupka", "house", "active"),
        property("PR003", "Seafront Apartment", "Sudak", "apartment", "active"),
        property("PR004", "Azure Cottage", "Koktebel", "cottage", "maintenance"),
    ]
}
