use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// A rental property listing, with aggregate revenue statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub name: String,
    /// One of [`PROPERTY_KINDS`]; unknown values fall back to the raw value.
    pub kind: String,
    pub location: String,
    pub bedrooms: u32,
    pub max_guests: u32,
    /// One of [`PROPERTY_STATUSES`]; unknown values get the fallback badge.
    pub status: String,
    /// Nightly price, whole rubles. Rendered only for the owner role.
    pub price_per_night: i64,
    /// Average guest rating in `[0, 5]`.
    pub rating: f64,
    pub total_bookings: u32,
    /// Lifetime revenue, whole rubles. Rendered only for the owner role.
    pub revenue: i64,
    /// Tags from the [`AMENITIES`] vocabulary.
    pub amenities: Vec<String>,
    pub description: String,
}

/// Property types in display order.
pub const PROPERTY_KINDS: &[&str] = &["villa", "house", "apartment", "cottage"];

/// Property statuses in display order.
pub const PROPERTY_STATUSES: &[&str] = &["active", "maintenance", "inactive"];

/// Fixed amenity vocabulary used by the demo records.
pub const AMENITIES: &[&str] = &[
    "wifi",
    "parking",
    "sea_view",
    "mountain_view",
    "kitchen",
    "balcony",
    "fireplace",
    "garden",
    "air_conditioning",
    "bbq",
    "pool",
];

/// Display label for a property status. Total over any input.
pub fn property_status_label(status: &str) -> &'static str {
    match status {
        "active" => "Active",
        "maintenance" => "Maintenance",
        "inactive" => "Inactive",
        _ => "Unknown",
    }
}

/// Display label for a property type, falling back to the raw value.
pub fn property_kind_label(kind: &str) -> &str {
    match kind {
        "villa" => "Villa",
        "house" => "House",
        "apartment" => "Apartment",
        "cottage" => "Cottage",
        other => other,
    }
}

/// Display label for an amenity tag, falling back to the raw value.
pub fn amenity_label(amenity: &str) -> &str {
    match amenity {
        "wifi" => "Wi-Fi",
        "parking" => "Parking",
        "sea_view" => "Sea view",
        "mountain_view" => "Mountain view",
        "kitchen" => "Kitchen",
        "balcony" => "Balcony",
        "fireplace" => "Fireplace",
        "garden" => "Garden",
        "air_conditioning" => "A/C",
        "bbq" => "BBQ",
        "pool" => "Pool",
        other => other,
    }
}

impl Searchable for Property {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.location, &self.id]
    }

    fn status(&self) -> &str {
        &self.status
    }
}
