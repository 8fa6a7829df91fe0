use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// A guest booking for a rental property.
///
/// Dates are ISO `YYYY-MM-DD` strings (calendar dates, no time zone) and
/// `amount` is whole rubles. `property` is a display name, not a reference
/// to a [`crate::Property`] record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub guest: String,
    pub property: String,
    pub check_in: String,
    pub check_out: String,
    /// One of [`BOOKING_STATUSES`]. Stored as a string so an out-of-domain
    /// value renders the fallback badge instead of failing.
    pub status: String,
    pub amount: i64,
    pub guests: u32,
    pub phone: String,
    pub email: String,
    pub created: String,
    /// Channel the booking arrived through, e.g. "Booking.com" or "Direct".
    pub source: String,
}

/// Booking statuses in display order. The UI never transitions between them.
pub const BOOKING_STATUSES: &[&str] = &["confirmed", "pending", "cancelled"];

/// Display label for a booking status. Total over any input.
pub fn booking_status_label(status: &str) -> &'static str {
    match status {
        "confirmed" => "Confirmed",
        "pending" => "Pending",
        "cancelled" => "Cancelled",
        _ => "Unknown",
    }
}

impl Searchable for Booking {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.guest, &self.property, &self.id]
    }

    fn status(&self) -> &str {
        &self.status
    }
}
