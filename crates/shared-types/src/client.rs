use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// A guest in the client base, with aggregate booking statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub total_bookings: u32,
    /// Lifetime spend, whole rubles. Rendered only for the owner role.
    pub total_spent: i64,
    pub last_booking: String,
    /// One of [`CLIENT_STATUSES`]; unknown values get the fallback badge.
    pub status: String,
    /// Star rating in `[0, 5]`.
    pub rating: u8,
    pub registered: String,
    pub notes: String,
}

/// Client statuses in display order.
pub const CLIENT_STATUSES: &[&str] = &["vip", "regular", "new"];

/// Display label for a client status. Total over any input.
pub fn client_status_label(status: &str) -> &'static str {
    match status {
        "vip" => "VIP",
        "regular" => "Regular",
        "new" => "New",
        _ => "Unknown",
    }
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.phone, &self.id]
    }

    fn status(&self) -> &str {
        &self.status
    }
}
