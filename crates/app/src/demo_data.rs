//! Static demo dataset backing every page.
//!
//! The app runs entirely on this in-memory data. Records are built fresh
//! on each call so pages can filter and sort their own copies freely.

use shared_types::{Booking, Client, Property};

/// Revenue for the current month, shown on the dashboard (owner only).
pub const MONTHLY_REVENUE: i64 = 245_000;
pub const MONTHLY_REVENUE_DELTA: &str = "+12.5% vs last month";

pub const ACTIVE_BOOKINGS: u32 = 28;
pub const ACTIVE_BOOKINGS_DELTA: &str = "+3 this week";

pub const NEW_CLIENTS: u32 = 15;
pub const NEW_CLIENTS_DELTA: &str = "+8 vs last month";

pub const OCCUPANCY_RATE: &str = "85%";
pub const OCCUPANCY_DELTA: &str = "+5% vs last month";

/// Bookings page stat row.
pub const PENDING_BOOKINGS: u32 = 5;
pub const ARRIVING_TODAY: u32 = 3;

/// Clients page stat row.
pub const NEW_CLIENTS_THIS_MONTH: u32 = 8;
pub const AVERAGE_CLIENT_SPEND: i64 = 18_000;

/// Dashboard attention panel.
pub const CHECK_INS_TODAY: u32 = 3;
pub const CHECK_OUTS_TODAY: u32 = 2;
pub const UNITS_READY: u32 = 5;

pub fn demo_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "BK001".to_string(),
            guest: "Anna Petrova".to_string(),
            property: "Seaside Villa".to_string(),
            check_in: "2024-09-15".to_string(),
            check_out: "2024-09-20".to_string(),
            status: "confirmed".to_string(),
            amount: 15_000,
            guests: 4,
            phone: "+7 905 123-45-67".to_string(),
            email: "anna.petrova@example.com".to_string(),
            created: "2024-08-28".to_string(),
            source: "Booking.com".to_string(),
        },
        Booking {
            id: "BK002".to_string(),
            guest: "Igor Smirnov".to_string(),
            property: "Mountain House".to_string(),
            check_in: "2024-09-18".to_string(),
            check_out: "2024-09-22".to_string(),
            status: "pending".to_string(),
            amount: 8_500,
            guests: 2,
            phone: "+7 916 987-65-43".to_string(),
            email: "igor.smirnov@example.com".to_string(),
            created: "2024-09-01".to_string(),
            source: "Direct".to_string(),
        },
        Booking {
            id: "BK003".to_string(),
            guest: "Maria Ivanova".to_string(),
            property: "Seafront Apartment".to_string(),
            check_in: "2024-09-25".to_string(),
            check_out: "2024-09-30".to_string(),
            status: "confirmed".to_string(),
            amount: 12_000,
            guests: 3,
            phone: "+7 903 555-12-34".to_string(),
            email: "maria.ivanova@example.com".to_string(),
            created: "2024-09-02".to_string(),
            source: "Avito".to_string(),
        },
        Booking {
            id: "BK004".to_string(),
            guest: "Alexey Volkov".to_string(),
            property: "Azure Cottage".to_string(),
            check_in: "2024-10-01".to_string(),
            check_out: "2024-10-05".to_string(),
            status: "cancelled".to_string(),
            amount: 6_000,
            guests: 2,
            phone: "+7 926 777-88-99".to_string(),
            email: "alexey.volkov@example.com".to_string(),
            created: "2024-09-03".to_string(),
            source: "Airbnb".to_string(),
        },
    ]
}

pub fn demo_clients() -> Vec<Client> {
    vec![
        Client {
            id: "CL001".to_string(),
            name: "Anna Petrova".to_string(),
            email: "anna.petrova@example.com".to_string(),
            phone: "+7 905 123-45-67".to_string(),
            location: "Moscow".to_string(),
            total_bookings: 5,
            total_spent: 75_000,
            last_booking: "2024-09-15".to_string(),
            status: "vip".to_string(),
            rating: 5,
            registered: "2023-03-12".to_string(),
            notes: "Prefers sea-view units, returns every season.".to_string(),
        },
        Client {
            id: "CL002".to_string(),
            name: "Igor Smirnov".to_string(),
            email: "igor.smirnov@example.com".to_string(),
            phone: "+7 916 987-65-43".to_string(),
            location: "St. Petersburg".to_string(),
            total_bookings: 2,
            total_spent: 18_500,
            last_booking: "2024-09-18".to_string(),
            status: "regular".to_string(),
            rating: 4,
            registered: "2024-01-25".to_string(),
            notes: "Travels with a dog, asks about pet policy.".to_string(),
        },
        Client {
            id: "CL003".to_string(),
            name: "Maria Ivanova".to_string(),
            email: "maria.ivanova@example.com".to_string(),
            phone: "+7 903 555-12-34".to_string(),
            location: "Yekaterinburg".to_string(),
            total_bookings: 4,
            total_spent: 42_000,
            last_booking: "2024-09-25".to_string(),
            status: "regular".to_string(),
            rating: 5,
            registered: "2023-07-08".to_string(),
            notes: "Books long stays, flexible on dates.".to_string(),
        },
        Client {
            id: "CL004".to_string(),
            name: "Alexey Volkov".to_string(),
            email: "alexey.volkov@example.com".to_string(),
            phone: "+7 926 777-88-99".to_string(),
            location: "Kazan".to_string(),
            total_bookings: 1,
            total_spent: 6_000,
            last_booking: "2024-10-01".to_string(),
            status: "new".to_string(),
            rating: 3,
            registered: "2024-08-30".to_string(),
            notes: "First booking cancelled, follow up next season.".to_string(),
        },
    ]
}

pub fn demo_properties() -> Vec<Property> {
    vec![
        Property {
            id: "PR001".to_string(),
            name: "Seaside Villa".to_string(),
            kind: "villa".to_string(),
            location: "Yalta".to_string(),
            bedrooms: 4,
            max_guests: 8,
            status: "active".to_string(),
            price_per_night: 3_000,
            rating: 4.8,
            total_bookings: 24,
            revenue: 180_000,
            amenities: vec![
                "wifi".to_string(),
                "parking".to_string(),
                "sea_view".to_string(),
                "kitchen".to_string(),
                "pool".to_string(),
            ],
            description: "Spacious villa a five minute walk from the beach.".to_string(),
        },
        Property {
            id: "PR002".to_string(),
            name: "Mountain House".to_string(),
            kind: "house".to_string(),
            location: "Alupka".to_string(),
            bedrooms: 3,
            max_guests: 6,
            status: "active".to_string(),
            price_per_night: 2_200,
            rating: 4.9,
            total_bookings: 19,
            revenue: 145_000,
            amenities: vec![
                "wifi".to_string(),
                "mountain_view".to_string(),
                "fireplace".to_string(),
                "garden".to_string(),
                "bbq".to_string(),
            ],
            description: "Quiet house at the foot of Ai-Petri with a terrace.".to_string(),
        },
        Property {
            id: "PR003".to_string(),
            name: "Seafront Apartment".to_string(),
            kind: "apartment".to_string(),
            location: "Sudak".to_string(),
            bedrooms: 2,
            max_guests: 4,
            status: "active".to_string(),
            price_per_night: 1_800,
            rating: 4.6,
            total_bookings: 15,
            revenue: 95_000,
            amenities: vec![
                "wifi".to_string(),
                "sea_view".to_string(),
                "kitchen".to_string(),
                "balcony".to_string(),
                "air_conditioning".to_string(),
            ],
            description: "Apartment on the embankment, renovated in 2023.".to_string(),
        },
        Property {
            id: "PR004".to_string(),
            name: "Azure Cottage".to_string(),
            kind: "cottage".to_string(),
            location: "Koktebel".to_string(),
            bedrooms: 2,
            max_guests: 5,
            status: "maintenance".to_string(),
            price_per_night: 2_500,
            rating: 4.7,
            total_bookings: 12,
            revenue: 78_000,
            amenities: vec![
                "wifi".to_string(),
                "parking".to_string(),
                "kitchen".to_string(),
                "garden".to_string(),
            ],
            description: "Cozy cottage near the bay, closed for roof repairs.".to_string(),
        },
    ]
}
