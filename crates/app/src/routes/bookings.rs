use crate::demo_data::{self, demo_bookings};
use crate::format_helpers::{format_date_range, format_rub};
use dioxus::prelude::*;
use shared_types::{booking_status_label, filter_records, Booking, Role, BOOKING_STATUSES, FILTER_ALL};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    FormSelect, Input, PageHeader, PageSubtitle, PageTitle, SearchBar, SearchBarCount,
};

/// Maps a booking status string to the appropriate badge variant.
pub(crate) fn booking_badge_variant(status: &str) -> BadgeVariant {
    match status {
        "confirmed" => BadgeVariant::Success,
        "pending" => BadgeVariant::Warning,
        "cancelled" => BadgeVariant::Destructive,
        _ => BadgeVariant::Secondary,
    }
}

/// Bookings page with a searchable, status-filterable reservation list.
#[component]
pub fn BookingsPage() -> Element {
    let role = crate::role_gate::use_role();

    let mut search_query = use_signal(String::new);
    let mut status_filter = use_signal(|| FILTER_ALL.to_string());

    let bookings = demo_bookings();
    let query = search_query();
    let status = status_filter();
    let filtered = filter_records(&bookings, &query, &status);

    let has_filters = !query.is_empty() || status != FILTER_ALL;
    let shown = filtered.len();
    let total = bookings.len();

    let subtitle = if role.can_view_financials() {
        "Manage reservations, payments and guest details"
    } else {
        "Manage reservations and guest details"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./bookings.css") }

        div { class: "bookings-page",
            PageHeader {
                div {
                    PageTitle { "Bookings" }
                    PageSubtitle { "{subtitle}" }
                }
            }

            div { class: "stats-grid stats-grid-4",
                StatTile { label: "Active bookings", value: demo_data::ACTIVE_BOOKINGS.to_string() }
                StatTile { label: "Awaiting confirmation", value: demo_data::PENDING_BOOKINGS.to_string() }
                StatTile { label: "Arriving today", value: demo_data::ARRIVING_TODAY.to_string() }
                if role.can_view_financials() {
                    StatTile { label: "Monthly revenue", value: format_rub(demo_data::MONTHLY_REVENUE) }
                }
            }

            SearchBar {
                Input {
                    value: query.clone(),
                    placeholder: "Search by guest, property or booking ID...",
                    on_input: move |evt: FormEvent| search_query.set(evt.value()),
                }
                FormSelect {
                    value: status.clone(),
                    onchange: move |evt: Event<FormData>| status_filter.set(evt.value()),
                    option { value: FILTER_ALL, "All statuses" }
                    for s in BOOKING_STATUSES {
                        option { value: *s, {booking_status_label(s)} }
                    }
                }
                if has_filters {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            search_query.set(String::new());
                            status_filter.set(FILTER_ALL.to_string());
                        },
                        "Clear Filters"
                    }
                }
                SearchBarCount {
                    "Showing {shown} of {total} bookings"
                }
            }

            if filtered.is_empty() {
                Card {
                    CardContent {
                        div { class: "list-empty",
                            p { class: "list-empty-title", "No bookings found" }
                            p { class: "list-empty-subtitle", "Try adjusting the search or status filter." }
                        }
                    }
                }
            } else {
                div { class: "entity-list",
                    for booking in filtered.iter() {
                        BookingCard { booking: booking.clone(), role: role }
                    }
                }
            }
        }
    }
}

/// A single reservation card. Payment details render for owners only.
#[component]
pub(crate) fn BookingCard(booking: Booking, role: Role) -> Element {
    let variant = booking_badge_variant(&booking.status);

    rsx! {
        Card {
            CardHeader {
                div { class: "entity-card-header",
                    div {
                        CardTitle { "{booking.guest}" }
                        p { class: "entity-card-subtext", "{booking.property}" }
                    }
                    div { class: "entity-card-badges",
                        Badge { variant: BadgeVariant::Outline, "{booking.id}" }
                        Badge { variant: variant, {booking_status_label(&booking.status)} }
                    }
                }
            }
            CardContent {
                div { class: "booking-card-grid",
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Dates" }
                        span { {format_date_range(&booking.check_in, &booking.check_out)} }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Guests" }
                        span { "{booking.guests}" }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Source" }
                        span { "{booking.source}" }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Phone" }
                        span { "{booking.phone}" }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Email" }
                        span { "{booking.email}" }
                    }
                    if role.can_view_financials() {
                        div { class: "entity-field",
                            span { class: "entity-field-label", "Amount" }
                            span { class: "entity-money", {format_rub(booking.amount)} }
                        }
                    }
                }
            }
            div { class: "entity-card-actions",
                Button { variant: ButtonVariant::Outline, "Details" }
                Button { variant: ButtonVariant::Outline, "Edit" }
                if role.can_delete() {
                    Button { variant: ButtonVariant::Destructive, "Delete" }
                }
            }
        }
    }
}

/// Small numeric stat tile used in page stat rows.
#[component]
pub(crate) fn StatTile(label: String, value: String) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-tile",
                    span { class: "stat-tile-value", "{value}" }
                    span { class: "stat-tile-label", "{label}" }
                }
            }
        }
    }
}
