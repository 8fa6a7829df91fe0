use crate::common;
use dioxus::prelude::*;
use shared_types::{booking_status_label, client_status_label};
use shared_ui::{Badge, BadgeVariant, SearchBarCount};

#[test]
fn badge_carries_variant_and_label() {
    let html = dioxus_ssr::render_element(rsx! {
        Badge { variant: BadgeVariant::Warning, {booking_status_label("pending")} }
    });
    assert!(html.contains("data-style=\"warning\""), "{html}");
    assert!(html.contains("Pending"), "{html}");
}

#[test]
fn fallback_status_still_renders_a_badge() {
    let html = dioxus_ssr::render_element(rsx! {
        Badge { variant: BadgeVariant::Secondary, {client_status_label("suspended")} }
    });
    assert!(html.contains("data-style=\"secondary\""), "{html}");
    assert!(html.contains("Unknown"), "{html}");
}

#[test]
fn result_count_line_reflects_filtering() {
    let bookings = common::seeded_bookings();
    let visible = shared_types::filter_records(&bookings, "anna", shared_types::FILTER_ALL);

    let html = dioxus_ssr::render_element(rsx! {
        SearchBarCount {
            "Showing {visible.len()} of {bookings.len()} bookings"
        }
    });
    assert!(html.contains("Showing 1 of 4 bookings"), "{html}");
}
