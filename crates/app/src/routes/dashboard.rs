use crate::demo_data::{self, demo_bookings};
use crate::format_helpers::{format_date_range, format_rub, format_rub_compact};
use crate::role_gate::RoleGate;
use crate::routes::bookings::booking_badge_variant;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{booking_status_label, Booking, Role};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
};

/// Number of recent bookings shown on the dashboard.
const RECENT_BOOKINGS: usize = 3;

/// Landing page with headline stats, recent bookings and quick actions.
#[component]
pub fn Dashboard() -> Element {
    let role = crate::role_gate::use_role();

    let recent: Vec<Booking> = demo_bookings().into_iter().take(RECENT_BOOKINGS).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            div { class: "stats-grid stats-grid-4",
                RoleGate {
                    required: Role::Owner,
                    fallback: rsx! {},
                    StatCard {
                        label: "Monthly revenue",
                        value: format_rub_compact(demo_data::MONTHLY_REVENUE),
                        delta: demo_data::MONTHLY_REVENUE_DELTA.to_string(),
                    }
                }
                StatCard {
                    label: "Active bookings",
                    value: demo_data::ACTIVE_BOOKINGS.to_string(),
                    delta: demo_data::ACTIVE_BOOKINGS_DELTA.to_string(),
                }
                StatCard {
                    label: "New clients",
                    value: demo_data::NEW_CLIENTS.to_string(),
                    delta: demo_data::NEW_CLIENTS_DELTA.to_string(),
                }
                StatCard {
                    label: "Occupancy",
                    value: demo_data::OCCUPANCY_RATE.to_string(),
                    delta: demo_data::OCCUPANCY_DELTA.to_string(),
                }
            }

            div { class: "dashboard-columns",
                Card {
                    CardHeader {
                        CardTitle { "Recent bookings" }
                    }
                    CardContent {
                        div { class: "recent-bookings",
                            for booking in recent.iter() {
                                RecentBookingRow { booking: booking.clone(), role: role }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                navigator().push(Route::Bookings {});
                            },
                            "View all bookings"
                        }
                    }
                }

                div { class: "dashboard-side",
                    Card {
                        CardHeader {
                            CardTitle { "Quick actions" }
                        }
                        CardContent {
                            div { class: "quick-actions",
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| {
                                        navigator().push(Route::Bookings {});
                                    },
                                    "New booking"
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| {
                                        navigator().push(Route::Clients {});
                                    },
                                    "Add client"
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| {
                                        navigator().push(Route::Properties {});
                                    },
                                    "Manage properties"
                                }
                                if role.can_view_financials() {
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| {
                                            navigator().push(Route::Finances {});
                                        },
                                        "Open finances"
                                    }
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "Needs attention" }
                        }
                        CardContent {
                            ul { class: "attention-list",
                                li {
                                    span { "Check-ins today" }
                                    Badge { variant: BadgeVariant::Success, "{demo_data::CHECK_INS_TODAY}" }
                                }
                                li {
                                    span { "Check-outs today" }
                                    Badge { variant: BadgeVariant::Warning, "{demo_data::CHECK_OUTS_TODAY}" }
                                }
                                li {
                                    span { "Units ready for guests" }
                                    Badge { variant: BadgeVariant::Outline, "{demo_data::UNITS_READY}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One row in the recent bookings panel. Amounts render for owners only.
#[component]
pub(crate) fn RecentBookingRow(booking: Booking, role: Role) -> Element {
    let variant = booking_badge_variant(&booking.status);

    rsx! {
        div { class: "recent-booking-row",
            div { class: "recent-booking-main",
                span { class: "recent-booking-guest", "{booking.guest}" }
                span { class: "recent-booking-detail",
                    {format!("{} \u{b7} {}", booking.property, format_date_range(&booking.check_in, &booking.check_out))}
                }
            }
            div { class: "recent-booking-meta",
                if role.can_view_financials() {
                    span { class: "entity-money", {format_rub(booking.amount)} }
                }
                Badge { variant: variant, {booking_status_label(&booking.status)} }
            }
        }
    }
}

/// Headline stat card with a period-over-period delta line.
#[component]
fn StatCard(label: String, value: String, delta: String) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-card",
                    span { class: "stat-card-label", "{label}" }
                    span { class: "stat-card-value", "{value}" }
                    span { class: "stat-card-delta", "{delta}" }
                }
            }
        }
    }
}
