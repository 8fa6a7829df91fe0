use crate::demo_data::{self, demo_clients};
use crate::format_helpers::{format_date_human, format_rub, initials, rating_stars};
use crate::routes::bookings::StatTile;
use dioxus::prelude::*;
use shared_types::{client_status_label, filter_records, Client, Role, CLIENT_STATUSES, FILTER_ALL};
use shared_ui::{
    Avatar, AvatarFallback, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent,
    CardHeader, CardTitle, FormSelect, Input, PageHeader, PageSubtitle, PageTitle, SearchBar,
    SearchBarCount,
};

/// Maps a client status string to the appropriate badge variant.
pub(crate) fn client_badge_variant(status: &str) -> BadgeVariant {
    match status {
        "vip" => BadgeVariant::Primary,
        "regular" => BadgeVariant::Outline,
        "new" => BadgeVariant::Success,
        _ => BadgeVariant::Secondary,
    }
}

/// Clients page with a searchable, status-filterable guest directory.
#[component]
pub fn ClientsPage() -> Element {
    let role = crate::role_gate::use_role();

    let mut search_query = use_signal(String::new);
    let mut status_filter = use_signal(|| FILTER_ALL.to_string());

    let clients = demo_clients();
    let query = search_query();
    let status = status_filter();
    let filtered = filter_records(&clients, &query, &status);

    let has_filters = !query.is_empty() || status != FILTER_ALL;
    let shown = filtered.len();
    let total = clients.len();

    let vip_count = clients.iter().filter(|c| c.status == "vip").count();

    let subtitle = if role.can_view_financials() {
        "Guest directory with booking history and revenue"
    } else {
        "Guest directory with booking history"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./clients.css") }

        div { class: "clients-page",
            PageHeader {
                div {
                    PageTitle { "Clients" }
                    PageSubtitle { "{subtitle}" }
                }
            }

            div { class: "stats-grid stats-grid-4",
                StatTile { label: "Total clients", value: total.to_string() }
                StatTile { label: "VIP clients", value: vip_count.to_string() }
                StatTile { label: "New this month", value: demo_data::NEW_CLIENTS_THIS_MONTH.to_string() }
                if role.can_view_financials() {
                    StatTile { label: "Average spend", value: format_rub(demo_data::AVERAGE_CLIENT_SPEND) }
                }
            }

            SearchBar {
                Input {
                    value: query.clone(),
                    placeholder: "Search by name, email or phone...",
                    on_input: move |evt: FormEvent| search_query.set(evt.value()),
                }
                FormSelect {
                    value: status.clone(),
                    onchange: move |evt: Event<FormData>| status_filter.set(evt.value()),
                    option { value: FILTER_ALL, "All statuses" }
                    for s in CLIENT_STATUSES {
                        option { value: *s, {client_status_label(s)} }
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
                    "Showing {shown} of {total} clients"
                }
            }

            if filtered.is_empty() {
                Card {
                    CardContent {
                        div { class: "list-empty",
                            p { class: "list-empty-title", "No clients found" }
                            p { class: "list-empty-subtitle", "Try adjusting the search or status filter." }
                        }
                    }
                }
            } else {
                div { class: "entity-list",
                    for client in filtered.iter() {
                        ClientCard { client: client.clone(), role: role }
                    }
                }
            }
        }
    }
}

/// A single guest card. Lifetime spend renders for owners only.
#[component]
pub(crate) fn ClientCard(client: Client, role: Role) -> Element {
    let variant = client_badge_variant(&client.status);

    rsx! {
        Card {
            CardHeader {
                div { class: "entity-card-header",
                    div { class: "client-identity",
                        Avatar {
                            AvatarFallback { {initials(&client.name)} }
                        }
                        div {
                            CardTitle { "{client.name}" }
                            p { class: "entity-card-subtext", "{client.location}" }
                        }
                    }
                    div { class: "entity-card-badges",
                        Badge { variant: BadgeVariant::Outline, "{client.id}" }
                        Badge { variant: variant, {client_status_label(&client.status)} }
                    }
                }
            }
            CardContent {
                div { class: "client-card-grid",
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Email" }
                        span { "{client.email}" }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Phone" }
                        span { "{client.phone}" }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Bookings" }
                        span { "{client.total_bookings}" }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Last stay" }
                        span { {format_date_human(&client.last_booking)} }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Registered" }
                        span { {format_date_human(&client.registered)} }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Rating" }
                        span { class: "client-rating", {rating_stars(client.rating)} }
                    }
                    if role.can_view_financials() {
                        div { class: "entity-field",
                            span { class: "entity-field-label", "Total spent" }
                            span { class: "entity-money", {format_rub(client.total_spent)} }
                        }
                    }
                }
                if !client.notes.is_empty() {
                    p { class: "client-notes", "{client.notes}" }
                }
            }
            div { class: "entity-card-actions",
                Button { variant: ButtonVariant::Outline, "Profile" }
                Button { variant: ButtonVariant::Outline, "New Booking" }
                if role.can_delete() {
                    Button { variant: ButtonVariant::Destructive, "Delete" }
                }
            }
        }
    }
}
