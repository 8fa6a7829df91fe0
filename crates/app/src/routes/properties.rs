use crate::demo_data::demo_properties;
use crate::format_helpers::format_rub;
use crate::routes::bookings::StatTile;
use dioxus::prelude::*;
use shared_types::{
    amenity_label, filter_records, property_kind_label, property_status_label, Property, Role,
    FILTER_ALL, PROPERTY_KINDS, PROPERTY_STATUSES,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    FormSelect, Input, PageHeader, PageSubtitle, PageTitle, SearchBar, SearchBarCount,
};

/// Amenity tags shown on a card before collapsing into a "+N" badge.
const MAX_VISIBLE_AMENITIES: usize = 4;

/// Maps a property status string to the appropriate badge variant.
pub(crate) fn property_badge_variant(status: &str) -> BadgeVariant {
    match status {
        "active" => BadgeVariant::Success,
        "maintenance" => BadgeVariant::Warning,
        "inactive" => BadgeVariant::Destructive,
        _ => BadgeVariant::Secondary,
    }
}

/// Properties page with a searchable inventory filterable by status and kind.
#[component]
pub fn PropertiesPage() -> Element {
    let role = crate::role_gate::use_role();

    let mut search_query = use_signal(String::new);
    let mut status_filter = use_signal(|| FILTER_ALL.to_string());
    let mut kind_filter = use_signal(|| FILTER_ALL.to_string());

    let properties = demo_properties();
    let query = search_query();
    let status = status_filter();
    let kind = kind_filter();

    // Kind narrows the candidate set before the shared search/status pass.
    let by_kind: Vec<Property> = properties
        .iter()
        .filter(|p| kind == FILTER_ALL || p.kind == kind)
        .cloned()
        .collect();
    let filtered = filter_records(&by_kind, &query, &status);

    let has_filters = !query.is_empty() || status != FILTER_ALL || kind != FILTER_ALL;
    let shown = filtered.len();
    let total = properties.len();

    let active_count = properties.iter().filter(|p| p.status == "active").count();
    let avg_rating = if properties.is_empty() {
        0.0
    } else {
        properties.iter().map(|p| p.rating).sum::<f64>() / properties.len() as f64
    };
    let total_revenue: i64 = properties.iter().map(|p| p.revenue).sum();

    let subtitle = if role.can_view_financials() {
        "Rental inventory with occupancy and revenue"
    } else {
        "Rental inventory and availability"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./properties.css") }

        div { class: "properties-page",
            PageHeader {
                div {
                    PageTitle { "Properties" }
                    PageSubtitle { "{subtitle}" }
                }
            }

            div { class: "stats-grid stats-grid-4",
                StatTile { label: "Total properties", value: total.to_string() }
                StatTile { label: "Active listings", value: active_count.to_string() }
                StatTile { label: "Average rating", value: format!("{avg_rating:.1}") }
                if role.can_view_financials() {
                    StatTile { label: "Total revenue", value: format_rub(total_revenue) }
                }
            }

            SearchBar {
                Input {
                    value: query.clone(),
                    placeholder: "Search by name, location or ID...",
                    on_input: move |evt: FormEvent| search_query.set(evt.value()),
                }
                FormSelect {
                    value: status.clone(),
                    onchange: move |evt: Event<FormData>| status_filter.set(evt.value()),
                    option { value: FILTER_ALL, "All statuses" }
                    for s in PROPERTY_STATUSES {
                        option { value: *s, {property_status_label(s)} }
                    }
                }
                FormSelect {
                    value: kind.clone(),
                    onchange: move |evt: Event<FormData>| kind_filter.set(evt.value()),
                    option { value: FILTER_ALL, "All types" }
                    for k in PROPERTY_KINDS {
                        option { value: *k, {property_kind_label(k)} }
                    }
                }
                if has_filters {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            search_query.set(String::new());
                            status_filter.set(FILTER_ALL.to_string());
                            kind_filter.set(FILTER_ALL.to_string());
                        },
                        "Clear Filters"
                    }
                }
                SearchBarCount {
                    "Showing {shown} of {total} properties"
                }
            }

            if filtered.is_empty() {
                Card {
                    CardContent {
                        div { class: "list-empty",
                            p { class: "list-empty-title", "No properties found" }
                            p { class: "list-empty-subtitle", "Try adjusting the search or filters." }
                        }
                    }
                }
            } else {
                div { class: "entity-list",
                    for property in filtered.iter() {
                        PropertyCard { property: property.clone(), role: role }
                    }
                }
            }
        }
    }
}

/// A single listing card. Revenue renders for owners only.
#[component]
pub(crate) fn PropertyCard(property: Property, role: Role) -> Element {
    let variant = property_badge_variant(&property.status);

    rsx! {
        Card {
            CardHeader {
                div { class: "entity-card-header",
                    div {
                        CardTitle { "{property.name}" }
                        p { class: "entity-card-subtext",
                            {format!("{} \u{b7} {}", property_kind_label(&property.kind), property.location)}
                        }
                    }
                    div { class: "entity-card-badges",
                        Badge { variant: BadgeVariant::Outline, "{property.id}" }
                        Badge { variant: variant, {property_status_label(&property.status)} }
                    }
                }
            }
            CardContent {
                div { class: "property-card-grid",
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Bedrooms" }
                        span { "{property.bedrooms}" }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Max guests" }
                        span { "{property.max_guests}" }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Rating" }
                        span { {format!("{:.1}", property.rating)} }
                    }
                    div { class: "entity-field",
                        span { class: "entity-field-label", "Bookings" }
                        span { "{property.total_bookings}" }
                    }
                    if role.can_view_financials() {
                        div { class: "entity-field",
                            span { class: "entity-field-label", "Price / night" }
                            span { class: "entity-money", {format_rub(property.price_per_night)} }
                        }
                        div { class: "entity-field",
                            span { class: "entity-field-label", "Revenue" }
                            span { class: "entity-money", {format_rub(property.revenue)} }
                        }
                    }
                }
                div { class: "property-amenities",
                    for amenity in property.amenities.iter().take(MAX_VISIBLE_AMENITIES) {
                        Badge { variant: BadgeVariant::Secondary, {amenity_label(amenity)} }
                    }
                    if property.amenities.len() > MAX_VISIBLE_AMENITIES {
                        Badge { variant: BadgeVariant::Outline,
                            {format!("+{}", property.amenities.len() - MAX_VISIBLE_AMENITIES)}
                        }
                    }
                }
                if !property.description.is_empty() {
                    p { class: "property-description", "{property.description}" }
                }
            }
            div { class: "entity-card-actions",
                Button { variant: ButtonVariant::Outline, "Details" }
                Button { variant: ButtonVariant::Outline, "Calendar" }
                if role.can_delete() {
                    Button { variant: ButtonVariant::Destructive, "Delete" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_card(property: Property, role: Role) -> String {
        dioxus_ssr::render_element(rsx! {
            PropertyCard { property: property, role: role }
        })
    }

    #[test]
    fn owner_sees_price_and_revenue() {
        let html = render_card(demo_properties().remove(0), Role::Owner);
        assert!(html.contains("₽3,000"), "{html}");
        assert!(html.contains("₽180,000"), "{html}");
    }

    #[test]
    fn admin_card_hides_money() {
        let html = render_card(demo_properties().remove(0), Role::Admin);
        assert!(!html.contains("₽"), "{html}");
        assert!(!html.contains("Delete"), "{html}");
    }

    #[test]
    fn amenities_render_human_labels() {
        let html = render_card(demo_properties().remove(0), Role::Admin);
        assert!(html.contains("Wi-Fi"), "{html}");
        assert!(html.contains("Sea view"), "{html}");
    }

    #[test]
    fn extra_amenities_collapse_into_overflow_badge() {
        // Seaside Villa carries five amenities; the fifth becomes "+1".
        let html = render_card(demo_properties().remove(0), Role::Admin);
        assert!(html.contains("+1"), "{html}");
        assert!(!html.contains("Pool"), "{html}");
    }

    #[test]
    fn status_variants_cover_fallback() {
        assert_eq!(property_badge_variant("active"), BadgeVariant::Success);
        assert_eq!(property_badge_variant("maintenance"), BadgeVariant::Warning);
        assert_eq!(property_badge_variant("inactive"), BadgeVariant::Destructive);
        assert_eq!(property_badge_variant("sold"), BadgeVariant::Secondary);
    }
}
