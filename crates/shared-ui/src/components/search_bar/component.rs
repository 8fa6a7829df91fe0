use dioxus::prelude::*;

/// Search/filter bar, wrapping inputs, selects, and action buttons in a flex row.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            {children}
        }
    }
}

/// Right-aligned result counter inside a SearchBar ("Showing X of Y").
#[component]
pub fn SearchBarCount(children: Element) -> Element {
    rsx! {
        span { class: "search-bar-count", {children} }
    }
}
