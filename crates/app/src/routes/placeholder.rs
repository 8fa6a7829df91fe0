use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Stub page for sections that exist in navigation but are not built yet.
#[component]
pub fn PlaceholderPage(title: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./placeholder.css") }

        div { class: "placeholder-page",
            Card {
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "This section is under construction." }
                }
                CardContent {
                    p { class: "placeholder-hint",
                        "Check back after the next release."
                    }
                }
            }
        }
    }
}
