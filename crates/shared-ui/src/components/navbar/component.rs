use dioxus::prelude::*;

/// Top navigation bar container.
#[component]
pub fn Navbar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            class: "navbar",
            ..attributes,
            {children}
        }
    }
}

/// Flexible spacer pushing subsequent navbar items to the right.
#[component]
pub fn NavbarSpacer() -> Element {
    rsx! {
        div { class: "navbar-spacer" }
    }
}
