use dioxus::prelude::*;
use shared_types::Role;

pub mod demo_data;
pub mod format_helpers;
pub mod role_gate;
mod routes;

use routes::Route;

/// Currently selected viewer role, shared across all routes.
///
/// Every page reads this to decide which columns, stats and actions to
/// render. Switching it in the navbar re-renders the whole app.
#[derive(Clone, Copy)]
pub struct RoleContext {
    pub role: Signal<Role>,
}

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| RoleContext {
        role: Signal::new(Role::Owner),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
