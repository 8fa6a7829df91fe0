pub mod bookings;
pub mod clients;
pub mod dashboard;
pub mod not_found;
pub mod placeholder;
pub mod properties;

use crate::role_gate::use_role;
use crate::RoleContext;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdCalendar, LdClock, LdFileText, LdFolder,
    LdLayoutDashboard, LdPackage, LdSettings, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{Role, ALL_ROLES};
use shared_ui::{
    Badge, BadgeVariant, FormSelect, Navbar, NavbarSpacer, Sidebar, SidebarContent, SidebarFooter,
    SidebarGroup, SidebarGroupContent, SidebarGroupLabel, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger,
};

use dashboard::Dashboard;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/bookings")]
    Bookings {},
    #[route("/clients")]
    Clients {},
    #[route("/properties")]
    Properties {},
    // Owner-only sections, placeholders for now
    #[route("/finances")]
    Finances {},
    #[route("/reports")]
    Reports {},
    #[route("/analytics")]
    Analytics {},
    #[route("/users")]
    Users {},
    #[route("/settings")]
    Settings {},
    #[route("/security")]
    Security {},
    // Admin workspace sections, placeholders for now
    #[route("/notifications")]
    Notifications {},
    #[route("/tasks")]
    Tasks {},
    #[route("/contacts")]
    Contacts {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Main app layout with sidebar and top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let role = use_role();
    let mut ctx = use_context::<RoleContext>();

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::Bookings {} => "Bookings",
        Route::Clients {} => "Clients",
        Route::Properties {} => "Properties",
        Route::Finances {} => "Finances",
        Route::Reports {} => "Reports",
        Route::Analytics {} => "Analytics",
        Route::Users {} => "Users",
        Route::Settings {} => "Settings",
        Route::Security {} => "Security",
        Route::Notifications {} => "Notifications",
        Route::Tasks {} => "Tasks",
        Route::Contacts {} => "Contacts",
        Route::NotFound { .. } => "Not Found",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "CoastStay CRM" }
                        span { class: "sidebar-brand-role", {role.access_description()} }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup {
                        SidebarGroupLabel {
                            if role == Role::Owner { "Management" } else { "Main" }
                        }
                        SidebarGroupContent {
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::Dashboard {},
                                        SidebarMenuButton { active: matches!(route, Route::Dashboard {}),
                                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                            "Dashboard"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Bookings {},
                                        SidebarMenuButton { active: matches!(route, Route::Bookings {}),
                                            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                                            "Bookings"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Clients {},
                                        SidebarMenuButton { active: matches!(route, Route::Clients {}),
                                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                            "Clients"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Properties {},
                                        SidebarMenuButton { active: matches!(route, Route::Properties {}),
                                            Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                                            "Properties"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    SidebarSeparator {}

                    if role == Role::Owner {
                        SidebarGroup {
                            SidebarGroupLabel { "Finance" }
                            SidebarGroupContent {
                                SidebarMenu {
                                    SidebarMenuItem {
                                        Link { to: Route::Finances {},
                                            SidebarMenuButton { active: matches!(route, Route::Finances {}),
                                                Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                                                "Finances"
                                            }
                                        }
                                    }
                                    SidebarMenuItem {
                                        Link { to: Route::Reports {},
                                            SidebarMenuButton { active: matches!(route, Route::Reports {}),
                                                Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                                                "Reports"
                                            }
                                        }
                                    }
                                    SidebarMenuItem {
                                        Link { to: Route::Analytics {},
                                            SidebarMenuButton { active: matches!(route, Route::Analytics {}),
                                                Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                                                "Analytics"
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        SidebarSeparator {}

                        SidebarGroup {
                            SidebarGroupLabel { "Administration" }
                            SidebarGroupContent {
                                SidebarMenu {
                                    SidebarMenuItem {
                                        Link { to: Route::Users {},
                                            SidebarMenuButton { active: matches!(route, Route::Users {}),
                                                Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                                                "Users"
                                            }
                                        }
                                    }
                                    SidebarMenuItem {
                                        Link { to: Route::Settings {},
                                            SidebarMenuButton { active: matches!(route, Route::Settings {}),
                                                Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                                "Settings"
                                            }
                                        }
                                    }
                                    SidebarMenuItem {
                                        Link { to: Route::Security {},
                                            SidebarMenuButton { active: matches!(route, Route::Security {}),
                                                Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                                                "Security"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        SidebarGroup {
                            SidebarGroupLabel { "Workspace" }
                            SidebarGroupContent {
                                SidebarMenu {
                                    SidebarMenuItem {
                                        Link { to: Route::Notifications {},
                                            SidebarMenuButton { active: matches!(route, Route::Notifications {}),
                                                Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                                                "Notifications"
                                            }
                                        }
                                    }
                                    SidebarMenuItem {
                                        Link { to: Route::Tasks {},
                                            SidebarMenuButton { active: matches!(route, Route::Tasks {}),
                                                Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                                                "Tasks"
                                            }
                                        }
                                    }
                                    SidebarMenuItem {
                                        Link { to: Route::Contacts {},
                                            SidebarMenuButton { active: matches!(route, Route::Contacts {}),
                                                Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 }
                                                "Contacts"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    RoleBadge {}
                }
            }

            SidebarInset {
                Navbar {
                    SidebarTrigger {
                        span { class: "navbar-trigger-icon", "\u{2630}" }
                    }

                    span { class: "navbar-title", "{page_title}" }

                    NavbarSpacer {}

                    div { class: "navbar-role-select",
                        FormSelect {
                            value: role.as_str().to_string(),
                            onchange: move |evt: Event<FormData>| {
                                let next = Role::from_str_or_default(&evt.value());
                                tracing::debug!(role = next.as_str(), "viewer role changed");
                                ctx.role.set(next);
                            },
                            for r in ALL_ROLES {
                                option { value: r.as_str(), selected: *r == role, {r.display_name()} }
                            }
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

// Route components

#[component]
fn Bookings() -> Element {
    bookings::BookingsPage()
}

#[component]
fn Clients() -> Element {
    clients::ClientsPage()
}

#[component]
fn Properties() -> Element {
    properties::PropertiesPage()
}

#[component]
fn Finances() -> Element {
    rsx! { placeholder::PlaceholderPage { title: "Finances" } }
}

#[component]
fn Reports() -> Element {
    rsx! { placeholder::PlaceholderPage { title: "Reports" } }
}

#[component]
fn Analytics() -> Element {
    rsx! { placeholder::PlaceholderPage { title: "Analytics" } }
}

#[component]
fn Users() -> Element {
    rsx! { placeholder::PlaceholderPage { title: "Users" } }
}

#[component]
fn Settings() -> Element {
    rsx! { placeholder::PlaceholderPage { title: "Settings" } }
}

#[component]
fn Security() -> Element {
    rsx! { placeholder::PlaceholderPage { title: "Security" } }
}

#[component]
fn Notifications() -> Element {
    rsx! { placeholder::PlaceholderPage { title: "Notifications" } }
}

#[component]
fn Tasks() -> Element {
    rsx! { placeholder::PlaceholderPage { title: "Tasks" } }
}

#[component]
fn Contacts() -> Element {
    rsx! { placeholder::PlaceholderPage { title: "Contacts" } }
}

/// Displays the selected role as a badge in the sidebar footer.
#[component]
fn RoleBadge() -> Element {
    let role = use_role();

    let variant = match role {
        Role::Owner => BadgeVariant::Primary,
        Role::Admin => BadgeVariant::Secondary,
    };

    rsx! {
        div { class: "sidebar-footer-row sidebar-role-row",
            span { class: "sidebar-footer-label", "Role" }
            Badge { variant: variant, {role.display_name()} }
        }
    }
}
