use crate::RoleContext;
use dioxus::prelude::*;
use shared_types::Role;

/// Read the currently selected viewer role from context.
pub fn use_role() -> Role {
    let ctx = use_context::<RoleContext>();
    let role = ctx.role.read();
    *role
}

/// Check if the current role meets a role requirement.
pub fn use_role_check(required: &Role) -> bool {
    use_role().has_access(required)
}

/// Conditionally render children based on viewer role.
/// Shows `fallback` if the role is insufficient.
#[component]
pub fn RoleGate(required: Role, fallback: Element, children: Element) -> Element {
    let has_access = use_role_check(&required);

    if has_access {
        rsx! { {children} }
    } else {
        rsx! { {fallback} }
    }
}
