use pretty_assertions::assert_eq;
use shared_types::{Role, ALL_ROLES};

#[test]
fn owner_outranks_admin() {
    assert!(Role::Owner.has_access(&Role::Admin));
    assert!(!Role::Admin.has_access(&Role::Owner));
}

#[test]
fn every_role_meets_its_own_requirement() {
    for role in ALL_ROLES {
        assert!(role.has_access(role), "{role:?}");
    }
}

#[test]
fn financial_visibility_is_owner_only() {
    assert!(Role::Owner.can_view_financials());
    assert!(!Role::Admin.can_view_financials());
}

#[test]
fn destructive_actions_are_owner_only() {
    assert!(Role::Owner.can_delete());
    assert!(!Role::Admin.can_delete());
}

#[test]
fn roles_round_trip_through_strings() {
    for role in ALL_ROLES {
        assert_eq!(Role::from_str_or_default(role.as_str()), *role);
    }
}

#[test]
fn unknown_role_string_falls_back_to_admin() {
    assert_eq!(Role::from_str_or_default("superuser"), Role::Admin);
    assert_eq!(Role::from_str_or_default(""), Role::Admin);
    assert_eq!(Role::default(), Role::Admin);
}

#[test]
fn display_names_are_distinct() {
    assert_eq!(Role::Owner.display_name(), "Owner");
    assert_eq!(Role::Admin.display_name(), "Administrator");
    assert_ne!(
        Role::Owner.access_description(),
        Role::Admin.access_description()
    );
}
