use serde::{Deserialize, Serialize};

/// Dashboard role controlling which fields and actions are rendered.
///
/// - `Owner`: full access: financial figures and destructive actions.
/// - `Admin`: day-to-day operations: everything except financial totals
///   and delete controls.
///
/// This is a rendering predicate only. It decides what the UI draws and
/// carries no authorization guarantee; a system with a real backend must
/// enforce access server-side instead of reconstructing this gate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    Owner,
    #[default]
    Admin,
}

/// All selectable roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Owner, Role::Admin];

impl Role {
    /// Numeric rank for privilege comparison.
    fn rank(&self) -> u8 {
        match self {
            Role::Owner => 1,
            Role::Admin => 0,
        }
    }

    /// Check if this role grants access to UI requiring `required`.
    pub fn has_access(&self, required: &Role) -> bool {
        self.rank() >= required.rank()
    }

    /// Internal key used for Select values and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Admin => "Administrator",
        }
    }

    /// Short description of what the role can reach, shown in the sidebar.
    pub fn access_description(&self) -> &'static str {
        match self {
            Role::Owner => "Full access",
            Role::Admin => "Operations access",
        }
    }

    /// Parse a role key, falling back to the lower-privilege role.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "owner" => Role::Owner,
            _ => Role::Admin,
        }
    }

    /// Whether monetary fields (revenue, spend, prices) are rendered.
    pub fn can_view_financials(&self) -> bool {
        matches!(self, Role::Owner)
    }

    /// Whether destructive controls (delete buttons) are rendered.
    pub fn can_delete(&self) -> bool {
        matches!(self, Role::Owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_default_is_admin() {
        assert_eq!(Role::default(), Role::Admin);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::from_str_or_default(role.as_str()), *role);
        }
    }

    #[test]
    fn role_from_unknown_falls_back_to_admin() {
        assert_eq!(Role::from_str_or_default("superuser"), Role::Admin);
        assert_eq!(Role::from_str_or_default(""), Role::Admin);
    }

    #[test]
    fn admin_never_outranks_owner() {
        assert!(Role::Owner.can_view_financials());
        assert!(Role::Owner.can_delete());
        assert!(!Role::Admin.can_view_financials());
        assert!(!Role::Admin.can_delete());
    }

    #[test]
    fn access_is_a_superset_relation() {
        assert!(Role::Owner.has_access(&Role::Admin));
        assert!(Role::Owner.has_access(&Role::Owner));
        assert!(Role::Admin.has_access(&Role::Admin));
        assert!(!Role::Admin.has_access(&Role::Owner));
    }
}
