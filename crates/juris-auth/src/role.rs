//! The role catalog.
//!
//! Roles are a closed, finite set. Each role maps to a grant set from
//! the permission catalog. Four of the five roles carry an explicit,
//! hand-maintained allow-list; [`Role::SuperAdmin`] is the exception —
//! its grant set is defined as *the entire catalog, computed*, so a
//! permission added to [`Permission`] is granted to super admins
//! without any edit here. That invariant is pinned by a test below.
//!
//! # Example
//!
//! ```
//! use juris_auth::{Permission, Role};
//!
//! assert!(Role::Editor.grants().contains(Permission::MANAGE_POSTS));
//! assert!(!Role::Editor.grants().contains(Permission::MANAGE_USERS));
//! assert_eq!(Role::SuperAdmin.grants(), Permission::all());
//! ```

use crate::Permission;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named bundle of permissions assigned to an actor.
///
/// Every actor holds exactly one role. The wire form is
/// SCREAMING_SNAKE_CASE (`SUPER_ADMIN`, `ADMIN`, ...), matching what
/// the admin UI and stored records use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Holds every permission in the catalog, by construction.
    SuperAdmin,
    /// Full content and user management, but no role or permission
    /// administration.
    Admin,
    /// Editorial content management (posts, authors, journals,
    /// articles, call for papers, notifications).
    Editor,
    /// Dashboard access plus own-post management.
    Author,
    /// Dashboard access only.
    Viewer,
}

impl Role {
    /// Every role, from most to least privileged.
    pub const ALL: [Role; 5] = [
        Self::SuperAdmin,
        Self::Admin,
        Self::Editor,
        Self::Author,
        Self::Viewer,
    ];

    /// Returns the permission set this role grants.
    ///
    /// [`Role::SuperAdmin`] returns [`Permission::all()`] — never an
    /// enumerated list — so it can never drift out of sync as the
    /// catalog grows. All other roles are explicit allow-lists.
    #[must_use]
    pub fn grants(self) -> Permission {
        match self {
            Self::SuperAdmin => Permission::all(),
            Self::Admin => {
                Permission::VIEW_DASHBOARD
                    | Permission::MANAGE_POSTS
                    | Permission::MANAGE_AUTHORS
                    | Permission::MANAGE_JOURNALS
                    | Permission::MANAGE_ARTICLES
                    | Permission::MANAGE_CALL_FOR_PAPERS
                    | Permission::MANAGE_NOTIFICATIONS
                    | Permission::MANAGE_MEDIA
                    | Permission::MANAGE_EDITORIAL_BOARD
                    | Permission::MANAGE_BOARD_ADVISORS
                    | Permission::MANAGE_USERS
                // No MANAGE_ROLES, no MANAGE_PERMISSIONS.
            }
            Self::Editor => {
                Permission::VIEW_DASHBOARD
                    | Permission::MANAGE_POSTS
                    | Permission::MANAGE_AUTHORS
                    | Permission::MANAGE_JOURNALS
                    | Permission::MANAGE_ARTICLES
                    | Permission::MANAGE_CALL_FOR_PAPERS
                    | Permission::MANAGE_NOTIFICATIONS
            }
            Self::Author => Permission::VIEW_DASHBOARD | Permission::MANAGE_POSTS,
            Self::Viewer => Permission::VIEW_DASHBOARD,
        }
    }

    /// Returns the wire form, e.g. `SUPER_ADMIN`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Admin => "ADMIN",
            Self::Editor => "EDITOR",
            Self::Author => "AUTHOR",
            Self::Viewer => "VIEWER",
        }
    }

    /// Returns the display label, e.g. `Super Admin`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::Author => "Author",
            Self::Viewer => "Viewer",
        }
    }

    /// Parses a wire-form role name (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use juris_auth::Role;
    ///
    /// assert_eq!(Role::parse("SUPER_ADMIN"), Some(Role::SuperAdmin));
    /// assert_eq!(Role::parse("editor"), Some(Role::Editor));
    /// assert_eq!(Role::parse("root"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .copied()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized role name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_admin_grants_entire_catalog() {
        // Computed, not enumerated: stays true after any catalog extension.
        assert_eq!(Role::SuperAdmin.grants(), Permission::all());
        for p in Permission::CATALOG {
            assert!(Role::SuperAdmin.grants().contains(p));
        }
    }

    #[test]
    fn admin_lacks_role_administration() {
        let grants = Role::Admin.grants();
        assert!(grants.contains(Permission::MANAGE_USERS));
        assert!(grants.contains(Permission::MANAGE_MEDIA));
        assert!(!grants.contains(Permission::MANAGE_ROLES));
        assert!(!grants.contains(Permission::MANAGE_PERMISSIONS));
    }

    #[test]
    fn editor_grants() {
        let grants = Role::Editor.grants();
        assert!(grants.contains(Permission::MANAGE_POSTS));
        assert!(grants.contains(Permission::MANAGE_CALL_FOR_PAPERS));
        assert!(!grants.contains(Permission::MANAGE_MEDIA));
        assert!(!grants.contains(Permission::MANAGE_USERS));
    }

    #[test]
    fn author_and_viewer_grants() {
        assert_eq!(
            Role::Author.grants(),
            Permission::VIEW_DASHBOARD | Permission::MANAGE_POSTS
        );
        assert_eq!(Role::Viewer.grants(), Permission::VIEW_DASHBOARD);
    }

    #[test]
    fn grants_narrow_down_the_hierarchy() {
        // Each role's grant set contains the next one down.
        assert!(Role::SuperAdmin.grants().contains(Role::Admin.grants()));
        assert!(Role::Admin.grants().contains(Role::Editor.grants()));
        assert!(Role::Editor.grants().contains(Role::Author.grants()));
        assert!(Role::Author.grants().contains(Role::Viewer.grants()));
    }

    #[test]
    fn wire_form_roundtrips() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
            let parsed: Role = role.as_str().parse().expect("wire form parses");
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Role::parse("super_admin"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse("Viewer"), Some(Role::Viewer));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Role::parse("root"), None);
        let err = "root".parse::<Role>().expect_err("unknown role");
        assert_eq!(err, UnknownRole("root".to_string()));
    }

    #[test]
    fn serde_uses_wire_form() {
        let json = serde_json::to_string(&Role::SuperAdmin).expect("serialize");
        assert_eq!(json, "\"SUPER_ADMIN\"");
        let parsed: Role = serde_json::from_str("\"EDITOR\"").expect("deserialize");
        assert_eq!(parsed, Role::Editor);
    }
}
