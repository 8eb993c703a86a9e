//! The permission catalog.
//!
//! Defines every capability that exists in the Juris admin platform
//! as a [`bitflags`] set. The catalog is fixed at compile time:
//! permissions are never created or destroyed at runtime, and every
//! permission referenced anywhere (role grants, route map, actor
//! overrides) is a member of this set by construction.
//!
//! # Atomic permissions vs. sets
//!
//! Each `const` below is a single-bit *atomic* permission. Because
//! [`Permission`] is a bitflags type, any union of atomic permissions
//! is also a valid value — role grant sets and per-actor override
//! sets are plain `Permission` values.
//!
//! # Example
//!
//! ```
//! use juris_auth::Permission;
//!
//! let editor_tools = Permission::MANAGE_POSTS | Permission::MANAGE_AUTHORS;
//! assert!(editor_tools.contains(Permission::MANAGE_POSTS));
//! assert!(!editor_tools.contains(Permission::MANAGE_USERS));
//!
//! // Wire tokens and display labels are derived from the catalog
//! assert_eq!(Permission::MANAGE_CALL_FOR_PAPERS.token(), Some("manage_call_for_papers"));
//! assert_eq!(
//!     Permission::MANAGE_CALL_FOR_PAPERS.label().as_deref(),
//!     Some("Manage Call For Papers")
//! );
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// A set of capabilities in the Juris admin platform.
    ///
    /// | Permission | Gates |
    /// |------------|-------|
    /// | [`VIEW_DASHBOARD`](Self::VIEW_DASHBOARD) | the admin dashboard landing page |
    /// | [`MANAGE_POSTS`](Self::MANAGE_POSTS) | blog post CRUD |
    /// | [`MANAGE_AUTHORS`](Self::MANAGE_AUTHORS) | author profiles |
    /// | [`MANAGE_JOURNALS`](Self::MANAGE_JOURNALS) | journal issues |
    /// | [`MANAGE_ARTICLES`](Self::MANAGE_ARTICLES) | journal articles |
    /// | [`MANAGE_CALL_FOR_PAPERS`](Self::MANAGE_CALL_FOR_PAPERS) | call-for-papers announcements |
    /// | [`MANAGE_NOTIFICATIONS`](Self::MANAGE_NOTIFICATIONS) | site notifications |
    /// | [`MANAGE_MEDIA`](Self::MANAGE_MEDIA) | the media library |
    /// | [`MANAGE_EDITORIAL_BOARD`](Self::MANAGE_EDITORIAL_BOARD) | editorial board listings |
    /// | [`MANAGE_BOARD_ADVISORS`](Self::MANAGE_BOARD_ADVISORS) | board advisor listings |
    /// | [`MANAGE_USERS`](Self::MANAGE_USERS) | user accounts |
    /// | [`MANAGE_ROLES`](Self::MANAGE_ROLES) | role assignment (super-admin territory) |
    /// | [`MANAGE_PERMISSIONS`](Self::MANAGE_PERMISSIONS) | the permissions screen (super-admin territory) |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Permission: u16 {
        /// View the admin dashboard.
        const VIEW_DASHBOARD         = 1 << 0;
        /// Create, edit and delete blog posts.
        const MANAGE_POSTS           = 1 << 1;
        /// Manage author profiles.
        const MANAGE_AUTHORS         = 1 << 2;
        /// Manage journal issues.
        const MANAGE_JOURNALS        = 1 << 3;
        /// Manage journal articles.
        const MANAGE_ARTICLES        = 1 << 4;
        /// Manage call-for-papers announcements.
        const MANAGE_CALL_FOR_PAPERS = 1 << 5;
        /// Manage site notifications.
        const MANAGE_NOTIFICATIONS   = 1 << 6;
        /// Manage the media library.
        const MANAGE_MEDIA           = 1 << 7;
        /// Manage editorial board listings.
        const MANAGE_EDITORIAL_BOARD = 1 << 8;
        /// Manage board advisor listings.
        const MANAGE_BOARD_ADVISORS  = 1 << 9;
        /// Manage user accounts.
        const MANAGE_USERS           = 1 << 10;
        /// Assign and change user roles.
        const MANAGE_ROLES           = 1 << 11;
        /// View and manage the permission catalog screen.
        const MANAGE_PERMISSIONS     = 1 << 12;
    }
}

/// Wire tokens for every atomic permission, in catalog order.
///
/// Single source of truth for the string form: serialization to the
/// admin UI, CLI input parsing, and label derivation all go through
/// this table.
const TOKENS: [(Permission, &str); 13] = [
    (Permission::VIEW_DASHBOARD, "view_dashboard"),
    (Permission::MANAGE_POSTS, "manage_posts"),
    (Permission::MANAGE_AUTHORS, "manage_authors"),
    (Permission::MANAGE_JOURNALS, "manage_journals"),
    (Permission::MANAGE_ARTICLES, "manage_articles"),
    (Permission::MANAGE_CALL_FOR_PAPERS, "manage_call_for_papers"),
    (Permission::MANAGE_NOTIFICATIONS, "manage_notifications"),
    (Permission::MANAGE_MEDIA, "manage_media"),
    (Permission::MANAGE_EDITORIAL_BOARD, "manage_editorial_board"),
    (Permission::MANAGE_BOARD_ADVISORS, "manage_board_advisors"),
    (Permission::MANAGE_USERS, "manage_users"),
    (Permission::MANAGE_ROLES, "manage_roles"),
    (Permission::MANAGE_PERMISSIONS, "manage_permissions"),
];

impl Permission {
    /// Every atomic permission, in catalog order.
    ///
    /// # Example
    ///
    /// ```
    /// use juris_auth::Permission;
    ///
    /// assert_eq!(Permission::CATALOG.len(), 13);
    /// // The union of the catalog is the full set.
    /// let union = Permission::CATALOG
    ///     .iter()
    ///     .fold(Permission::empty(), |acc, p| acc | *p);
    /// assert_eq!(union, Permission::all());
    /// ```
    pub const CATALOG: [Permission; 13] = [
        Self::VIEW_DASHBOARD,
        Self::MANAGE_POSTS,
        Self::MANAGE_AUTHORS,
        Self::MANAGE_JOURNALS,
        Self::MANAGE_ARTICLES,
        Self::MANAGE_CALL_FOR_PAPERS,
        Self::MANAGE_NOTIFICATIONS,
        Self::MANAGE_MEDIA,
        Self::MANAGE_EDITORIAL_BOARD,
        Self::MANAGE_BOARD_ADVISORS,
        Self::MANAGE_USERS,
        Self::MANAGE_ROLES,
        Self::MANAGE_PERMISSIONS,
    ];

    /// Returns the wire token for an atomic permission.
    ///
    /// Returns `None` if `self` is not a single permission from the
    /// catalog (empty set or a union of several flags).
    ///
    /// # Example
    ///
    /// ```
    /// use juris_auth::Permission;
    ///
    /// assert_eq!(Permission::MANAGE_USERS.token(), Some("manage_users"));
    /// assert_eq!((Permission::MANAGE_USERS | Permission::MANAGE_POSTS).token(), None);
    /// assert_eq!(Permission::empty().token(), None);
    /// ```
    #[must_use]
    pub fn token(self) -> Option<&'static str> {
        TOKENS.iter().find(|(p, _)| *p == self).map(|(_, t)| *t)
    }

    /// Parses a wire token into an atomic permission (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use juris_auth::Permission;
    ///
    /// assert_eq!(Permission::from_token("manage_posts"), Some(Permission::MANAGE_POSTS));
    /// assert_eq!(Permission::from_token("MANAGE_POSTS"), Some(Permission::MANAGE_POSTS));
    /// assert_eq!(Permission::from_token("manage_everything"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        TOKENS
            .iter()
            .find(|(_, t)| t.eq_ignore_ascii_case(token))
            .map(|(p, _)| *p)
    }

    /// Returns the human-readable label for an atomic permission.
    ///
    /// The label is derived mechanically from the wire token: split
    /// on `_`, uppercase the first letter of each word, join with
    /// spaces. This derivation is what the admin UI shows next to
    /// each permission and route.
    ///
    /// # Example
    ///
    /// ```
    /// use juris_auth::Permission;
    ///
    /// assert_eq!(Permission::VIEW_DASHBOARD.label().as_deref(), Some("View Dashboard"));
    /// assert_eq!(
    ///     Permission::MANAGE_CALL_FOR_PAPERS.label().as_deref(),
    ///     Some("Manage Call For Papers")
    /// );
    /// ```
    #[must_use]
    pub fn label(self) -> Option<String> {
        self.token().map(title_case_token)
    }

    /// Returns the catalog as `{id, name}` entries for the
    /// permissions-management UI.
    ///
    /// # Example
    ///
    /// ```
    /// use juris_auth::Permission;
    ///
    /// let entries = Permission::entries();
    /// assert_eq!(entries.len(), 13);
    /// assert_eq!(entries[0].id, "view_dashboard");
    /// assert_eq!(entries[0].name, "View Dashboard");
    /// ```
    #[must_use]
    pub fn entries() -> Vec<PermissionEntry> {
        Self::CATALOG
            .iter()
            .filter_map(|p| {
                let id = p.token()?;
                Some(PermissionEntry {
                    id,
                    name: title_case_token(id),
                })
            })
            .collect()
    }

    /// Returns the wire tokens of every atomic permission contained
    /// in this set, in catalog order.
    ///
    /// # Example
    ///
    /// ```
    /// use juris_auth::Permission;
    ///
    /// let set = Permission::MANAGE_POSTS | Permission::MANAGE_MEDIA;
    /// assert_eq!(set.tokens(), vec!["manage_posts", "manage_media"]);
    /// ```
    #[must_use]
    pub fn tokens(self) -> Vec<&'static str> {
        TOKENS
            .iter()
            .filter(|(p, _)| self.contains(*p))
            .map(|(_, t)| *t)
            .collect()
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tokens = self.tokens();
        if tokens.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", tokens.join(" | "))
        }
    }
}

/// A catalog entry: wire id plus display name.
///
/// This is the shape the permissions-management UI consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionEntry {
    /// Wire token, e.g. `manage_users`.
    pub id: &'static str,
    /// Display name, e.g. `Manage Users`.
    pub name: String,
}

/// Title-cases a snake_case token: `manage_call_for_papers` →
/// `Manage Call For Papers`.
fn title_case_token(token: &str) -> String {
    token
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
