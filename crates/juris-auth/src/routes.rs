//! The route permission map.
//!
//! Associates administrative page routes with the single permission
//! required to reach them. A route can require at most one
//! permission; routes absent from the map are implicitly open to any
//! authenticated actor (see [`crate::AccessControl::has_route_permission`]
//! for the fail-open rule).

use crate::Permission;
use serde::Serialize;
use std::collections::BTreeMap;

/// Returns the standard admin route table.
///
/// One entry per admin page, each requiring exactly one permission.
/// This is the default table [`crate::AccessControl::new`] is built
/// with; tests and alternate deployments can supply their own map via
/// [`crate::AccessControl::with_routes`].
///
/// # Example
///
/// ```
/// use juris_auth::{admin_routes, Permission};
///
/// let routes = admin_routes();
/// assert_eq!(routes.get("/admin/roles"), Some(&Permission::MANAGE_ROLES));
/// assert_eq!(routes.len(), 13);
/// ```
#[must_use]
pub fn admin_routes() -> BTreeMap<String, Permission> {
    [
        ("/admin", Permission::VIEW_DASHBOARD),
        ("/admin/posts", Permission::MANAGE_POSTS),
        ("/admin/authors", Permission::MANAGE_AUTHORS),
        ("/admin/journals", Permission::MANAGE_JOURNALS),
        ("/admin/journal-articles", Permission::MANAGE_ARTICLES),
        ("/admin/call-for-papers", Permission::MANAGE_CALL_FOR_PAPERS),
        ("/admin/notifications", Permission::MANAGE_NOTIFICATIONS),
        ("/admin/media", Permission::MANAGE_MEDIA),
        ("/admin/editorial-board", Permission::MANAGE_EDITORIAL_BOARD),
        ("/admin/board-advisors", Permission::MANAGE_BOARD_ADVISORS),
        ("/admin/users", Permission::MANAGE_USERS),
        ("/admin/roles", Permission::MANAGE_ROLES),
        ("/admin/permissions", Permission::MANAGE_PERMISSIONS),
    ]
    .into_iter()
    .map(|(route, permission)| (route.to_string(), permission))
    .collect()
}

/// One row of the route-permission listing.
///
/// The `permission` field carries the wire token (`manage_roles`) and
/// `description` the mechanically derived display label
/// (`Manage Roles`), which is what the admin UI renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePermission {
    /// The admin route path.
    pub route: String,
    /// Wire token of the required permission.
    pub permission: &'static str,
    /// Display label derived from the permission token.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_covers_every_admin_page() {
        let routes = admin_routes();
        assert_eq!(routes.len(), 13);
        assert_eq!(routes.get("/admin"), Some(&Permission::VIEW_DASHBOARD));
        assert_eq!(
            routes.get("/admin/call-for-papers"),
            Some(&Permission::MANAGE_CALL_FOR_PAPERS)
        );
        assert_eq!(
            routes.get("/admin/permissions"),
            Some(&Permission::MANAGE_PERMISSIONS)
        );
    }

    #[test]
    fn every_mapped_permission_is_atomic() {
        for (route, permission) in admin_routes() {
            assert!(
                permission.token().is_some(),
                "route {route} maps to a non-atomic permission"
            );
        }
    }

    #[test]
    fn unmapped_routes_are_absent() {
        let routes = admin_routes();
        assert!(!routes.contains_key("/admin/settings"));
        assert!(!routes.contains_key("/blogs"));
    }
}
