//! The authorization evaluator.
//!
//! [`AccessControl`] answers every "may this actor do X?" question in
//! the platform. It is a read-only value constructed once at startup:
//! the route table is injected at construction (defaulting to the
//! standard admin table), role grants come from [`Role::grants`], and
//! nothing is ever mutated afterwards. Evaluation is pure and
//! synchronous — no I/O, no locking, no caching — so concurrent
//! callers can share one instance freely.
//!
//! # Evaluation order
//!
//! ```text
//! has_permission(actor, p):
//!     1. no actor           → deny
//!     2. role == SuperAdmin → allow        (checked first: a super
//!                                           admin is never blocked,
//!                                           even by a misconfigured
//!                                           role table)
//!     3. p ∈ overrides      → allow
//!     4. p ∈ role grants    → allow
//!     5. otherwise          → deny
//! ```
//!
//! Every function is total: malformed or missing input degrades to
//! "deny", never to an error. The one deliberate exception to the
//! fail-closed posture is route evaluation — a route with no entry in
//! the table is open to any actor (fail-open), a documented product
//! decision pinned by tests below.

use crate::{admin_routes, Actor, Permission, PermissionEntry, Role, RoutePermission};
use std::collections::BTreeMap;

/// The read-only authorization evaluator.
///
/// # Example
///
/// ```
/// use juris_auth::{AccessControl, Actor, Permission, Role};
///
/// let control = AccessControl::new();
/// let editor = Actor::new("Elena Ruiz", "elena@juris.example", Role::Editor);
///
/// assert!(control.has_permission(Some(&editor), Permission::MANAGE_POSTS));
/// assert!(!control.has_permission(Some(&editor), Permission::MANAGE_USERS));
/// assert!(!control.has_route_permission(Some(&editor), "/admin/roles"));
///
/// // No actor: every permission check denies.
/// assert!(!control.has_permission(None, Permission::VIEW_DASHBOARD));
/// ```
#[derive(Debug, Clone)]
pub struct AccessControl {
    routes: BTreeMap<String, Permission>,
}

impl AccessControl {
    /// Creates an evaluator with the standard admin route table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: admin_routes(),
        }
    }

    /// Creates an evaluator with a caller-supplied route table.
    ///
    /// Lets tests and alternate deployments substitute their own map
    /// without touching global state.
    ///
    /// # Example
    ///
    /// ```
    /// use juris_auth::{AccessControl, Permission};
    /// use std::collections::BTreeMap;
    ///
    /// let mut routes = BTreeMap::new();
    /// routes.insert("/admin/archive".to_string(), Permission::MANAGE_JOURNALS);
    /// let control = AccessControl::with_routes(routes);
    /// assert_eq!(
    ///     control.required_permission("/admin/archive"),
    ///     Some(Permission::MANAGE_JOURNALS)
    /// );
    /// ```
    #[must_use]
    pub fn with_routes(routes: BTreeMap<String, Permission>) -> Self {
        Self { routes }
    }

    /// Returns the permission a route requires, or `None` for
    /// unmapped routes.
    #[must_use]
    pub fn required_permission(&self, route: &str) -> Option<Permission> {
        self.routes.get(route).copied()
    }

    /// Checks whether an actor holds a permission.
    ///
    /// Super admins pass unconditionally. Otherwise the actor's
    /// explicit overrides are consulted, then the role's grant set.
    /// `None` (no authenticated actor) always denies.
    #[must_use]
    pub fn has_permission(&self, actor: Option<&Actor>, permission: Permission) -> bool {
        let Some(actor) = actor else {
            return false;
        };
        if actor.role == Role::SuperAdmin {
            return true;
        }
        if actor.overrides.contains(permission) {
            return true;
        }
        actor.role.grants().contains(permission)
    }

    /// Checks whether an actor may access a route.
    ///
    /// A route with no entry in the table is accessible to any actor,
    /// authenticated or not (fail-open). Mapped routes delegate to
    /// [`has_permission`](Self::has_permission).
    #[must_use]
    pub fn has_route_permission(&self, actor: Option<&Actor>, route: &str) -> bool {
        match self.required_permission(route) {
            Some(required) => self.has_permission(actor, required),
            None => true,
        }
    }

    /// Checks whether an actor holds *at least one* permission from a set.
    ///
    /// An empty set yields `false` for every actor.
    #[must_use]
    pub fn has_any_permission(&self, actor: Option<&Actor>, permissions: Permission) -> bool {
        permissions
            .iter()
            .any(|p| self.has_permission(actor, p))
    }

    /// Checks whether an actor holds *every* permission in a set.
    ///
    /// An empty set yields `true` for every actor — vacuous truth,
    /// preserved deliberately.
    #[must_use]
    pub fn has_all_permissions(&self, actor: Option<&Actor>, permissions: Permission) -> bool {
        permissions
            .iter()
            .all(|p| self.has_permission(actor, p))
    }

    /// Returns `true` iff the actor's role is [`Role::SuperAdmin`].
    ///
    /// `None` yields `false`, not an error.
    #[must_use]
    pub fn is_super_admin(&self, actor: Option<&Actor>) -> bool {
        actor.is_some_and(|a| a.role == Role::SuperAdmin)
    }

    /// Lists every mapped route with its required permission token
    /// and derived description, for the permissions-management UI.
    ///
    /// # Example
    ///
    /// ```
    /// use juris_auth::AccessControl;
    ///
    /// let control = AccessControl::new();
    /// let listing = control.route_permissions();
    /// let cfp = listing
    ///     .iter()
    ///     .find(|r| r.route == "/admin/call-for-papers")
    ///     .expect("mapped route");
    /// assert_eq!(cfp.permission, "manage_call_for_papers");
    /// assert_eq!(cfp.description, "Manage Call For Papers");
    /// ```
    #[must_use]
    pub fn route_permissions(&self) -> Vec<RoutePermission> {
        self.routes
            .iter()
            .filter_map(|(route, permission)| {
                let token = permission.token()?;
                Some(RoutePermission {
                    route: route.clone(),
                    permission: token,
                    description: permission.label()?,
                })
            })
            .collect()
    }

    /// Lists the permission catalog as `{id, name}` entries.
    #[must_use]
    pub fn permissions(&self) -> Vec<PermissionEntry> {
        Permission::entries()
    }
}

impl Default for AccessControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role) -> Actor {
        Actor::new("Test Actor", "test@juris.example", role)
    }

    #[test]
    fn super_admin_has_every_catalog_permission() {
        let control = AccessControl::new();
        let su = actor(Role::SuperAdmin);
        for p in Permission::CATALOG {
            assert!(control.has_permission(Some(&su), p), "denied {p}");
        }
    }

    #[test]
    fn role_grants_are_honored() {
        let control = AccessControl::new();
        for role in Role::ALL {
            let a = actor(role);
            for p in Permission::CATALOG {
                let expected = role == Role::SuperAdmin || role.grants().contains(p);
                assert_eq!(
                    control.has_permission(Some(&a), p),
                    expected,
                    "{role} / {p}"
                );
            }
        }
    }

    #[test]
    fn editor_scenario() {
        let control = AccessControl::new();
        let editor = actor(Role::Editor);
        assert!(!control.has_permission(Some(&editor), Permission::MANAGE_USERS));
        assert!(control.has_permission(Some(&editor), Permission::MANAGE_POSTS));
    }

    #[test]
    fn overrides_supplement_role_grants() {
        let control = AccessControl::new();
        let viewer = actor(Role::Viewer).with_overrides(Permission::MANAGE_MEDIA);
        assert!(!Role::Viewer.grants().contains(Permission::MANAGE_MEDIA));
        assert!(control.has_permission(Some(&viewer), Permission::MANAGE_MEDIA));
        // Overrides add, they never remove role grants.
        assert!(control.has_permission(Some(&viewer), Permission::VIEW_DASHBOARD));
    }

    #[test]
    fn absent_actor_is_denied_everything() {
        let control = AccessControl::new();
        for p in Permission::CATALOG {
            assert!(!control.has_permission(None, p));
        }
        assert!(!control.is_super_admin(None));
    }

    #[test]
    fn mapped_route_requires_its_permission() {
        let control = AccessControl::new();
        // ADMIN lacks manage_roles; SUPER_ADMIN passes everywhere.
        assert!(!control.has_route_permission(Some(&actor(Role::Admin)), "/admin/roles"));
        assert!(control.has_route_permission(Some(&actor(Role::SuperAdmin)), "/admin/roles"));
    }

    #[test]
    fn unmapped_route_is_fail_open() {
        let control = AccessControl::new();
        // Deliberate policy: unmapped routes admit anyone, even anonymous.
        assert!(control.has_route_permission(None, "/admin/uncharted"));
        assert!(control.has_route_permission(Some(&actor(Role::Viewer)), "/admin/uncharted"));
    }

    #[test]
    fn injected_route_table_replaces_the_default() {
        let mut routes = BTreeMap::new();
        routes.insert("/admin/archive".to_string(), Permission::MANAGE_JOURNALS);
        let control = AccessControl::with_routes(routes);

        let editor = actor(Role::Editor);
        assert!(control.has_route_permission(Some(&editor), "/admin/archive"));
        // The default table's entries are gone: fail-open applies.
        assert!(control.has_route_permission(None, "/admin/roles"));
    }

    #[test]
    fn has_any_permission_semantics() {
        let control = AccessControl::new();
        let author = actor(Role::Author);

        assert!(control.has_any_permission(
            Some(&author),
            Permission::MANAGE_POSTS | Permission::MANAGE_USERS
        ));
        assert!(!control.has_any_permission(
            Some(&author),
            Permission::MANAGE_USERS | Permission::MANAGE_ROLES
        ));
        // Empty set: false for everyone, including super admins and None.
        assert!(!control.has_any_permission(Some(&actor(Role::SuperAdmin)), Permission::empty()));
        assert!(!control.has_any_permission(None, Permission::empty()));
    }

    #[test]
    fn has_all_permissions_semantics() {
        let control = AccessControl::new();
        let editor = actor(Role::Editor);

        assert!(control.has_all_permissions(
            Some(&editor),
            Permission::MANAGE_POSTS | Permission::MANAGE_AUTHORS
        ));
        assert!(!control.has_all_permissions(
            Some(&editor),
            Permission::MANAGE_POSTS | Permission::MANAGE_USERS
        ));
        // Empty set: vacuously true for everyone, including None.
        assert!(control.has_all_permissions(Some(&editor), Permission::empty()));
        assert!(control.has_all_permissions(None, Permission::empty()));
    }

    #[test]
    fn is_super_admin_checks_the_role_only() {
        let control = AccessControl::new();
        assert!(control.is_super_admin(Some(&actor(Role::SuperAdmin))));
        // Holding every permission as overrides is not the same thing.
        let loaded = actor(Role::Admin).with_overrides(Permission::all());
        assert!(!control.is_super_admin(Some(&loaded)));
    }

    #[test]
    fn route_permissions_listing() {
        let control = AccessControl::new();
        let listing = control.route_permissions();
        assert_eq!(listing.len(), 13);

        let roles = listing
            .iter()
            .find(|r| r.route == "/admin/roles")
            .expect("mapped route");
        assert_eq!(roles.permission, "manage_roles");
        assert_eq!(roles.description, "Manage Roles");

        let cfp = listing
            .iter()
            .find(|r| r.route == "/admin/call-for-papers")
            .expect("mapped route");
        assert_eq!(cfp.description, "Manage Call For Papers");
    }

    #[test]
    fn permissions_listing_matches_catalog() {
        let control = AccessControl::new();
        let entries = control.permissions();
        assert_eq!(entries.len(), Permission::CATALOG.len());
        assert!(entries.iter().any(|e| e.id == "manage_board_advisors"
            && e.name == "Manage Board Advisors"));
    }

    #[test]
    fn evaluation_never_mutates_the_actor() {
        let control = AccessControl::new();
        let before = actor(Role::Viewer).with_overrides(Permission::MANAGE_MEDIA);
        let after = before.clone();
        let _ = control.has_permission(Some(&before), Permission::MANAGE_USERS);
        let _ = control.has_all_permissions(Some(&before), Permission::all());
        assert_eq!(before, after);
    }
}
