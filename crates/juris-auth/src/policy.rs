//! Actor mutation policy.
//!
//! These guards used to live scattered through UI event handlers;
//! they are centralized here so every surface that mutates the actor
//! directory enforces the same rules:
//!
//! - assigning the `SUPER_ADMIN` role requires `MANAGE_ROLES`
//! - changing any actor's role requires `MANAGE_ROLES`
//! - an actor never deletes itself
//! - a `SUPER_ADMIN` target is only deletable by another super admin
//!
//! All guards are pure functions over an actor snapshot and the
//! shared [`AccessControl`]; they return `Err(AccessDenied)` with the
//! reason instead of a bare `false` so callers can surface it.

use crate::{AccessControl, AccessDenied, Actor, Permission, Role};

/// Requires `acting` to hold `permission`.
///
/// # Errors
///
/// [`AccessDenied::MissingPermission`] naming the required permission.
pub fn require_permission(
    control: &AccessControl,
    acting: &Actor,
    permission: Permission,
) -> Result<(), AccessDenied> {
    if control.has_permission(Some(acting), permission) {
        Ok(())
    } else {
        Err(AccessDenied::MissingPermission {
            required: permission,
        })
    }
}

/// Guards giving an actor the given role (on create or update).
///
/// Any role below `SUPER_ADMIN` may be assigned by whoever passed the
/// caller's own permission checks; assigning `SUPER_ADMIN` itself
/// additionally requires `MANAGE_ROLES`.
///
/// # Errors
///
/// [`AccessDenied::MissingPermission`] when `role` is
/// [`Role::SuperAdmin`] and `acting` lacks `MANAGE_ROLES`.
pub fn authorize_role_assignment(
    control: &AccessControl,
    acting: &Actor,
    role: Role,
) -> Result<(), AccessDenied> {
    if role == Role::SuperAdmin {
        require_permission(control, acting, Permission::MANAGE_ROLES)?;
    }
    Ok(())
}

/// Guards changing an existing actor's role.
///
/// # Errors
///
/// [`AccessDenied::MissingPermission`] when `acting` lacks
/// `MANAGE_ROLES`.
pub fn authorize_role_change(control: &AccessControl, acting: &Actor) -> Result<(), AccessDenied> {
    require_permission(control, acting, Permission::MANAGE_ROLES)
}

/// Guards deleting `target` as `acting`.
///
/// Two rules, checked in order:
///
/// 1. self-deletion is rejected regardless of role
/// 2. a `SUPER_ADMIN` target is only deletable by a super admin
///
/// # Errors
///
/// [`AccessDenied::SelfDeletion`] or
/// [`AccessDenied::SuperAdminProtected`].
pub fn authorize_deletion(
    control: &AccessControl,
    acting: &Actor,
    target: &Actor,
) -> Result<(), AccessDenied> {
    if target.id == acting.id {
        return Err(AccessDenied::SelfDeletion);
    }
    if target.role == Role::SuperAdmin && !control.is_super_admin(Some(acting)) {
        return Err(AccessDenied::SuperAdminProtected);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role) -> Actor {
        Actor::new("Test Actor", "test@juris.example", role)
    }

    #[test]
    fn require_permission_allows_and_denies() {
        let control = AccessControl::new();
        let admin = actor(Role::Admin);

        assert!(require_permission(&control, &admin, Permission::MANAGE_USERS).is_ok());
        assert_eq!(
            require_permission(&control, &admin, Permission::MANAGE_ROLES),
            Err(AccessDenied::MissingPermission {
                required: Permission::MANAGE_ROLES
            })
        );
    }

    #[test]
    fn super_admin_assignment_needs_manage_roles() {
        let control = AccessControl::new();

        // ADMIN lacks MANAGE_ROLES, so it cannot mint super admins.
        assert!(
            authorize_role_assignment(&control, &actor(Role::Admin), Role::SuperAdmin).is_err()
        );
        assert!(
            authorize_role_assignment(&control, &actor(Role::SuperAdmin), Role::SuperAdmin)
                .is_ok()
        );
        // Lower roles carry no extra requirement here.
        assert!(authorize_role_assignment(&control, &actor(Role::Admin), Role::Editor).is_ok());
    }

    #[test]
    fn role_change_needs_manage_roles() {
        let control = AccessControl::new();
        assert!(authorize_role_change(&control, &actor(Role::Admin)).is_err());
        assert!(authorize_role_change(&control, &actor(Role::SuperAdmin)).is_ok());

        // An override works too: the guard asks for the permission,
        // not the role.
        let trusted = actor(Role::Admin).with_overrides(Permission::MANAGE_ROLES);
        assert!(authorize_role_change(&control, &trusted).is_ok());
    }

    #[test]
    fn self_deletion_is_rejected_regardless_of_role() {
        let control = AccessControl::new();
        let su = actor(Role::SuperAdmin);
        assert_eq!(
            authorize_deletion(&control, &su, &su),
            Err(AccessDenied::SelfDeletion)
        );
        let admin = actor(Role::Admin);
        assert_eq!(
            authorize_deletion(&control, &admin, &admin),
            Err(AccessDenied::SelfDeletion)
        );
    }

    #[test]
    fn super_admin_target_needs_super_admin_actor() {
        let control = AccessControl::new();
        let target = actor(Role::SuperAdmin);

        assert_eq!(
            authorize_deletion(&control, &actor(Role::Admin), &target),
            Err(AccessDenied::SuperAdminProtected)
        );
        assert!(authorize_deletion(&control, &actor(Role::SuperAdmin), &target).is_ok());
    }

    #[test]
    fn ordinary_deletion_is_allowed() {
        let control = AccessControl::new();
        assert!(authorize_deletion(&control, &actor(Role::Admin), &actor(Role::Editor)).is_ok());
    }
}
