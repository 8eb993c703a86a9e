//! The actor directory interface.
//!
//! [`ActorDirectory`] is the boundary the rest of the platform codes
//! against: reads are open, writes take the *acting* actor so that
//! the mutation policy (permissions, deletion guards) is enforced at
//! the boundary regardless of which UI surface triggered the call.

use crate::DirectoryError;
use juris_auth::{Actor, Permission, Role};
use juris_types::UserId;
use serde::{Deserialize, Serialize};

/// Fields for creating an actor.
///
/// # Example
///
/// ```
/// use juris_auth::Role;
/// use juris_directory::NewActor;
///
/// let fields = NewActor::new("Elena Ruiz", "elena@juris.example", Role::Editor);
/// assert_eq!(fields.role, Role::Editor);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActor {
    /// Display name.
    pub name: String,
    /// Email address (must be unique in the directory).
    pub email: String,
    /// Initial role.
    pub role: Role,
    /// Initial permission overrides (defaults to none).
    #[serde(default = "Permission::empty")]
    pub overrides: Permission,
}

impl NewActor {
    /// Convenience constructor with no overrides.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            overrides: Permission::empty(),
        }
    }

    /// Sets initial permission overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Permission) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Partial update for an existing actor. `None` fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New role (requires `MANAGE_ROLES` when it differs).
    pub role: Option<Role>,
    /// Replacement override set.
    pub overrides: Option<Permission>,
}

impl ActorUpdate {
    /// An update that changes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the role.
    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Replaces the override set.
    #[must_use]
    pub fn overrides(mut self, overrides: Permission) -> Self {
        self.overrides = Some(overrides);
        self
    }
}

/// The actor directory: exclusive owner of actor records.
///
/// Implementations serialize their own mutations; callers only need
/// a consistent snapshot per read. Every write path takes the acting
/// actor and enforces the mutation policy:
///
/// - all writes require `MANAGE_USERS`
/// - role changes (and minting `SUPER_ADMIN`) require `MANAGE_ROLES`
/// - deletion honors the self-deletion and super-admin guards
pub trait ActorDirectory: Send + Sync {
    /// Returns the actor with the given id, if present.
    fn get(&self, id: UserId) -> Option<Actor>;

    /// Returns every actor, ordered by id.
    fn list(&self) -> Vec<Actor>;

    /// Creates an actor.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Unauthorized`] — `acting` lacks
    ///   `MANAGE_USERS`, or minted `SUPER_ADMIN` without `MANAGE_ROLES`
    /// - [`DirectoryError::Validation`] — empty name or malformed email
    /// - [`DirectoryError::Conflict`] — email already in use
    fn create(&self, acting: &Actor, fields: NewActor) -> Result<Actor, DirectoryError>;

    /// Applies a partial update to an actor.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Unauthorized`] — missing `MANAGE_USERS`, or
    ///   a role-related change without `MANAGE_ROLES`
    /// - [`DirectoryError::NotFound`] — no such actor
    /// - [`DirectoryError::Validation`] / [`DirectoryError::Conflict`] —
    ///   as for [`create`](Self::create)
    fn update(&self, acting: &Actor, id: UserId, update: ActorUpdate)
        -> Result<Actor, DirectoryError>;

    /// Deletes an actor.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Unauthorized`] — missing `MANAGE_USERS`,
    ///   self-deletion, or a protected super-admin target
    /// - [`DirectoryError::NotFound`] — no such actor
    fn delete(&self, acting: &Actor, id: UserId) -> Result<(), DirectoryError>;

    /// Changes an actor's role.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Unauthorized`] — `acting` lacks `MANAGE_ROLES`
    /// - [`DirectoryError::NotFound`] — no such actor
    fn set_role(&self, acting: &Actor, id: UserId, role: Role) -> Result<(), DirectoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_actor_defaults() {
        let fields = NewActor::new("Ivy Chen", "ivy@juris.example", Role::Viewer);
        assert!(fields.overrides.is_empty());

        let with = fields.clone().with_overrides(Permission::MANAGE_MEDIA);
        assert!(with.overrides.contains(Permission::MANAGE_MEDIA));
    }

    #[test]
    fn update_builder() {
        let update = ActorUpdate::empty()
            .name("New Name")
            .role(Role::Editor);
        assert_eq!(update.name.as_deref(), Some("New Name"));
        assert_eq!(update.role, Some(Role::Editor));
        assert!(update.email.is_none());
        assert!(update.overrides.is_none());
    }

    #[test]
    fn new_actor_serde_defaults_overrides() {
        let json = r#"{"name":"Ivy","email":"ivy@juris.example","role":"VIEWER"}"#;
        let parsed: NewActor = serde_json::from_str(json).expect("deserialize");
        assert!(parsed.overrides.is_empty());
    }
}
