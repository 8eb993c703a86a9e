//! Actor (user) records.

use crate::{Permission, Role};
use chrono::{DateTime, Utc};
use juris_types::UserId;
use serde::{Deserialize, Serialize};

/// An identity in the Juris admin platform.
///
/// An actor holds exactly one [`Role`] plus an optional set of
/// explicit permission *overrides*. Overrides supplement the role's
/// grants — they can only add capabilities, never remove them.
///
/// Actor records are owned by the actor directory; the authorization
/// evaluator only reads a snapshot for the duration of a single
/// check.
///
/// # Example
///
/// ```
/// use juris_auth::{AccessControl, Actor, Permission, Role};
///
/// let control = AccessControl::new();
/// let actor = Actor::new("Ivy Chen", "ivy@juris.example", Role::Viewer)
///     .with_overrides(Permission::MANAGE_MEDIA);
///
/// // Role grant
/// assert!(control.has_permission(Some(&actor), Permission::VIEW_DASHBOARD));
/// // Override on top of the role
/// assert!(control.has_permission(Some(&actor), Permission::MANAGE_MEDIA));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address (unique within the directory).
    pub email: String,
    /// The actor's single role.
    pub role: Role,
    /// Explicit permission grants on top of the role.
    #[serde(default = "Permission::empty")]
    pub overrides: Permission,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Actor {
    /// Creates an actor with a fresh random id, no overrides, and the
    /// current time as creation timestamp.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            role,
            overrides: Permission::empty(),
            created_at: Utc::now(),
        }
    }

    /// Creates an actor with a deterministic id derived from a slug.
    ///
    /// Used for seeded fixture data so demos and tests get stable ids.
    #[must_use]
    pub fn seeded(
        slug: &str,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: UserId::seeded(slug),
            name: name.into(),
            email: email.into(),
            role,
            overrides: Permission::empty(),
            created_at: Utc::now(),
        }
    }

    /// Sets explicit permission overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Permission) -> Self {
        self.overrides = overrides;
        self
    }
}
