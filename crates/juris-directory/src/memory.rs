//! In-memory actor directory.
//!
//! The original deployment has no database; records live in process
//! memory behind a [`parking_lot::RwLock`]. The store serializes its
//! own mutations; the lock is held only for the duration of a single
//! operation and the acting actor is always an owned snapshot, so
//! there is no re-entrancy.

use crate::{ActorDirectory, ActorUpdate, DirectoryError, NewActor};
use juris_auth::{
    authorize_deletion, authorize_role_assignment, authorize_role_change, require_permission,
    AccessControl, Actor, Permission, Role,
};
use juris_types::UserId;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Process-local [`ActorDirectory`] implementation.
///
/// # Example
///
/// ```
/// use juris_auth::Role;
/// use juris_directory::{ActorDirectory, InMemoryDirectory, NewActor};
///
/// let dir = InMemoryDirectory::seeded();
/// let admin = dir
///     .list()
///     .into_iter()
///     .find(|a| a.role == Role::SuperAdmin)
///     .expect("seeded super admin");
///
/// let created = dir
///     .create(&admin, NewActor::new("New Editor", "new@juris.example", Role::Editor))
///     .expect("super admin may create users");
/// assert_eq!(dir.get(created.id), Some(created));
/// ```
#[derive(Debug)]
pub struct InMemoryDirectory {
    control: AccessControl,
    actors: RwLock<BTreeMap<UserId, Actor>>,
}

impl InMemoryDirectory {
    /// Creates an empty directory evaluating against `control`.
    #[must_use]
    pub fn new(control: AccessControl) -> Self {
        Self {
            control,
            actors: RwLock::new(BTreeMap::new()),
        }
    }

    /// Creates a directory pre-populated with the given actors.
    ///
    /// Seeding bypasses the mutation policy: it models records that
    /// already exist at process start, not an administrative action.
    #[must_use]
    pub fn with_actors(control: AccessControl, actors: impl IntoIterator<Item = Actor>) -> Self {
        let map = actors.into_iter().map(|a| (a.id, a)).collect();
        Self {
            control,
            actors: RwLock::new(map),
        }
    }

    /// Creates a directory with the standard admin table and the
    /// seeded fixture actors (one per role).
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_actors(AccessControl::new(), crate::fixtures())
    }

    /// Returns the evaluator this directory enforces policy with.
    #[must_use]
    pub fn control(&self) -> &AccessControl {
        &self.control
    }

    fn validate_name(name: &str) -> Result<(), DirectoryError> {
        if name.trim().is_empty() {
            return Err(DirectoryError::Validation("name must not be empty".into()));
        }
        Ok(())
    }

    fn validate_email(email: &str) -> Result<(), DirectoryError> {
        let valid = email.contains('@')
            && !email.starts_with('@')
            && !email.ends_with('@')
            && !email.chars().any(char::is_whitespace);
        if valid {
            Ok(())
        } else {
            Err(DirectoryError::Validation(format!(
                "invalid email address: {email}"
            )))
        }
    }

    /// Case-insensitive email uniqueness check, optionally excluding
    /// one record (the one being updated).
    fn email_in_use(map: &BTreeMap<UserId, Actor>, email: &str, exclude: Option<UserId>) -> bool {
        map.values()
            .any(|a| Some(a.id) != exclude && a.email.eq_ignore_ascii_case(email))
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new(AccessControl::new())
    }
}

impl ActorDirectory for InMemoryDirectory {
    fn get(&self, id: UserId) -> Option<Actor> {
        self.actors.read().get(&id).cloned()
    }

    fn list(&self) -> Vec<Actor> {
        self.actors.read().values().cloned().collect()
    }

    fn create(&self, acting: &Actor, fields: NewActor) -> Result<Actor, DirectoryError> {
        require_permission(&self.control, acting, Permission::MANAGE_USERS)?;
        authorize_role_assignment(&self.control, acting, fields.role)?;
        Self::validate_name(&fields.name)?;
        Self::validate_email(&fields.email)?;

        let mut actors = self.actors.write();
        if Self::email_in_use(&actors, &fields.email, None) {
            return Err(DirectoryError::Conflict(format!(
                "email already in use: {}",
                fields.email
            )));
        }

        let actor = Actor::new(fields.name, fields.email, fields.role)
            .with_overrides(fields.overrides);
        info!(id = %actor.id, role = %actor.role, by = %acting.id, "actor created");
        actors.insert(actor.id, actor.clone());
        Ok(actor)
    }

    fn update(
        &self,
        acting: &Actor,
        id: UserId,
        update: ActorUpdate,
    ) -> Result<Actor, DirectoryError> {
        require_permission(&self.control, acting, Permission::MANAGE_USERS)?;

        let mut actors = self.actors.write();
        let current = actors.get(&id).ok_or(DirectoryError::NotFound(id))?.clone();

        // Touching a super admin's record is role administration.
        if current.role == Role::SuperAdmin {
            require_permission(&self.control, acting, Permission::MANAGE_ROLES)?;
        }
        if update.role.is_some_and(|r| r != current.role) {
            authorize_role_change(&self.control, acting)?;
        }

        if let Some(name) = &update.name {
            Self::validate_name(name)?;
        }
        if let Some(email) = &update.email {
            Self::validate_email(email)?;
            if Self::email_in_use(&actors, email, Some(id)) {
                return Err(DirectoryError::Conflict(format!(
                    "email already in use: {email}"
                )));
            }
        }

        let mut updated = current;
        if let Some(name) = update.name {
            updated.name = name;
        }
        if let Some(email) = update.email {
            updated.email = email;
        }
        if let Some(role) = update.role {
            updated.role = role;
        }
        if let Some(overrides) = update.overrides {
            updated.overrides = overrides;
        }

        debug!(id = %updated.id, by = %acting.id, "actor updated");
        actors.insert(id, updated.clone());
        Ok(updated)
    }

    fn delete(&self, acting: &Actor, id: UserId) -> Result<(), DirectoryError> {
        require_permission(&self.control, acting, Permission::MANAGE_USERS)?;

        let mut actors = self.actors.write();
        let target = actors.get(&id).ok_or(DirectoryError::NotFound(id))?.clone();
        authorize_deletion(&self.control, acting, &target)?;

        actors.remove(&id);
        info!(id = %id, role = %target.role, by = %acting.id, "actor deleted");
        Ok(())
    }

    fn set_role(&self, acting: &Actor, id: UserId, role: Role) -> Result<(), DirectoryError> {
        require_permission(&self.control, acting, Permission::MANAGE_USERS)?;
        authorize_role_change(&self.control, acting)?;

        let mut actors = self.actors.write();
        let actor = actors.get_mut(&id).ok_or(DirectoryError::NotFound(id))?;
        info!(id = %id, from = %actor.role, to = %role, by = %acting.id, "role changed");
        actor.role = role;
        Ok(())
    }
}
