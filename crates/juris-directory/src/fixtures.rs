//! Seeded fixture actors.
//!
//! One actor per role with deterministic ids, matching the sample
//! accounts the admin demo ships with. The viewer carries a
//! `manage_media` override to demonstrate per-actor grants on top of
//! role grants.

use juris_auth::{Actor, Permission, Role};

/// Returns the standard fixture set: one actor per role.
///
/// Ids are UUID v5 over the fixture slug, so they are stable across
/// processes — tests and demos can look actors up by
/// `UserId::seeded("editor")` etc.
///
/// # Example
///
/// ```
/// use juris_directory::fixtures;
/// use juris_types::UserId;
///
/// let actors = fixtures();
/// assert_eq!(actors.len(), 5);
/// assert!(actors.iter().any(|a| a.id == UserId::seeded("editor")));
/// ```
#[must_use]
pub fn fixtures() -> Vec<Actor> {
    vec![
        Actor::seeded(
            "super-admin",
            "Ada Marshall",
            "ada@juris.example",
            Role::SuperAdmin,
        ),
        Actor::seeded("admin", "Noah Bell", "noah@juris.example", Role::Admin),
        Actor::seeded("editor", "Elena Ruiz", "elena@juris.example", Role::Editor),
        Actor::seeded("author", "Sam Porter", "sam@juris.example", Role::Author),
        Actor::seeded("viewer", "Ivy Chen", "ivy@juris.example", Role::Viewer)
            .with_overrides(Permission::MANAGE_MEDIA),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use juris_types::UserId;

    #[test]
    fn one_actor_per_role() {
        let actors = fixtures();
        assert_eq!(actors.len(), Role::ALL.len());
        for role in Role::ALL {
            assert!(actors.iter().any(|a| a.role == role));
        }
    }

    #[test]
    fn ids_are_stable() {
        let a = fixtures();
        let b = fixtures();
        let ids_a: Vec<_> = a.iter().map(|x| x.id).collect();
        let ids_b: Vec<_> = b.iter().map(|x| x.id).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(a[0].id, UserId::seeded("super-admin"));
    }

    #[test]
    fn emails_are_unique() {
        let actors = fixtures();
        for (i, a) in actors.iter().enumerate() {
            for b in &actors[i + 1..] {
                assert_ne!(a.email, b.email);
            }
        }
    }

    #[test]
    fn viewer_carries_the_media_override() {
        let viewer = fixtures()
            .into_iter()
            .find(|a| a.role == Role::Viewer)
            .expect("viewer fixture");
        assert!(viewer.overrides.contains(Permission::MANAGE_MEDIA));
    }
}
