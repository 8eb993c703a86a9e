//! Identifier types for Juris.
//!
//! All identifiers are UUID-based so that records survive export,
//! import and future moves to a real database without renumbering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::{uuid, Uuid};

/// Juris namespace UUID for deterministic UUID v5 generation.
///
/// Used as the namespace when deriving stable UUIDs for seeded
/// fixture actors via UUID v5 (SHA-1 based).
const JURIS_NAMESPACE: Uuid = uuid!("6b1fbe14-8c2a-4d73-9f05-2c6e4a90d1b7");

/// Identifier for an actor (user) in the Juris admin platform.
///
/// # UUID Strategy
///
/// - **Regular actors**: UUID v4 (random), via [`new`](Self::new)
/// - **Seeded fixture actors**: UUID v5 (deterministic from a slug),
///   via [`seeded`](Self::seeded)
///
/// Deterministic fixture ids make demo data and tests reproducible
/// across processes and machines.
///
/// # Example
///
/// ```
/// use juris_types::UserId;
///
/// // Random: every call is a fresh identity
/// let a = UserId::new();
/// let b = UserId::new();
/// assert_ne!(a, b);
///
/// // Seeded: same slug always produces the same id
/// let s1 = UserId::seeded("editor");
/// let s2 = UserId::seeded("editor");
/// assert_eq!(s1, s2);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new [`UserId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a deterministic [`UserId`] derived from a slug.
    ///
    /// The UUID is computed as v5 over the Juris namespace, so the
    /// same slug yields the same id everywhere.
    ///
    /// # Example
    ///
    /// ```
    /// use juris_types::UserId;
    ///
    /// let admin = UserId::seeded("admin");
    /// let viewer = UserId::seeded("viewer");
    /// assert_ne!(admin, viewer);
    /// assert_eq!(admin, UserId::seeded("admin"));
    /// ```
    #[must_use]
    pub fn seeded(slug: &str) -> Self {
        Self(Uuid::new_v5(&JURIS_NAMESPACE, slug.as_bytes()))
    }

    /// Returns the underlying UUID.
    ///
    /// # Example
    ///
    /// ```
    /// use juris_types::UserId;
    ///
    /// // Seeded ids are UUID v5, random ids are UUID v4.
    /// assert_eq!(UserId::seeded("admin").as_uuid().get_version_num(), 5);
    /// assert_eq!(UserId::new().as_uuid().get_version_num(), 4);
    /// ```
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
