//! Actor directory for the Juris admin platform.
//!
//! Owns actor (user) records and every mutation on them. The
//! authorization evaluator in `juris-auth` only ever *reads* actor
//! snapshots; this crate is where records are created, updated and
//! deleted — with the mutation policy enforced on every write path,
//! so no UI surface can bypass it.
//!
//! # Contents
//!
//! - [`ActorDirectory`] — the interface the platform codes against
//! - [`InMemoryDirectory`] — process-local implementation (the
//!   current deployment has no database)
//! - [`NewActor`] / [`ActorUpdate`] — write payloads
//! - [`DirectoryError`] — typed failures (`NotFound`, `Validation`,
//!   `Conflict`, `Unauthorized`)
//! - [`fixtures`] — seeded demo actors, one per role

pub mod directory;
pub mod error;
pub mod fixtures;
pub mod memory;

pub use directory::{ActorDirectory, ActorUpdate, NewActor};
pub use error::DirectoryError;
pub use fixtures::fixtures;
pub use memory::InMemoryDirectory;
