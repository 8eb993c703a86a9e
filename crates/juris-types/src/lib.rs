//! Foundation types for the Juris admin platform.
//!
//! This crate sits at the bottom of the dependency graph and carries
//! only the types every other crate needs:
//!
//! ```text
//! juris-types  (UserId, ErrorCode)
//!     ↑
//! juris-auth   (Permission, Role, Actor, AccessControl)
//!     ↑
//! juris-directory  (ActorDirectory, InMemoryDirectory)
//!     ↑
//! juris-cli    (admin binary)
//! ```
//!
//! # Contents
//!
//! - [`UserId`] — UUID-based actor identifier (random v4, or
//!   deterministic v5 for seeded fixture actors)
//! - [`ErrorCode`] — unified machine-readable error code trait,
//!   implemented by every error type in the workspace

pub mod error;
pub mod id;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::UserId;
