//! Role-based access control core for the Juris admin platform.
//!
//! This crate is the single authority on "may this actor do X?" for
//! the legal-commentary journal's admin dashboard. It owns three
//! fixed catalogs and the pure evaluator over them:
//!
//! | Piece | Type | Holds |
//! |-------|------|-------|
//! | [`Permission`] | Bitflags | the 13-capability catalog |
//! | [`Role`] | Enum | the 5 closed roles and their grant sets |
//! | [`AccessControl`] | Struct | the route table + evaluation functions |
//!
//! # Crate Architecture
//!
//! ```text
//! juris-types   (UserId, ErrorCode)
//!     ↑
//! juris-auth    ◄── THIS CRATE
//! (Permission, Role, Actor, AccessControl, mutation policy)
//!     ↑
//! juris-directory  (ActorDirectory — enforces the policy on writes)
//!     ↑
//! juris-cli
//! ```
//!
//! # Design Principles
//!
//! - **Closed catalogs** — permissions and roles are compile-time
//!   enumerations; a typo'd token is a compile error, not a silently
//!   unreachable permission.
//! - **Super admin by construction** — [`Role::SuperAdmin`] grants
//!   [`Permission::all()`], computed, so the full-catalog invariant
//!   survives catalog growth without edits.
//! - **Total evaluation** — evaluator functions never panic and never
//!   error; missing actors and unknown tokens degrade to deny. The
//!   single documented fail-open exception is unmapped routes.
//! - **Policy next to the evaluator** — the self-deletion and
//!   super-admin-deletion guards live here, not in UI handlers, so
//!   every surface enforces them identically.

pub mod access;
pub mod actor;
pub mod error;
pub mod permission;
pub mod policy;
pub mod role;
pub mod routes;

pub use access::AccessControl;
pub use actor::Actor;
pub use error::AccessDenied;
pub use permission::{Permission, PermissionEntry};
pub use policy::{
    authorize_deletion, authorize_role_assignment, authorize_role_change, require_permission,
};
pub use role::{Role, UnknownRole};
pub use routes::{admin_routes, RoutePermission};
