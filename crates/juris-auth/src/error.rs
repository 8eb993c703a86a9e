//! Authorization denial errors.
//!
//! Evaluator queries ([`crate::AccessControl`]) never error — denial
//! is a normal `false`. [`AccessDenied`] exists for the *mutation
//! policy* layer, where a denial must carry a reason the admin UI can
//! show.

use crate::Permission;
use juris_types::ErrorCode;
use thiserror::Error;

/// Why a guarded mutation was refused.
///
/// # Example
///
/// ```
/// use juris_auth::{AccessDenied, Permission};
/// use juris_types::ErrorCode;
///
/// let err = AccessDenied::MissingPermission {
///     required: Permission::MANAGE_ROLES,
/// };
/// assert!(err.to_string().contains("manage_roles"));
/// assert_eq!(err.code(), "AUTH_MISSING_PERMISSION");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    /// The acting actor lacks a required permission.
    #[error("permission denied: requires {required}")]
    MissingPermission {
        /// The permission the operation requires.
        required: Permission,
    },

    /// An actor attempted to delete its own account.
    #[error("actors cannot delete their own account")]
    SelfDeletion,

    /// A non-super-admin attempted to delete a super admin.
    #[error("only a super admin can delete a super admin")]
    SuperAdminProtected,
}

impl ErrorCode for AccessDenied {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingPermission { .. } => "AUTH_MISSING_PERMISSION",
            Self::SelfDeletion => "AUTH_SELF_DELETION",
            Self::SuperAdminProtected => "AUTH_SUPER_ADMIN_PROTECTED",
        }
    }

    fn is_recoverable(&self) -> bool {
        // A denial needs a different role or actor, not a retry.
        false
    }
}
