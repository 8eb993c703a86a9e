//! Directory error types.

use juris_auth::AccessDenied;
use juris_types::{ErrorCode, UserId};
use thiserror::Error;

/// Error returned by actor directory operations.
///
/// These are the only true error conditions in the platform — the
/// authorization evaluator itself never errors. Each variant maps to
/// a message the admin UI can render directly.
///
/// # Example
///
/// ```
/// use juris_directory::DirectoryError;
/// use juris_types::{ErrorCode, UserId};
///
/// let err = DirectoryError::NotFound(UserId::seeded("ghost"));
/// assert_eq!(err.code(), "DIR_NOT_FOUND");
/// assert!(!err.is_recoverable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// No actor with the given id exists.
    #[error("actor not found: {0}")]
    NotFound(UserId),

    /// A field failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The mutation collides with an existing record.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The acting actor is not allowed to perform the mutation.
    #[error(transparent)]
    Unauthorized(#[from] AccessDenied),
}

impl ErrorCode for DirectoryError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "DIR_NOT_FOUND",
            Self::Validation(_) => "DIR_VALIDATION",
            Self::Conflict(_) => "DIR_CONFLICT",
            Self::Unauthorized(e) => e.code(),
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // The caller can fix the field or pick another email.
            Self::Validation(_) | Self::Conflict(_) => true,
            Self::NotFound(_) => false,
            Self::Unauthorized(e) => e.is_recoverable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juris_auth::Permission;
    use juris_types::assert_error_code;

    #[test]
    fn codes_follow_conventions() {
        assert_error_code(&DirectoryError::NotFound(UserId::seeded("x")), "DIR_");
        assert_error_code(&DirectoryError::Validation("email".into()), "DIR_");
        assert_error_code(&DirectoryError::Conflict("email taken".into()), "DIR_");
    }

    #[test]
    fn unauthorized_delegates_to_access_denied() {
        let err: DirectoryError = AccessDenied::MissingPermission {
            required: Permission::MANAGE_USERS,
        }
        .into();
        assert_eq!(err.code(), "AUTH_MISSING_PERMISSION");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn recoverability() {
        assert!(DirectoryError::Validation("x".into()).is_recoverable());
        assert!(DirectoryError::Conflict("x".into()).is_recoverable());
        assert!(!DirectoryError::NotFound(UserId::seeded("x")).is_recoverable());
    }

    #[test]
    fn display_messages() {
        let err = DirectoryError::Conflict("email already in use: a@b.c".into());
        assert!(err.to_string().contains("email already in use"));
    }
}
