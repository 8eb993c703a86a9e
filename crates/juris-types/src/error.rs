//! Unified error interface for Juris.
//!
//! This module provides the [`ErrorCode`] trait for standardized
//! error handling across all Juris crates.
//!
//! # Design
//!
//! All Juris error types should implement [`ErrorCode`] to provide:
//!
//! - **Machine-readable codes**: For programmatic error handling in
//!   admin UI surfaces
//! - **Recoverability info**: So callers know whether a message like
//!   "fix the email and retry" makes sense
//!
//! # Example
//!
//! ```
//! use juris_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum StoreError {
//!     NotFound,
//!     DuplicateEmail,
//! }
//!
//! impl ErrorCode for StoreError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::NotFound => "STORE_NOT_FOUND",
//!             Self::DuplicateEmail => "STORE_DUPLICATE_EMAIL",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::DuplicateEmail)
//!     }
//! }
//!
//! let err = StoreError::DuplicateEmail;
//! assert_eq!(err.code(), "STORE_DUPLICATE_EMAIL");
//! assert!(err.is_recoverable());
//! ```

/// Unified error code interface for Juris errors.
///
/// # Code Format
///
/// Error codes should be:
///
/// - **UPPER_SNAKE_CASE**: e.g. `"DIR_NOT_FOUND"`, `"AUTH_MISSING_PERMISSION"`
/// - **Namespace-prefixed**: `"AUTH_"` for authorization denials,
///   `"DIR_"` for directory failures
/// - **Stable**: codes are an API contract and must not change once defined
///
/// # Recoverability
///
/// An error is recoverable when the caller (typically a form in the
/// admin UI) can take action to fix it — correct a field, pick a
/// different email. Authorization denials are not recoverable: the
/// acting user needs a different role, not a retry.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether the error is recoverable by user action.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows Juris conventions.
///
/// # Checks
///
/// 1. Code is non-empty
/// 2. Code starts with the expected prefix
/// 3. Code is UPPER_SNAKE_CASE
///
/// # Panics
///
/// Panics with a descriptive message if validation fails. Intended
/// for use in tests.
///
/// # Example
///
/// ```
/// use juris_types::{assert_error_code, ErrorCode};
///
/// #[derive(Debug)]
/// struct Denied;
///
/// impl ErrorCode for Denied {
///     fn code(&self) -> &'static str { "AUTH_DENIED" }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_code(&Denied, "AUTH_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");

    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );

    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Validates multiple error codes at once.
///
/// Use this to verify all variants of an error enum in a single test.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
