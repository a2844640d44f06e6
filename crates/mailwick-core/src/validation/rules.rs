//! Per-field validation rules.

use super::error::{ValidationError, ValidationResult};

/// Lowest valid port number.
pub const MIN_PORT: i64 = 0;
/// Highest valid port number.
pub const MAX_PORT: i64 = 65535;

/// Validate an account display name.
///
/// Fails with [`ValidationError::EmptyDisplayName`] when the input is
/// blank (empty or all-whitespace).
#[must_use]
pub fn validate_display_name(input: &str) -> ValidationResult {
    if input.trim().is_empty() {
        ValidationResult::Failure(ValidationError::EmptyDisplayName)
    } else {
        ValidationResult::Success
    }
}

/// Validate a server hostname.
#[must_use]
pub fn validate_server(input: &str) -> ValidationResult {
    if input.trim().is_empty() {
        ValidationResult::Failure(ValidationError::EmptyServer)
    } else {
        ValidationResult::Success
    }
}

/// Validate a login username.
#[must_use]
pub fn validate_username(input: &str) -> ValidationResult {
    if input.trim().is_empty() {
        ValidationResult::Failure(ValidationError::EmptyUsername)
    } else {
        ValidationResult::Success
    }
}

/// Validate a login password.
///
/// Passwords are not trimmed; whitespace-only passwords are accepted.
#[must_use]
pub fn validate_password(input: &str) -> ValidationResult {
    if input.is_empty() {
        ValidationResult::Failure(ValidationError::EmptyPassword)
    } else {
        ValidationResult::Success
    }
}

/// Validate a server port.
///
/// The input is the raw parsed value, so out-of-range numbers (including
/// negatives) are still representable and rejected here. `None` means the
/// field was left empty. The boundary values [`MIN_PORT`] and [`MAX_PORT`]
/// are valid.
#[must_use]
pub fn validate_port(input: Option<i64>) -> ValidationResult {
    match input {
        None => ValidationResult::Failure(ValidationError::EmptyPort),
        Some(port) if port < MIN_PORT || port > MAX_PORT => {
            ValidationResult::Failure(ValidationError::InvalidPort)
        }
        Some(_) => ValidationResult::Success,
    }
}
