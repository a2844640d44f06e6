//! Validation vocabulary shared by all setup form fields.

use serde::{Deserialize, Serialize};

/// Validation error for a setup form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Display name is empty.
    EmptyDisplayName,
    /// Server hostname is empty.
    EmptyServer,
    /// Port is missing.
    EmptyPort,
    /// Port is outside the valid range.
    InvalidPort,
    /// Username is empty.
    EmptyUsername,
    /// Password is empty.
    EmptyPassword,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyDisplayName => "Display name is required",
            Self::EmptyServer => "Server is required",
            Self::EmptyPort => "Port is required",
            Self::InvalidPort => "Port must be 0-65535",
            Self::EmptyUsername => "Username is required",
            Self::EmptyPassword => "Password is required",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyDisplayName => "display_name",
            Self::EmptyServer => "server",
            Self::EmptyPort | Self::InvalidPort => "port",
            Self::EmptyUsername => "username",
            Self::EmptyPassword => "password",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of running one validation rule over one field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    /// The value passed validation.
    Success,
    /// The value failed validation for the given reason.
    Failure(ValidationError),
}

impl ValidationResult {
    /// Returns true if the value passed validation.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the failure reason, if any.
    #[must_use]
    pub const fn error(&self) -> Option<ValidationError> {
        match self {
            Self::Success => None,
            Self::Failure(error) => Some(*error),
        }
    }
}
