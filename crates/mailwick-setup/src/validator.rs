//! Per-screen composite validators.
//!
//! Each validator is a stateless façade over the single-purpose rules in
//! `mailwick-core`, one method per field, delegating unchanged. They are
//! passed to the form state holders as plain constructor parameters.

use mailwick_core::{
    ValidationResult, validate_display_name, validate_password, validate_port, validate_server,
    validate_username,
};

/// Validator for the incoming/outgoing server configuration screens.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerConfigValidator;

impl ServerConfigValidator {
    /// Validate the server hostname.
    #[must_use]
    pub fn validate_server(&self, server: &str) -> ValidationResult {
        validate_server(server)
    }

    /// Validate the server port.
    #[must_use]
    pub fn validate_port(&self, port: Option<i64>) -> ValidationResult {
        validate_port(port)
    }

    /// Validate the username.
    #[must_use]
    pub fn validate_username(&self, username: &str) -> ValidationResult {
        validate_username(username)
    }

    /// Validate the password.
    #[must_use]
    pub fn validate_password(&self, password: &str) -> ValidationResult {
        validate_password(password)
    }
}

/// Validator for the account options screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionsValidator;

impl OptionsValidator {
    /// Validate the display name.
    #[must_use]
    pub fn validate_display_name(&self, display_name: &str) -> ValidationResult {
        validate_display_name(display_name)
    }
}
