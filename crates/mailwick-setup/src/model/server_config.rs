//! Server configuration form state.

use mailwick_core::{PortInputField, StringInputField};

use crate::validator::ServerConfigValidator;

/// Form state for a server configuration screen. The same shape serves
/// the incoming (IMAP) and outgoing (SMTP) steps.
///
/// Each edit routes through `InputField::update_value`, so editing a
/// field always clears its previous validation outcome until
/// [`validate`](Self::validate) runs again.
#[derive(Debug, Clone, Default)]
pub struct ServerConfigState {
    /// Server hostname field.
    pub server: StringInputField,
    /// Server port field. `None` while empty or unparseable.
    pub port: PortInputField,
    /// Username field.
    pub username: StringInputField,
    /// Password field.
    pub password: StringInputField,
    validator: ServerConfigValidator,
}

impl ServerConfigState {
    /// Create an empty form using the given validator.
    #[must_use]
    pub fn new(validator: ServerConfigValidator) -> Self {
        Self {
            validator,
            ..Self::default()
        }
    }

    /// Replace the server value.
    pub fn update_server(&mut self, server: String) {
        self.server = self.server.update_value(server);
    }

    /// Replace the port value.
    pub fn update_port(&mut self, port: Option<i64>) {
        self.port = self.port.update_value(port);
    }

    /// Replace the username value.
    pub fn update_username(&mut self, username: String) {
        self.username = self.username.update_value(username);
    }

    /// Replace the password value.
    pub fn update_password(&mut self, password: String) {
        self.password = self.password.update_value(password);
    }

    /// Run every field through the validator, folding each outcome into
    /// the field. Returns whether all fields are valid.
    pub fn validate(&mut self) -> bool {
        self.server = self
            .server
            .update_from_validation_result(self.validator.validate_server(self.server.value()));
        self.port = self
            .port
            .update_from_validation_result(self.validator.validate_port(*self.port.value()));
        self.username = self
            .username
            .update_from_validation_result(self.validator.validate_username(self.username.value()));
        self.password = self
            .password
            .update_from_validation_result(self.validator.validate_password(self.password.value()));

        self.server.is_valid()
            && self.port.is_valid()
            && self.username.is_valid()
            && self.password.is_valid()
    }
}
