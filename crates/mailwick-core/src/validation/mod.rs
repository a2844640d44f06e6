//! Field validation.
//!
//! Every rule is a total pure function from a raw field value to a
//! [`ValidationResult`]; failures are ordinary data, never panics or
//! thrown errors.

mod error;
mod rules;

pub use error::{ValidationError, ValidationResult};
pub use rules::{
    MAX_PORT, MIN_PORT, validate_display_name, validate_password, validate_port, validate_server,
    validate_username,
};
