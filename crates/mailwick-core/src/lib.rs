//! # mailwick-core
//!
//! Domain logic for `Mailwick` account setup.
//!
//! This crate provides:
//! - Form input state (`InputField`) with pure transition operations
//! - Field validation rules and the shared validation vocabulary
//! - Contact photo lookup behind a narrow, fallible boundary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod contacts;
pub mod input;
pub mod validation;

pub use contacts::{Contact, ContactDirectory, ContactPhotoLoader, PhotoDecoder, PhotoError, PhotoUri};
pub use input::{InputField, PortInputField, StringInputField};
pub use validation::{
    MAX_PORT, MIN_PORT, ValidationError, ValidationResult, validate_display_name, validate_password,
    validate_port, validate_server, validate_username,
};
