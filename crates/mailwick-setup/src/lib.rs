//! # mailwick-setup
//!
//! Account setup wizard flow for `Mailwick`.
//!
//! This crate provides:
//! - The ordered wizard steps and their state
//! - Per-screen form state built on `mailwick-core` input fields
//! - Composite per-screen validators
//! - A view-model exposing a state stream and a one-shot effect stream

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod event;
pub mod model;
mod step;
mod validator;
mod view_model;

pub use event::{SetupEffect, SetupEvent};
pub use model::{OptionsState, ServerConfigState, SetupState};
pub use step::SetupStep;
pub use validator::{OptionsValidator, ServerConfigValidator};
pub use view_model::AccountSetupViewModel;
