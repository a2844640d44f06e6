//! Generic validated input field.

use crate::validation::{ValidationError, ValidationResult};

/// A text-valued input field.
pub type StringInputField = InputField<String>;

/// A numeric input field whose value may be absent (e.g. a port box left
/// empty, or containing something that did not parse).
pub type PortInputField = InputField<Option<i64>>;

/// Immutable state of one user-editable form field: the current value,
/// the validation error if one is recorded, and whether the value has
/// passed validation.
///
/// Fields are private so the invariant `is_valid == true` implies
/// `error == None` cannot be violated from outside; every state change
/// goes through one of the transition operations, each of which returns
/// a new instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField<T> {
    value: T,
    error: Option<ValidationError>,
    is_valid: bool,
}

impl<T> InputField<T> {
    /// Create a field with the given initial value, no error, and
    /// validity unset.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            error: None,
            is_valid: false,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Recorded validation error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Whether the current value has passed validation.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }
}

impl<T: Clone> InputField<T> {
    /// Replace the value.
    ///
    /// Any edit invalidates prior validation, so the error is cleared and
    /// validity reset unconditionally, even when the new value equals the
    /// old one.
    #[must_use]
    pub fn update_value(&self, value: T) -> Self {
        Self {
            value,
            error: None,
            is_valid: false,
        }
    }

    /// Record a validation error. The value is unchanged.
    #[must_use]
    pub fn update_error(&self, error: ValidationError) -> Self {
        Self {
            value: self.value.clone(),
            error: Some(error),
            is_valid: false,
        }
    }

    /// Set the validity flag.
    ///
    /// Marking valid clears the error; marking invalid leaves a
    /// previously recorded error in place.
    #[must_use]
    pub fn update_validity(&self, is_valid: bool) -> Self {
        Self {
            value: self.value.clone(),
            error: if is_valid { None } else { self.error },
            is_valid,
        }
    }

    /// Fold a validation outcome into the field.
    ///
    /// `Success` marks the field valid; `Failure` records the error.
    #[must_use]
    pub fn update_from_validation_result(&self, result: ValidationResult) -> Self {
        match result {
            ValidationResult::Success => self.update_validity(true),
            ValidationResult::Failure(error) => self.update_error(error),
        }
    }
}

impl<T: Default> Default for InputField<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
