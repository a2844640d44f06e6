//! Account options form state.

use mailwick_core::StringInputField;

use crate::validator::OptionsValidator;

/// Form state for the final account options screen.
#[derive(Debug, Clone, Default)]
pub struct OptionsState {
    /// Display name shown on outgoing mail.
    pub display_name: StringInputField,
    validator: OptionsValidator,
}

impl OptionsState {
    /// Create an empty form using the given validator.
    #[must_use]
    pub fn new(validator: OptionsValidator) -> Self {
        Self {
            validator,
            ..Self::default()
        }
    }

    /// Replace the display name value.
    pub fn update_display_name(&mut self, display_name: String) {
        self.display_name = self.display_name.update_value(display_name);
    }

    /// Validate the form. Returns whether all fields are valid.
    pub fn validate(&mut self) -> bool {
        self.display_name = self.display_name.update_from_validation_result(
            self.validator.validate_display_name(self.display_name.value()),
        );
        self.display_name.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use mailwick_core::ValidationError;

    use super::*;

    #[test]
    fn blank_display_name_is_rejected() {
        let mut form = OptionsState::new(OptionsValidator);
        form.update_display_name("   ".to_string());

        assert!(!form.validate());
        assert_eq!(
            form.display_name.error(),
            Some(ValidationError::EmptyDisplayName)
        );
    }

    #[test]
    fn display_name_is_accepted() {
        let mut form = OptionsState::new(OptionsValidator);
        form.update_display_name("Jane Doe".to_string());

        assert!(form.validate());
        assert_eq!(form.display_name.error(), None);
    }
}
