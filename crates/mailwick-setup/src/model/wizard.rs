//! Wizard state.

use serde::{Deserialize, Serialize};

use crate::step::SetupStep;

/// Snapshot of the wizard: which step is currently shown.
///
/// Replaced wholesale on every transition; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetupState {
    /// The step currently shown.
    pub step: SetupStep,
}

impl SetupState {
    /// Create a state at the given step.
    #[must_use]
    pub const fn new(step: SetupStep) -> Self {
        Self { step }
    }
}
