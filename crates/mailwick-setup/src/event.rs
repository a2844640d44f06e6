//! Event and effect types for the setup flow.
//!
//! Events flow into the view-model; effects are one-shot instructions
//! that flow back out to the UI layer and are never part of state.

/// User events the setup wizard responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupEvent {
    /// Advance to the next step.
    OnNext,
    /// Return to the previous step.
    OnBack,
}

/// One-shot navigation instructions emitted at the sequence boundaries.
///
/// Emitted at most once per qualifying event and never replayed; a
/// subscriber that misses one does not see it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupEffect {
    /// Leave the wizard backwards (back pressed on the first step).
    NavigateBack,
    /// Leave the wizard forwards (next pressed on the last step).
    NavigateNext,
}
