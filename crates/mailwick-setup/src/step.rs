//! Wizard step sequence.

use serde::{Deserialize, Serialize};

/// One stage of the account setup wizard, in fixed linear order. There is
/// no branching and no skipping; movement is one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SetupStep {
    /// Automatic configuration from the email address.
    #[default]
    AutoConfig,
    /// Incoming (IMAP) server configuration.
    IncomingConfig,
    /// Outgoing (SMTP) server configuration.
    OutgoingConfig,
    /// Final account options.
    Options,
}

impl SetupStep {
    /// The step after this one, or `None` at the end of the sequence.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::AutoConfig => Some(Self::IncomingConfig),
            Self::IncomingConfig => Some(Self::OutgoingConfig),
            Self::OutgoingConfig => Some(Self::Options),
            Self::Options => None,
        }
    }

    /// The step before this one, or `None` at the start of the sequence.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::AutoConfig => None,
            Self::IncomingConfig => Some(Self::AutoConfig),
            Self::OutgoingConfig => Some(Self::IncomingConfig),
            Self::Options => Some(Self::OutgoingConfig),
        }
    }

    /// Get the screen title for the step.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AutoConfig => "Set up your account",
            Self::IncomingConfig => "Incoming server",
            Self::OutgoingConfig => "Outgoing server",
            Self::Options => "Account options",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_step() {
        assert_eq!(SetupStep::default(), SetupStep::AutoConfig);
    }

    #[test]
    fn next_walks_the_sequence() {
        assert_eq!(SetupStep::AutoConfig.next(), Some(SetupStep::IncomingConfig));
        assert_eq!(SetupStep::IncomingConfig.next(), Some(SetupStep::OutgoingConfig));
        assert_eq!(SetupStep::OutgoingConfig.next(), Some(SetupStep::Options));
        assert_eq!(SetupStep::Options.next(), None);
    }

    #[test]
    fn previous_walks_the_sequence_backwards() {
        assert_eq!(SetupStep::Options.previous(), Some(SetupStep::OutgoingConfig));
        assert_eq!(SetupStep::OutgoingConfig.previous(), Some(SetupStep::IncomingConfig));
        assert_eq!(SetupStep::IncomingConfig.previous(), Some(SetupStep::AutoConfig));
        assert_eq!(SetupStep::AutoConfig.previous(), None);
    }

    #[test]
    fn next_then_previous_round_trips() {
        let mut step = SetupStep::AutoConfig;
        while let Some(next) = step.next() {
            assert_eq!(next.previous(), Some(step));
            step = next;
        }
    }

    #[test]
    fn titles() {
        assert_eq!(SetupStep::AutoConfig.title(), "Set up your account");
        assert_eq!(SetupStep::Options.title(), "Account options");
    }
}
