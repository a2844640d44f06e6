//! Setup wizard view-model.

use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::event::{SetupEffect, SetupEvent};
use crate::model::SetupState;

/// Event processor for the setup wizard.
///
/// State is published as a sequence of immutable snapshots over a watch
/// channel: a subscriber joins at the current snapshot and then observes
/// every later one. Effects travel on a separate channel with at-most-once
/// delivery, ordered with respect to state changes; they are never part of
/// state and never replayed.
///
/// Events are dispatched through `&mut self`, so each one is processed to
/// completion before the next is accepted.
pub struct AccountSetupViewModel {
    state_tx: watch::Sender<SetupState>,
    effect_tx: mpsc::UnboundedSender<SetupEffect>,
    effect_rx: Option<mpsc::UnboundedReceiver<SetupEffect>>,
}

impl AccountSetupViewModel {
    /// Create a view-model starting at the first wizard step.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial_state(SetupState::default())
    }

    /// Create a view-model starting from the given state.
    #[must_use]
    pub fn with_initial_state(initial: SetupState) -> Self {
        let (state_tx, _) = watch::channel(initial);
        let (effect_tx, effect_rx) = mpsc::unbounded_channel();
        Self {
            state_tx,
            effect_tx,
            effect_rx: Some(effect_rx),
        }
    }

    /// Subscribe to state snapshots.
    ///
    /// The receiver starts at the current snapshot and then sees a suffix
    /// of the state sequence.
    #[must_use]
    pub fn state(&self) -> watch::Receiver<SetupState> {
        self.state_tx.subscribe()
    }

    /// Current state snapshot.
    #[must_use]
    pub fn current_state(&self) -> SetupState {
        *self.state_tx.borrow()
    }

    /// Take the effect stream.
    ///
    /// There is exactly one; subsequent calls return `None`. Effects
    /// emitted before this is called are buffered in order.
    #[must_use]
    pub fn effects(&mut self) -> Option<mpsc::UnboundedReceiver<SetupEffect>> {
        self.effect_rx.take()
    }

    /// Process one event to completion.
    ///
    /// At a sequence boundary the state is left unchanged and a single
    /// navigation effect is emitted instead.
    pub fn event(&mut self, event: SetupEvent) {
        let step = self.state_tx.borrow().step;
        match event {
            SetupEvent::OnNext => match step.next() {
                Some(next) => self.publish(SetupState::new(next)),
                None => self.emit(SetupEffect::NavigateNext),
            },
            SetupEvent::OnBack => match step.previous() {
                Some(previous) => self.publish(SetupState::new(previous)),
                None => self.emit(SetupEffect::NavigateBack),
            },
        }
    }

    fn publish(&self, state: SetupState) {
        debug!("Setup step -> {:?}", state.step);
        self.state_tx.send_replace(state);
    }

    fn emit(&self, effect: SetupEffect) {
        if self.effect_tx.send(effect).is_err() {
            // Effect consumer is gone; the effect is dropped, not retried.
            debug!("Effect channel closed, dropping {effect:?}");
        }
    }
}

impl Default for AccountSetupViewModel {
    fn default() -> Self {
        Self::new()
    }
}
