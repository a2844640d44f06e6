//! End-to-end tests for the account setup wizard flow.
//!
//! These drive the view-model through its public API the way a UI layer
//! would: subscribe to state, take the effect stream, dispatch events.

#![allow(clippy::unwrap_used)]

use tokio::sync::mpsc::error::TryRecvError;

use mailwick_setup::{
    AccountSetupViewModel, OptionsState, OptionsValidator, ServerConfigState,
    ServerConfigValidator, SetupEffect, SetupEvent, SetupState, SetupStep,
};

#[tokio::test]
async fn forward_walk_ends_with_navigate_next() {
    let mut view_model = AccountSetupViewModel::new();
    let mut state = view_model.state();
    let mut effects = view_model.effects().unwrap();

    assert_eq!(state.borrow_and_update().step, SetupStep::AutoConfig);

    let expected = [
        SetupStep::IncomingConfig,
        SetupStep::OutgoingConfig,
        SetupStep::Options,
    ];
    for step in expected {
        view_model.event(SetupEvent::OnNext);
        state.changed().await.unwrap();
        assert_eq!(state.borrow_and_update().step, step);
        assert_eq!(effects.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    // A fourth Next leaves the state alone and emits the boundary effect.
    view_model.event(SetupEvent::OnNext);
    assert_eq!(effects.recv().await.unwrap(), SetupEffect::NavigateNext);
    assert!(!state.has_changed().unwrap());
    assert_eq!(state.borrow().step, SetupStep::Options);
}

#[tokio::test]
async fn backward_walk_ends_with_navigate_back() {
    let mut view_model =
        AccountSetupViewModel::with_initial_state(SetupState::new(SetupStep::Options));
    let mut state = view_model.state();
    let mut effects = view_model.effects().unwrap();

    assert_eq!(state.borrow_and_update().step, SetupStep::Options);

    let expected = [
        SetupStep::OutgoingConfig,
        SetupStep::IncomingConfig,
        SetupStep::AutoConfig,
    ];
    for step in expected {
        view_model.event(SetupEvent::OnBack);
        state.changed().await.unwrap();
        assert_eq!(state.borrow_and_update().step, step);
        assert_eq!(effects.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    view_model.event(SetupEvent::OnBack);
    assert_eq!(effects.recv().await.unwrap(), SetupEffect::NavigateBack);
    assert!(!state.has_changed().unwrap());
    assert_eq!(state.borrow().step, SetupStep::AutoConfig);
}

#[tokio::test]
async fn effects_are_ordered_and_not_replayed() {
    let mut view_model = AccountSetupViewModel::new();
    let mut effects = view_model.effects().unwrap();

    view_model.event(SetupEvent::OnBack);
    view_model.event(SetupEvent::OnBack);

    assert_eq!(effects.recv().await.unwrap(), SetupEffect::NavigateBack);
    assert_eq!(effects.recv().await.unwrap(), SetupEffect::NavigateBack);
    assert_eq!(effects.try_recv().unwrap_err(), TryRecvError::Empty);

    // A subscriber attaching later sees only the current snapshot, and
    // never any past effect.
    let late_state = view_model.state();
    assert_eq!(late_state.borrow().step, SetupStep::AutoConfig);
}

#[test]
fn wizard_and_forms_compose_into_a_full_setup() {
    let mut view_model = AccountSetupViewModel::new();
    let mut incoming = ServerConfigState::new(ServerConfigValidator);
    let mut outgoing = ServerConfigState::new(ServerConfigValidator);
    let mut options = OptionsState::new(OptionsValidator);

    // Auto config found nothing; the user walks the manual screens.
    view_model.event(SetupEvent::OnNext);
    assert_eq!(view_model.current_state().step, SetupStep::IncomingConfig);

    incoming.update_server("imap.example.com".to_string());
    incoming.update_port(Some(993));
    incoming.update_username("jane@example.com".to_string());
    incoming.update_password("hunter2".to_string());
    assert!(incoming.validate());
    view_model.event(SetupEvent::OnNext);

    outgoing.update_server("smtp.example.com".to_string());
    outgoing.update_port(Some(70000));
    outgoing.update_username("jane@example.com".to_string());
    outgoing.update_password("hunter2".to_string());
    assert!(!outgoing.validate());
    outgoing.update_port(Some(465));
    assert!(outgoing.validate());
    view_model.event(SetupEvent::OnNext);

    assert_eq!(view_model.current_state().step, SetupStep::Options);
    options.update_display_name("Jane Doe".to_string());
    assert!(options.validate());
}
