use super::*;

fn teacher() -> Teacher {
    Teacher {
        id: 7,
        name: "Ada".to_owned(),
        email: "ada@school.edu".to_owned(),
        department: "CS".to_owned(),
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn session_starts_unknown() {
    let state = SessionState::default();
    assert_eq!(state.stage, AuthStage::Unknown);
    assert!(state.teacher().is_none());
}

// =============================================================
// Restore transitions
// =============================================================

#[test]
fn restore_without_token_terminates_unauthenticated() {
    let mut state = SessionState::default();
    let at_epoch = state.epoch();
    assert!(state.finish_restore(at_epoch, None));
    assert_eq!(state.stage, AuthStage::Unauthenticated);
}

#[test]
fn restore_with_valid_token_authenticates() {
    let mut state = SessionState::default();
    let at_epoch = state.epoch();
    assert!(state.finish_restore(at_epoch, Some(teacher())));
    assert_eq!(state.teacher().map(|t| t.name.as_str()), Some("Ada"));
}

#[test]
fn restore_never_leaves_state_unknown() {
    for outcome in [None, Some(teacher())] {
        let mut state = SessionState::default();
        let at_epoch = state.epoch();
        state.finish_restore(at_epoch, outcome);
        assert_ne!(state.stage, AuthStage::Unknown);
    }
}

#[test]
fn stale_restore_cannot_overwrite_logout() {
    let mut state = SessionState::default();
    let at_epoch = state.epoch();

    // Logout lands while the restore's profile fetch is still in flight.
    state.sign_out();

    assert!(!state.finish_restore(at_epoch, Some(teacher())));
    assert_eq!(state.stage, AuthStage::Unauthenticated);
}

#[test]
fn restore_after_logout_terminates_unauthenticated() {
    let mut state = SessionState::default();
    state.sign_out();

    // Credential store is empty now, so a fresh restore resolves directly.
    let at_epoch = state.epoch();
    assert!(state.finish_restore(at_epoch, None));
    assert_eq!(state.stage, AuthStage::Unauthenticated);
}

// =============================================================
// Login transitions
// =============================================================

#[test]
fn login_passes_through_authenticating() {
    let mut state = SessionState::default();
    assert!(state.begin_login());
    assert_eq!(state.stage, AuthStage::Authenticating);

    let at_epoch = state.epoch();
    assert!(state.finish_login_success(at_epoch, teacher()));
    assert_eq!(state.teacher().map(|t| t.id), Some(7));
}

#[test]
fn concurrent_login_is_debounced() {
    let mut state = SessionState::default();
    assert!(state.begin_login());
    assert!(!state.begin_login());
    assert_eq!(state.stage, AuthStage::Authenticating);
}

#[test]
fn failed_login_resolves_unauthenticated() {
    let mut state = SessionState::default();
    state.begin_login();
    let at_epoch = state.epoch();
    assert!(state.finish_login_failure(at_epoch));
    assert_eq!(state.stage, AuthStage::Unauthenticated);
    assert!(state.teacher().is_none());
}

#[test]
fn stale_restore_rejection_has_no_claim_on_the_store() {
    let mut state = SessionState::default();
    let at_epoch = state.epoch();

    // A fresh login lands while the stale token's profile fetch is still
    // out; the late rejection must neither change the stage nor earn the
    // right to wipe the token the login just persisted.
    state.begin_login();
    state.finish_login_success(state.epoch(), teacher());

    let committed = state.finish_restore(at_epoch, None);
    assert!(!committed);
    assert_eq!(state.teacher().map(|t| t.id), Some(7));
    assert!(!should_discard_token(
        committed,
        &RequestError::Unauthorized(None)
    ));
}

#[test]
fn discard_token_only_after_a_committed_rejection() {
    let unauthorized = RequestError::Unauthorized(None);
    let network = RequestError::Network("connection refused".to_owned());

    assert!(should_discard_token(true, &unauthorized));
    assert!(!should_discard_token(true, &network));
    assert!(!should_discard_token(false, &unauthorized));
    assert!(!should_discard_token(false, &network));
}

#[test]
fn stale_login_result_is_discarded() {
    let mut state = SessionState::default();
    state.begin_login();
    let at_epoch = state.epoch();

    // Logout lands before the login response; the stale success commits
    // nothing, and the driver keys the token write on that same result,
    // so a logged-out store is never silently refilled.
    state.sign_out();

    assert!(!state.finish_login_success(at_epoch, teacher()));
    assert_eq!(state.stage, AuthStage::Unauthenticated);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn sign_out_is_unconditional() {
    let mut authenticated = SessionState::default();
    let at_epoch = authenticated.epoch();
    authenticated.finish_restore(at_epoch, Some(teacher()));
    authenticated.sign_out();
    assert_eq!(authenticated.stage, AuthStage::Unauthenticated);

    let mut unknown = SessionState::default();
    unknown.sign_out();
    assert_eq!(unknown.stage, AuthStage::Unauthenticated);
}

// =============================================================
// Login error messages
// =============================================================

#[test]
fn login_error_uses_backend_message_verbatim() {
    let err = RequestError::Application("Invalid credentials".to_owned());
    assert_eq!(login_error_message(&err), "Invalid credentials");

    let err = RequestError::Unauthorized(Some("Invalid username or password".to_owned()));
    assert_eq!(login_error_message(&err), "Invalid username or password");
}

#[test]
fn login_error_falls_back_to_generic_message() {
    let err = RequestError::Network("connection refused".to_owned());
    assert_eq!(login_error_message(&err), "authentication failed");

    let err = RequestError::Unauthorized(None);
    assert_eq!(login_error_message(&err), "authentication failed");
}
