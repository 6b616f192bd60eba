//! Session lifecycle: restoration, login, and logout.
//!
//! STATE MACHINE
//! =============
//! ```text
//! Unknown --restore--> Authenticated | Unauthenticated
//! Unauthenticated --login--> Authenticating --> Authenticated | Unauthenticated
//! any --logout--> Unauthenticated
//! ```
//! `Unknown` is the only valid initial state. It exists so the route guard
//! can hold off on a redirect while a persisted token is still being
//! validated on reload; `restore` always leaves it for a terminal state.
//!
//! Transitions go through [`SessionState`] methods that check an epoch
//! counter: an async driver captures the epoch before suspending, and its
//! result is discarded if another transition landed first. That is what
//! keeps a slow `restore` from overwriting a `logout` that happened while
//! the profile fetch was in flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api::LoginSuccess;
use crate::net::http::RequestError;
use crate::net::types::Teacher;

/// Authorization stage for the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStage {
    /// Initial state: a persisted token may still be under validation.
    #[default]
    Unknown,
    /// A login request is in flight.
    Authenticating,
    /// A principal is established for this session.
    Authenticated(Teacher),
    /// No valid session.
    Unauthenticated,
}

/// Error returned by a failed login, carrying the backend message verbatim
/// when one was supplied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct LoginError(pub String);

/// Session stage plus the transition epoch that serializes async drivers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub stage: AuthStage,
    epoch: u64,
}

impl SessionState {
    /// Current transition epoch. Drivers capture this before suspending.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The principal, present exactly when the stage is `Authenticated`.
    pub fn teacher(&self) -> Option<&Teacher> {
        match &self.stage {
            AuthStage::Authenticated(teacher) => Some(teacher),
            _ => None,
        }
    }

    fn commit(&mut self, at_epoch: u64, next: AuthStage) -> bool {
        if self.epoch != at_epoch {
            return false;
        }
        self.stage = next;
        self.epoch += 1;
        true
    }

    /// Terminal restore transition: `Some` principal authenticates, `None`
    /// (no token, or the token was rejected) leaves the session signed out.
    /// Returns `false` and changes nothing when `at_epoch` is stale.
    pub fn finish_restore(&mut self, at_epoch: u64, outcome: Option<Teacher>) -> bool {
        let next = match outcome {
            Some(teacher) => AuthStage::Authenticated(teacher),
            None => AuthStage::Unauthenticated,
        };
        self.commit(at_epoch, next)
    }

    /// Enter `Authenticating`. Refused while another attempt is in flight,
    /// so concurrent logins cannot race each other's transitions.
    pub fn begin_login(&mut self) -> bool {
        if self.stage == AuthStage::Authenticating {
            return false;
        }
        self.stage = AuthStage::Authenticating;
        self.epoch += 1;
        true
    }

    /// Commit a successful login. Stale epochs are discarded.
    pub fn finish_login_success(&mut self, at_epoch: u64, teacher: Teacher) -> bool {
        self.commit(at_epoch, AuthStage::Authenticated(teacher))
    }

    /// Commit a failed login. Stale epochs are discarded.
    pub fn finish_login_failure(&mut self, at_epoch: u64) -> bool {
        self.commit(at_epoch, AuthStage::Unauthenticated)
    }

    /// Unconditional sign-out. Never fails, regardless of current stage.
    pub fn sign_out(&mut self) {
        self.stage = AuthStage::Unauthenticated;
        self.epoch += 1;
    }
}

/// Message shown for a failed login: the backend-supplied text when present,
/// a generic fallback otherwise.
pub fn login_error_message(err: &RequestError) -> String {
    match err {
        RequestError::Application(message) | RequestError::Unauthorized(Some(message)) => {
            message.clone()
        }
        _ => "authentication failed".to_owned(),
    }
}

/// Whether a failed restore should erase the stored token: only when the
/// rejection actually committed (a stale result has no claim on the store,
/// which a concurrent login may have refilled) and the failure was not a
/// transient network one, since that token may still be honored next reload.
fn should_discard_token(committed: bool, err: &RequestError) -> bool {
    committed && !matches!(err, RequestError::Network(_))
}

/// Restore the session from a persisted token at process start.
///
/// No token: straight to `Unauthenticated`. Otherwise the profile endpoint
/// decides; a rejected token is cleared from the store, while a transient
/// network failure keeps the token for the next reload. Either way this
/// resolves to a terminal stage — startup never dead-ends in `Unknown`.
///
/// The credential store follows the same epoch discipline as the stage: a
/// restore that lost the race commits nothing and touches no token.
pub async fn restore(session: RwSignal<SessionState>) {
    let at_epoch = session.get_untracked().epoch();

    if crate::util::credentials::get().is_none() {
        session.update(|s| {
            s.finish_restore(at_epoch, None);
        });
        return;
    }

    match crate::net::api::fetch_profile().await {
        Ok(teacher) => {
            session.update(|s| {
                s.finish_restore(at_epoch, Some(teacher));
            });
        }
        Err(err) => {
            leptos::logging::warn!("session restore failed: {err}");
            let mut committed = false;
            session.update(|s| committed = s.finish_restore(at_epoch, None));
            if should_discard_token(committed, &err) {
                crate::util::credentials::clear();
            }
        }
    }
}

/// Log in with the given credentials.
///
/// Debounced: a call while another login is in flight fails immediately
/// without touching the first attempt's transition.
pub async fn login(
    session: RwSignal<SessionState>,
    username: &str,
    password: &str,
) -> Result<(), LoginError> {
    let mut accepted = false;
    session.update(|s| accepted = s.begin_login());
    if !accepted {
        return Err(LoginError("a login attempt is already in progress".to_owned()));
    }
    let at_epoch = session.get_untracked().epoch();

    match crate::net::api::login(username, password).await {
        Ok(success) => {
            // The token is only persisted when the transition commits; a
            // stale success (logout landed first) must not refill the store.
            let LoginSuccess { access_token, teacher } = success;
            let mut committed = false;
            session.update(|s| committed = s.finish_login_success(at_epoch, teacher));
            if committed {
                crate::util::credentials::set(&access_token);
            }
            Ok(())
        }
        Err(err) => {
            let message = login_error_message(&err);
            session.update(|s| {
                s.finish_login_failure(at_epoch);
            });
            Err(LoginError(message))
        }
    }
}

/// Sign out: clear the stored token and drop to `Unauthenticated`.
/// Synchronous and unconditional.
pub fn logout(session: RwSignal<SessionState>) {
    crate::util::credentials::clear();
    session.update(SessionState::sign_out);
}
