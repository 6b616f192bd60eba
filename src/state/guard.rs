//! Route gating for teacher-only views.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::session::AuthStage;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/teacher/login";

/// What the view layer should do with a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the protected view.
    Render,
    /// Navigate to the given path instead.
    Redirect(&'static str),
    /// Show a neutral loading affordance; authorization is still unsettled.
    Pending,
}

/// Decide how to treat a protected route for the given stage.
///
/// Pure and idempotent; it owns no state beyond what the session exposes.
/// `Unknown` maps to `Pending`, never `Redirect`: redirecting before a
/// persisted token has been validated would flash the login page on every
/// reload.
pub fn decide(stage: &AuthStage) -> RouteDecision {
    match stage {
        AuthStage::Unknown | AuthStage::Authenticating => RouteDecision::Pending,
        AuthStage::Authenticated(_) => RouteDecision::Render,
        AuthStage::Unauthenticated => RouteDecision::Redirect(LOGIN_PATH),
    }
}
