//! Gate component for teacher-only views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::guard::{self, RouteDecision};
use crate::state::session::SessionState;

/// Wraps a protected view in the route-guard decision.
///
/// `Pending` shows a neutral loading affordance (no redirect while a
/// persisted token is still being validated), `Redirect` navigates to the
/// login page, `Render` shows the children.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Navigation is a side effect, so it lives in an effect rather than in
    // the render closure below.
    Effect::new(move || {
        if let RouteDecision::Redirect(target) = guard::decide(&session.get().stage) {
            navigate(target, NavigateOptions::default());
        }
    });

    move || match guard::decide(&session.get().stage) {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Redirect(_) | RouteDecision::Pending => view! {
            <div class="guard-pending">
                <div class="guard-pending__spinner"></div>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
    }
}
