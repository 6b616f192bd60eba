//! Top navigation bar for the teacher portal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::guard::LOGIN_PATH;
use crate::state::session::{self, SessionState};

/// Navigation bar with portal links, the signed-in teacher's name, and a
/// logout button.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let teacher_name = move || {
        session.with(|s| s.teacher().map(|t| t.name.clone()).unwrap_or_default())
    };

    let on_logout = move |_| {
        session::logout(session);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Timetable Portal"</span>
            <a class="navbar__link" href="/">"Dashboard"</a>
            <a class="navbar__link" href="/teacher/timetable">"My Timetable"</a>
            <a class="navbar__link" href="/teacher/profile">"Profile"</a>
            <span class="navbar__spacer"></span>
            <span class="navbar__teacher">{teacher_name}</span>
            <button class="btn navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
