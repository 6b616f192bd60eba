//! Teacher profile page showing the current principal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::protected::Protected;
use crate::state::guard::LOGIN_PATH;
use crate::state::session::{self, SessionState};

/// Profile page behind the route guard.
#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Protected>
            <Navbar/>
            <ProfileBody/>
        </Protected>
    }
}

/// Personal-information card for the signed-in teacher, plus account
/// actions. Everything shown comes from the in-memory principal; there is
/// no separate fetch.
#[component]
fn ProfileBody() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let name = move || {
        session.with(|s| s.teacher().map(|t| t.name.clone()).unwrap_or_default())
    };
    let email = move || {
        session.with(|s| s.teacher().map(|t| t.email.clone()).unwrap_or_default())
    };
    let department = move || {
        session.with(|s| s.teacher().map(|t| t.department.clone()).unwrap_or_default())
    };

    let on_logout = move |_| {
        session::logout(session);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="teacher-page">
            <header class="page-header">
                <h1>"My Profile"</h1>
                <p>"Your account information"</p>
            </header>

            <div class="profile-card">
                <h2>"Personal Information"</h2>
                <dl class="profile-card__grid">
                    <dt>"Full Name"</dt>
                    <dd>{name}</dd>
                    <dt>"Email Address"</dt>
                    <dd>{email}</dd>
                    <dt>"Department"</dt>
                    <dd>{department}</dd>
                </dl>
            </div>

            <div class="profile-card">
                <h2>"Account Actions"</h2>
                <button class="btn profile-card__logout" on:click=on_logout>
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}
