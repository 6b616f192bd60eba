//! Teacher login page with a username/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, AuthStage, SessionState};

/// Sign-in form for the teacher portal.
///
/// An already-authenticated visitor is sent straight to the dashboard. The
/// submit handler drives `session::login`, which serializes concurrent
/// attempts; the button is disabled while one is in flight.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let pending = move || session.with(|s| s.stage == AuthStage::Authenticating);

    // Redirect once a session is established (covers both a successful
    // login and a teacher who was already signed in).
    Effect::new(move || {
        if session.with(|s| s.teacher().is_some()) {
            navigate("/", NavigateOptions::default());
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            error.set(Some("Username and password required".to_owned()));
            return;
        }

        leptos::task::spawn_local(async move {
            if let Err(err) = session::login(session, &user, &pass).await {
                error.set(Some(err.0));
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Teacher Portal"</h1>
                <p class="login-card__subtitle">"Sign in to view your timetable"</p>

                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="login-card__error">
                                    <p>{message}</p>
                                </div>
                            }
                        })
                }}

                <form class="login-card__form" on:submit=submit>
                    <label class="login-card__label">
                        "Username"
                        <input
                            type="text"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            prop:disabled=pending
                        />
                    </label>
                    <label class="login-card__label">
                        "Password"
                        <input
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            prop:disabled=pending
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" prop:disabled=pending>
                        {move || if pending() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
