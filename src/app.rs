//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, profile::ProfilePage, timetable::TimetablePage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, kicks off session restoration once
/// on the client, and sets up routing. Restoration always resolves to a
/// terminal stage, so protected routes never wait forever.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Restore the persisted session exactly once at startup. Effects do not
    // run during SSR, so this only happens in the browser.
    Effect::new(move || {
        leptos::task::spawn_local(crate::state::session::restore(session));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/timetable-client.css"/>
        <Title text="Timetable Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("teacher"), StaticSegment("login")) view=LoginPage/>
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("timetable"))
                    view=TimetablePage
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("profile"))
                    view=ProfilePage
                />
            </Routes>
        </Router>
    }
}
