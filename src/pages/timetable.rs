//! Unified weekly timetable view.
//!
//! Every class the teacher is assigned to is merged into one grid; slots
//! claimed by more than one class are highlighted and itemized below it.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::protected::Protected;
use crate::components::schedule_grid::ScheduleGrid;
use crate::net::api;
use crate::net::http::RequestError;
use crate::pages::load_error_message;
use crate::state::schedule::{Conflict, DAY_NAMES, PERIOD_LABELS, aggregate};
use crate::state::session::{self, SessionState};

/// Timetable page behind the route guard.
#[component]
pub fn TimetablePage() -> impl IntoView {
    view! {
        <Protected>
            <Navbar/>
            <TimetableBody/>
        </Protected>
    }
}

/// Fetches the timetable once and renders the merged grid.
#[component]
fn TimetableBody() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let timetable = LocalResource::new(|| api::fetch_teacher_schedule());

    Effect::new(move || {
        if let Some(Err(RequestError::Unauthorized(_))) = timetable.get() {
            session::logout(session);
        }
    });

    view! {
        <div class="teacher-page">
            <header class="page-header">
                <h1>"My Timetable"</h1>
                <p>"All assigned classes merged into one weekly grid"</p>
            </header>

            <Suspense fallback=move || {
                view! { <p class="loading">"Loading timetable..."</p> }
            }>
                {move || {
                    timetable
                        .get()
                        .map(|result| match result {
                            Ok(schedules) => {
                                if schedules.is_empty() {
                                    view! {
                                        <div class="empty-panel">
                                            <h2>"No Timetable Available"</h2>
                                            <p>"You don't have any classes assigned yet."</p>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    let aggregated = aggregate(&schedules);
                                    view! {
                                        <div class="timetable-container">
                                            <div class="timetable-info">
                                                <p>
                                                    {format!(
                                                        "{} classes, {} periods per week",
                                                        schedules.len(),
                                                        aggregated.total_periods,
                                                    )}
                                                </p>
                                            </div>
                                            <ScheduleGrid aggregated=aggregated.clone()/>
                                            <ConflictPanel conflicts=aggregated.conflicts.clone()/>
                                            <div class="legend">
                                                <span class="legend__item legend__item--assigned">
                                                    "Your periods"
                                                </span>
                                                <span class="legend__item legend__item--conflict">
                                                    "Double-booked"
                                                </span>
                                            </div>
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! {
                                    <div class="error-panel">
                                        <p>{load_error_message(&err)}</p>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Itemized list of double-booked slots. Renders nothing when the week is
/// conflict-free.
#[component]
fn ConflictPanel(conflicts: Vec<Conflict>) -> impl IntoView {
    (!conflicts.is_empty()).then(|| {
        view! {
            <div class="conflict-panel">
                <h3>"Double-booked slots"</h3>
                <ul>
                    {conflicts
                        .iter()
                        .map(|conflict| {
                            view! {
                                <li class="conflict-panel__item">
                                    {format!(
                                        "{} {}: {}",
                                        DAY_NAMES[usize::from(conflict.day)],
                                        PERIOD_LABELS[usize::from(conflict.period)],
                                        conflict.class_names.join(", "),
                                    )}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        }
    })
}
