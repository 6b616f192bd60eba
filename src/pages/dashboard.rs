//! Teacher dashboard: schedule overview stats and per-class cards.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::protected::Protected;
use crate::net::api;
use crate::net::http::RequestError;
use crate::net::types::ClassSchedule;
use crate::pages::load_error_message;
use crate::state::schedule::aggregate;
use crate::state::session::{self, SessionState};

/// Dashboard page behind the route guard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Protected>
            <Navbar/>
            <DashboardBody/>
        </Protected>
    }
}

/// Fetches the timetable once and renders the overview.
#[component]
fn DashboardBody() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let timetable = LocalResource::new(|| api::fetch_teacher_schedule());

    // A rejected token means the session is gone; only the session layer
    // tears it down, the page just reports the fetch outcome.
    Effect::new(move || {
        if let Some(Err(RequestError::Unauthorized(_))) = timetable.get() {
            session::logout(session);
        }
    });

    let greeting = move || {
        session.with(|s| match s.teacher() {
            Some(teacher) => format!("Welcome, {}!", teacher.name),
            None => "Welcome!".to_owned(),
        })
    };
    let department = move || {
        session.with(|s| s.teacher().map(|t| t.department.clone()).unwrap_or_default())
    };

    view! {
        <div class="teacher-page">
            <header class="page-header">
                <h1>{greeting}</h1>
                <p>"Here's your teaching schedule overview"</p>
            </header>

            <Suspense fallback=move || {
                view! { <p class="loading">"Loading your timetable..."</p> }
            }>
                {move || {
                    timetable
                        .get()
                        .map(|result| match result {
                            Ok(schedules) => {
                                let aggregated = aggregate(&schedules);
                                view! {
                                    <div class="stats-grid">
                                        <StatCard
                                            label="Classes Assigned"
                                            value=schedules.len().to_string()
                                        />
                                        <StatCard
                                            label="Weekly Periods"
                                            value=aggregated.total_periods.to_string()
                                        />
                                        <StatCard label="Department" value=department()/>
                                    </div>

                                    {(!aggregated.conflicts.is_empty())
                                        .then(|| {
                                            view! {
                                                <div class="conflict-notice">
                                                    <p>
                                                        {format!(
                                                            "{} double-booked slot(s) this week",
                                                            aggregated.conflicts.len(),
                                                        )}
                                                    </p>
                                                </div>
                                            }
                                        })}

                                    <section class="classes-section">
                                        <h2>"Your Classes"</h2>
                                        {if schedules.is_empty() {
                                            view! {
                                                <p class="classes-section__empty">
                                                    "No classes assigned yet"
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="classes-grid">
                                                    {schedules
                                                        .iter()
                                                        .map(|(name, class_schedule)| {
                                                            view! {
                                                                <ClassCard
                                                                    class_name=name.clone()
                                                                    schedule=class_schedule.clone()
                                                                />
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            }
                                                .into_any()
                                        }}
                                    </section>
                                }
                                    .into_any()
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

/// One overview statistic.
#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3 class="stat-card__value">{value}</h3>
            <p class="stat-card__label">{label}</p>
        </div>
    }
}

/// Summary card for one assigned class.
#[component]
fn ClassCard(class_name: String, schedule: ClassSchedule) -> impl IntoView {
    let academic_year = schedule.academic_year.clone().unwrap_or_else(|| "N/A".to_owned());

    view! {
        <div class="class-card">
            <div class="class-card__header">
                <h3>{class_name}</h3>
                <span class="class-card__badge">
                    {format!("{} periods", schedule.periods.len())}
                </span>
            </div>
            <p>
                <strong>"Department: "</strong>
                {schedule.department.clone()}
            </p>
            <p>
                <strong>"Academic Year: "</strong>
                {academic_year}
            </p>
            <a class="class-card__link" href="/teacher/timetable">
                "View Timetable"
            </a>
        </div>
    }
}
