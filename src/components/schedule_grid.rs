//! Presentational weekly grid over an aggregated schedule.

use leptos::prelude::*;

use crate::state::schedule::{AggregatedSchedule, DAY_NAMES, PERIOD_LABELS, PERIODS};

/// Render the unified day-by-period grid with conflict highlighting.
///
/// Conflicted slots show the canonical occupant and are tagged so the
/// stylesheet can flag them; the full contributor list lives in the
/// conflict panel next to the grid.
#[component]
pub fn ScheduleGrid(aggregated: AggregatedSchedule) -> impl IntoView {
    view! {
        <div class="timetable-grid">
            <div class="timetable-cell timetable-cell--header">"Day/Period"</div>
            {PERIOD_LABELS
                .iter()
                .map(|label| {
                    view! { <div class="timetable-cell timetable-cell--header">{*label}</div> }
                })
                .collect::<Vec<_>>()}

            {DAY_NAMES
                .iter()
                .enumerate()
                .map(|(day, name)| {
                    view! {
                        <div class="timetable-cell timetable-cell--day">{*name}</div>
                        {(0..PERIODS)
                            .map(|period| match aggregated.grid.get(day, period) {
                                Some(entry) => {
                                    let cell_class = if entry.conflict {
                                        "timetable-cell timetable-cell--conflict"
                                    } else {
                                        "timetable-cell timetable-cell--assigned"
                                    };
                                    view! {
                                        <div class=cell_class>
                                            <span class="timetable-cell__class">
                                                {entry.class_name.clone()}
                                            </span>
                                            <span class="timetable-cell__subject">
                                                {entry.subject.clone()}
                                            </span>
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <div class="timetable-cell timetable-cell--free"></div>
                                    }
                                        .into_any()
                                }
                            })
                            .collect::<Vec<_>>()}
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
