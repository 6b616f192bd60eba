//! Weekly schedule aggregation across classes.
//!
//! A teacher's timetable arrives as independent per-class period lists.
//! [`aggregate`] merges them into one day-by-period grid and reports every
//! slot that more than one class claims. It is a pure function of its input:
//! no network, no storage, safe to call repeatedly.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::collections::BTreeMap;

use crate::net::types::ClassSchedule;

/// Days in the teaching week, Monday through Saturday.
pub const DAYS: usize = 6;
/// Teaching periods per day.
pub const PERIODS: usize = 7;

/// Display names for day rows.
pub const DAY_NAMES: [&str; DAYS] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
/// Display labels for period columns.
pub const PERIOD_LABELS: [&str; PERIODS] = ["P1", "P2", "P3", "P4", "P5", "P6", "P7"];

/// The occupant of one grid slot.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotEntry {
    pub class_name: String,
    pub subject: String,
    /// True when another class also claimed this slot.
    pub conflict: bool,
}

/// A slot claimed by more than one class. Diagnostic only: neither class is
/// suppressed from the grid or the workload count.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Conflict {
    pub day: u8,
    pub period: u8,
    /// Contributing class names, lexicographically sorted, each listed once
    /// even when a class claims the slot more than once itself.
    pub class_names: Vec<String>,
}

/// 6x7 day-by-period grid, rebuilt from scratch on every aggregation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekGrid {
    cells: Vec<Option<SlotEntry>>,
}

impl Default for WeekGrid {
    fn default() -> Self {
        Self {
            cells: vec![None; DAYS * PERIODS],
        }
    }
}

impl WeekGrid {
    /// The occupant at `(day, period)`, or `None` for a free slot or an
    /// out-of-range coordinate.
    pub fn get(&self, day: usize, period: usize) -> Option<&SlotEntry> {
        if period >= PERIODS {
            return None;
        }
        self.cells.get(day * PERIODS + period).and_then(Option::as_ref)
    }

    fn put(&mut self, day: usize, period: usize, entry: SlotEntry) {
        self.cells[day * PERIODS + period] = Some(entry);
    }

    /// True when no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// Result of merging every class's period list into one weekly view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregatedSchedule {
    pub grid: WeekGrid,
    pub conflicts: Vec<Conflict>,
    /// Raw count of assignments across all classes. Double-booked slots
    /// count once per contributing class: this is teaching load, not
    /// occupied-slot count.
    pub total_periods: usize,
}

/// Merge per-class schedules into a unified weekly grid.
///
/// Contributors are accumulated per slot coordinate, so the result does not
/// depend on the order classes are traversed in. When a slot has several
/// contributors they are sorted lexicographically by class name: the first
/// becomes the displayed occupant (marked `conflict`) and a [`Conflict`]
/// records the full set. The winner rule is a contract, not an accident of
/// iteration order; tests assert a specific winner.
///
/// Input is assumed structurally valid (coordinates inside the 6x7 grid);
/// the fetch adapter enforces that before anything reaches this function.
pub fn aggregate(schedules: &BTreeMap<String, ClassSchedule>) -> AggregatedSchedule {
    let mut contributors: BTreeMap<(u8, u8), Vec<(&str, &str)>> = BTreeMap::new();
    let mut total_periods = 0;

    for (class_name, class_schedule) in schedules {
        total_periods += class_schedule.periods.len();
        for assignment in &class_schedule.periods {
            contributors
                .entry((assignment.day, assignment.period))
                .or_default()
                .push((class_name.as_str(), assignment.subject.as_str()));
        }
    }

    let mut grid = WeekGrid::default();
    let mut conflicts = Vec::new();

    for ((day, period), mut entries) in contributors {
        entries.sort_unstable();
        let (class_name, subject) = entries[0];
        let conflict = entries.len() > 1;

        grid.put(
            usize::from(day),
            usize::from(period),
            SlotEntry {
                class_name: class_name.to_owned(),
                subject: subject.to_owned(),
                conflict,
            },
        );

        if conflict {
            let mut class_names: Vec<String> =
                entries.iter().map(|(name, _)| (*name).to_owned()).collect();
            class_names.dedup();
            conflicts.push(Conflict {
                day,
                period,
                class_names,
            });
        }
    }

    AggregatedSchedule {
        grid,
        conflicts,
        total_periods,
    }
}
