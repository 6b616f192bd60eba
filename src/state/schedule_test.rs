use super::*;
use crate::net::types::ClassAssignment;

fn assignment(day: u8, period: u8, subject: &str) -> ClassAssignment {
    ClassAssignment {
        day,
        period,
        subject: subject.to_owned(),
    }
}

fn class(periods: Vec<ClassAssignment>) -> ClassSchedule {
    ClassSchedule {
        department: "CS".to_owned(),
        academic_year: Some("2025-26".to_owned()),
        periods,
    }
}

fn schedules(entries: Vec<(&str, Vec<ClassAssignment>)>) -> BTreeMap<String, ClassSchedule> {
    entries
        .into_iter()
        .map(|(name, periods)| (name.to_owned(), class(periods)))
        .collect()
}

// =============================================================
// Empty input
// =============================================================

#[test]
fn empty_input_yields_empty_result() {
    let result = aggregate(&BTreeMap::new());
    assert!(result.grid.is_empty());
    assert!(result.conflicts.is_empty());
    assert_eq!(result.total_periods, 0);
}

#[test]
fn class_with_no_periods_contributes_nothing() {
    let input = schedules(vec![("10A", vec![])]);
    let result = aggregate(&input);
    assert!(result.grid.is_empty());
    assert!(result.conflicts.is_empty());
    assert_eq!(result.total_periods, 0);
}

// =============================================================
// Conflict-free aggregation
// =============================================================

#[test]
fn unclaimed_coordinates_stay_empty() {
    let input = schedules(vec![("10A", vec![assignment(2, 3, "Math")])]);
    let result = aggregate(&input);

    for day in 0..DAYS {
        for period in 0..PERIODS {
            if (day, period) == (2, 3) {
                assert!(result.grid.get(day, period).is_some());
            } else {
                assert!(result.grid.get(day, period).is_none());
            }
        }
    }
}

#[test]
fn disjoint_assignments_produce_no_conflicts() {
    let input = schedules(vec![
        ("10A", vec![assignment(0, 0, "Math"), assignment(1, 2, "Math")]),
        ("11B", vec![assignment(0, 1, "Physics")]),
    ]);
    let result = aggregate(&input);

    assert!(result.conflicts.is_empty());
    assert_eq!(result.total_periods, 3);

    let cell = result.grid.get(0, 0).expect("10A slot");
    assert_eq!(cell.class_name, "10A");
    assert_eq!(cell.subject, "Math");
    assert!(!cell.conflict);

    let cell = result.grid.get(0, 1).expect("11B slot");
    assert_eq!(cell.class_name, "11B");
    assert!(!cell.conflict);
}

// =============================================================
// Conflict detection
// =============================================================

#[test]
fn lexicographically_first_class_wins_a_conflict() {
    let input = schedules(vec![
        ("B", vec![assignment(0, 0, "Chemistry")]),
        ("A", vec![assignment(0, 0, "Biology")]),
    ]);
    let result = aggregate(&input);

    let cell = result.grid.get(0, 0).expect("conflicted slot");
    assert_eq!(cell.class_name, "A");
    assert_eq!(cell.subject, "Biology");
    assert!(cell.conflict);

    assert_eq!(result.conflicts.len(), 1);
    assert_eq!(result.conflicts[0].class_names, vec!["A", "B"]);
}

#[test]
fn worked_example_from_two_classes() {
    let input = schedules(vec![
        ("X", vec![assignment(0, 1, "Math")]),
        ("Y", vec![assignment(0, 1, "Phys")]),
    ]);
    let result = aggregate(&input);

    let cell = result.grid.get(0, 1).expect("conflicted slot");
    assert_eq!(cell.class_name, "X");
    assert_eq!(cell.subject, "Math");
    assert!(cell.conflict);

    assert_eq!(
        result.conflicts,
        vec![Conflict {
            day: 0,
            period: 1,
            class_names: vec!["X".to_owned(), "Y".to_owned()],
        }]
    );
    assert_eq!(result.total_periods, 2);
}

#[test]
fn three_way_conflict_lists_every_class() {
    let input = schedules(vec![
        ("10C", vec![assignment(4, 6, "Lab")]),
        ("10A", vec![assignment(4, 6, "Lab")]),
        ("10B", vec![assignment(4, 6, "Lab")]),
    ]);
    let result = aggregate(&input);

    assert_eq!(result.conflicts.len(), 1);
    assert_eq!(result.conflicts[0].class_names, vec!["10A", "10B", "10C"]);
    assert_eq!(result.grid.get(4, 6).expect("slot").class_name, "10A");
}

#[test]
fn class_double_booked_with_itself_is_listed_once() {
    let input = schedules(vec![(
        "X",
        vec![assignment(0, 0, "Math"), assignment(0, 0, "Math")],
    )]);
    let result = aggregate(&input);

    assert!(result.grid.get(0, 0).expect("slot").conflict);
    assert_eq!(result.conflicts.len(), 1);
    assert_eq!(result.conflicts[0].class_names, vec!["X"]);
    assert_eq!(result.total_periods, 2);
}

#[test]
fn double_booked_slots_count_toward_total_periods() {
    let input = schedules(vec![
        ("X", vec![assignment(0, 1, "Math")]),
        ("Y", vec![assignment(0, 1, "Phys")]),
    ]);
    assert_eq!(aggregate(&input).total_periods, 2);
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn aggregation_is_independent_of_insertion_order() {
    let forward = schedules(vec![
        ("A", vec![assignment(0, 0, "Biology")]),
        ("B", vec![assignment(0, 0, "Chemistry")]),
        ("C", vec![assignment(3, 2, "Math")]),
    ]);
    let reverse = schedules(vec![
        ("C", vec![assignment(3, 2, "Math")]),
        ("B", vec![assignment(0, 0, "Chemistry")]),
        ("A", vec![assignment(0, 0, "Biology")]),
    ]);

    assert_eq!(aggregate(&forward), aggregate(&reverse));
}

#[test]
fn repeated_aggregation_is_structurally_identical() {
    let input = schedules(vec![
        ("A", vec![assignment(0, 0, "Biology")]),
        ("B", vec![assignment(0, 0, "Chemistry")]),
    ]);
    assert_eq!(aggregate(&input), aggregate(&input));
}
