//! Wire types shared between the HTTP layer and client state.

use serde::{Deserialize, Serialize};

/// The authenticated teacher identity (principal) for the current session.
///
/// Held in memory only; on reload it is re-derived from the profile endpoint,
/// never persisted alongside the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// One assigned slot in a class's weekly schedule.
///
/// `day` is 0 = Monday through 5 = Saturday; `period` is 0..=6, the seven
/// daily slots. Produced by the backend and immutable once received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAssignment {
    pub day: u8,
    pub period: u8,
    pub subject: String,
}

/// A single class's slice of the timetable as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSchedule {
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub academic_year: Option<String>,
    #[serde(default)]
    pub periods: Vec<ClassAssignment>,
}
