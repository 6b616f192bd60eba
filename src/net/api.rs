//! Typed endpoint wrappers for the teacher portal backend.
//!
//! Each wrapper issues the request through [`http::request_json`] and hands
//! the envelope to a pure decode helper. Decoding is where the wire contract
//! is enforced: the timetable payload is structurally validated here, so the
//! aggregator downstream can assume well-formed coordinates.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use serde_json::Value;

use super::http::{self, DEFAULT_TIMEOUT_MS, Method, RequestError};
use super::types::{ClassSchedule, Teacher};
use crate::state::schedule::{DAYS, PERIODS};

const LOGIN_ENDPOINT: &str = "/api/teacher/login";
const PROFILE_ENDPOINT: &str = "/api/teacher/profile";
const TIMETABLE_ENDPOINT: &str = "/api/teacher/timetable";

/// Successful login payload: the bearer token plus the principal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSuccess {
    pub access_token: String,
    pub teacher: Teacher,
}

/// Authenticate against `POST /api/teacher/login`.
///
/// Does not touch the credential store; the session layer stores the token
/// after it commits the state transition.
pub async fn login(username: &str, password: &str) -> Result<LoginSuccess, RequestError> {
    let body = serde_json::json!({ "username": username, "password": password });
    let value =
        http::request_json(Method::Post, LOGIN_ENDPOINT, Some(&body), DEFAULT_TIMEOUT_MS).await?;
    decode_login(&value)
}

/// Fetch the current principal from `GET /api/teacher/profile`.
pub async fn fetch_profile() -> Result<Teacher, RequestError> {
    let value = http::request_json(Method::Get, PROFILE_ENDPOINT, None, DEFAULT_TIMEOUT_MS).await?;
    decode_teacher(&value)
}

/// Fetch the raw per-class schedule mapping from `GET /api/teacher/timetable`.
pub async fn fetch_teacher_schedule() -> Result<BTreeMap<String, ClassSchedule>, RequestError> {
    let value =
        http::request_json(Method::Get, TIMETABLE_ENDPOINT, None, DEFAULT_TIMEOUT_MS).await?;
    decode_schedule(&value)
}

fn decode_login(value: &Value) -> Result<LoginSuccess, RequestError> {
    let access_token = value
        .get("access_token")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            RequestError::MalformedData("login response missing access_token".to_owned())
        })?
        .to_owned();
    let teacher = decode_teacher(value)?;
    Ok(LoginSuccess { access_token, teacher })
}

fn decode_teacher(value: &Value) -> Result<Teacher, RequestError> {
    let teacher = value
        .get("teacher")
        .ok_or_else(|| RequestError::MalformedData("response missing teacher".to_owned()))?;
    serde_json::from_value(teacher.clone())
        .map_err(|e| RequestError::MalformedData(format!("bad teacher payload: {e}")))
}

/// Decode and structurally validate the timetable payload.
///
/// Any assignment with a day or period outside the 6x7 grid rejects the
/// whole payload as [`RequestError::MalformedData`], distinct from transport
/// errors. Unknown per-class fields from the backend are ignored. The result
/// is an ordered map so downstream iteration is deterministic.
fn decode_schedule(value: &Value) -> Result<BTreeMap<String, ClassSchedule>, RequestError> {
    let schedule = value
        .get("schedule")
        .ok_or_else(|| RequestError::MalformedData("response missing schedule".to_owned()))?;
    let schedules: BTreeMap<String, ClassSchedule> = serde_json::from_value(schedule.clone())
        .map_err(|e| RequestError::MalformedData(format!("bad schedule payload: {e}")))?;

    for (class_name, class_schedule) in &schedules {
        for assignment in &class_schedule.periods {
            if usize::from(assignment.day) >= DAYS || usize::from(assignment.period) >= PERIODS {
                return Err(RequestError::MalformedData(format!(
                    "out-of-range slot ({}, {}) in class {class_name}",
                    assignment.day, assignment.period
                )));
            }
        }
    }
    Ok(schedules)
}
