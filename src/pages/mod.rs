//! Teacher portal pages.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod timetable;

use crate::net::http::RequestError;

/// User-facing message for a failed schedule load.
///
/// Application messages pass through verbatim; wire-contract violations get
/// a generic message instead of leaking decoder internals.
pub(crate) fn load_error_message(err: &RequestError) -> String {
    match err {
        RequestError::Application(message) => message.clone(),
        RequestError::Network(_) => {
            "Network error. Please check your connection and try again.".to_owned()
        }
        RequestError::Unauthorized(_) => {
            "Your session has expired. Please sign in again.".to_owned()
        }
        RequestError::MalformedData(_) => "Could not load schedule.".to_owned(),
    }
}
