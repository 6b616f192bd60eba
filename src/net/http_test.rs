use super::*;
use serde_json::json;

// =============================================================
// classify_response: success
// =============================================================

#[test]
fn success_envelope_passes_body_through() {
    let body = json!({"status": "success", "teacher": {"id": 1}});
    assert_eq!(classify_response(200, body.clone()), Ok(body));
}

#[test]
fn ok_body_without_envelope_passes_through() {
    let body = json!({"anything": true});
    assert_eq!(classify_response(200, body.clone()), Ok(body));
}

// =============================================================
// classify_response: authorization rejections
// =============================================================

#[test]
fn status_401_is_unauthorized() {
    let err = classify_response(401, json!({})).unwrap_err();
    assert_eq!(err, RequestError::Unauthorized(None));
}

#[test]
fn status_403_is_unauthorized() {
    let err = classify_response(403, json!(null)).unwrap_err();
    assert_eq!(err, RequestError::Unauthorized(None));
}

#[test]
fn rejection_keeps_backend_message() {
    let body = json!({"status": "error", "message": "Invalid username or password"});
    let err = classify_response(401, body).unwrap_err();
    assert_eq!(
        err,
        RequestError::Unauthorized(Some("Invalid username or password".to_owned()))
    );
}

// =============================================================
// classify_response: application errors
// =============================================================

#[test]
fn error_envelope_on_200_is_application_error() {
    let body = json!({"status": "error", "message": "Invalid credentials"});
    let err = classify_response(200, body).unwrap_err();
    assert_eq!(err, RequestError::Application("Invalid credentials".to_owned()));
}

#[test]
fn error_envelope_on_500_keeps_message_verbatim() {
    let body = json!({"status": "error", "message": "database unavailable"});
    let err = classify_response(500, body).unwrap_err();
    assert_eq!(err, RequestError::Application("database unavailable".to_owned()));
}

#[test]
fn error_envelope_without_message_gets_generic_text() {
    let err = classify_response(400, json!({"status": "error"})).unwrap_err();
    assert_eq!(err, RequestError::Application("request failed".to_owned()));
}

// =============================================================
// classify_response: transport failures
// =============================================================

#[test]
fn non_2xx_without_envelope_is_network_error() {
    let err = classify_response(502, json!(null)).unwrap_err();
    assert!(matches!(err, RequestError::Network(_)));
}

#[test]
fn network_error_is_distinct_from_unauthorized() {
    let network = classify_response(500, json!(null)).unwrap_err();
    let unauthorized = classify_response(401, json!(null)).unwrap_err();
    assert_ne!(network, unauthorized);
}
