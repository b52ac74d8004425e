use super::*;

#[test]
fn status_message_uses_error_field() {
    assert_eq!(status_message(404, r#"{"error":"Project not found"}"#), "Project not found");
}

#[test]
fn status_message_falls_back_to_message_field() {
    assert_eq!(status_message(500, r#"{"status":"error","message":"disk full"}"#), "disk full");
}

#[test]
fn status_message_uses_short_plain_text() {
    assert_eq!(status_message(500, "Rotation failed\n"), "Rotation failed");
}

#[test]
fn status_message_ignores_html_and_empty_bodies() {
    assert_eq!(status_message(502, "<html>Bad Gateway</html>"), "request failed with status 502");
    assert_eq!(status_message(404, ""), "request failed with status 404");
    assert_eq!(status_message(500, "{}"), "request failed with status 500");
}

#[test]
fn api_error_display_is_the_server_message() {
    let err = ApiError::Status { status: 404, message: "Project not found".to_owned() };
    assert_eq!(err.to_string(), "Project not found");
    assert_eq!(err.status(), Some(404));
}

#[test]
fn non_status_errors_have_no_code() {
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
