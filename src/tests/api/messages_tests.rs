use super::*;

use reqwest::StatusCode;

#[test]
fn ok_reply_is_success() {
    assert_eq!(decode_reply(StatusCode::OK, br#"{"ok":true}"#, "t"), Ok(()));
}

#[test]
fn ok_false_carries_reason_even_on_error_status() {
    let body = br#"{"ok":false,"error":"channel_not_found"}"#;
    let expected = Err(ApiError::Rejected {
        reason: Some("channel_not_found".to_string()),
    });
    assert_eq!(decode_reply(StatusCode::OK, body, "t"), expected);
    assert_eq!(decode_reply(StatusCode::BAD_REQUEST, body, "t"), expected);
}

#[test]
fn blank_reason_becomes_none() {
    let body = br#"{"ok":false,"error":"  "}"#;
    assert_eq!(
        decode_reply(StatusCode::OK, body, "t"),
        Err(ApiError::Rejected { reason: None })
    );
}

#[test]
fn non_envelope_error_status_is_transport() {
    let err = decode_reply(StatusCode::BAD_GATEWAY, b"upstream down", "t").unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, ApiError::Status { status: 502, .. }));
}

#[test]
fn garbage_success_body_is_decode_error() {
    let err = decode_reply(StatusCode::OK, b"<html>", "t").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn scheduled_listing_accepts_numeric_ids() {
    let body = br#"[{"id":42,"channel_id":"C1","text":"hi","post_at":1700000000}]"#;
    let listing: Vec<ScheduledMessage> = decode_json(StatusCode::OK, body, "t").unwrap();
    assert_eq!(listing[0].id, "42");
    assert_eq!(listing[0].post_at, 1_700_000_000);
}

#[test]
fn listing_error_status_with_envelope_is_rejection() {
    let body = br#"{"ok":false,"error":"not_authed"}"#;
    let err = decode_json::<Vec<ScheduledMessage>>(StatusCode::UNAUTHORIZED, body, "t")
        .unwrap_err();
    assert_eq!(err.reason(), Some("not_authed"));
}
