use super::*;
use crate::net::types::UploadOutcome;

// =============================================================
// Success mapping
// =============================================================

#[test]
fn success_body_is_carried_as_parsed_json() {
    let outcome = outcome_for(true, 200, r#"{"status":"ok"}"#);
    assert_eq!(
        outcome,
        UploadOutcome::Accepted(serde_json::json!({"status":"ok"}))
    );
}

#[test]
fn success_status_message_embeds_serialized_body() {
    let outcome = outcome_for(true, 200, r#"{"status":"ok"}"#);
    assert!(outcome.status_message().contains(r#"{"status":"ok"}"#));
}

#[test]
fn non_json_success_body_is_kept_as_raw_text() {
    let outcome = outcome_for(true, 200, "plain text");
    assert_eq!(
        outcome,
        UploadOutcome::Accepted(serde_json::Value::String("plain text".to_owned()))
    );
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn error_body_detail_is_extracted() {
    let outcome = outcome_for(false, 400, r#"{"detail":"bad file"}"#);
    assert_eq!(
        outcome,
        UploadOutcome::Rejected {
            detail: "bad file".to_owned()
        }
    );
    assert!(outcome.status_message().contains("bad file"));
}

#[test]
fn error_body_without_detail_falls_back_to_raw_text() {
    let outcome = outcome_for(false, 500, "internal failure");
    assert_eq!(
        outcome,
        UploadOutcome::Rejected {
            detail: "internal failure".to_owned()
        }
    );
}

#[test]
fn error_body_with_non_string_detail_falls_back_to_raw_text() {
    let outcome = outcome_for(false, 422, r#"{"detail":42}"#);
    assert_eq!(
        outcome,
        UploadOutcome::Rejected {
            detail: r#"{"detail":42}"#.to_owned()
        }
    );
}

#[test]
fn empty_error_body_falls_back_to_status_code() {
    let outcome = outcome_for(false, 502, "");
    assert_eq!(
        outcome,
        UploadOutcome::Rejected {
            detail: "HTTP 502".to_owned()
        }
    );
}

// =============================================================
// Transport failures
// =============================================================

#[test]
fn unreachable_message_embeds_failure_description() {
    let outcome = UploadOutcome::Unreachable("connection refused".to_owned());
    assert!(outcome.status_message().contains("connection refused"));
}
