use super::*;
use studio::error::{ApiError, ValidationError};

#[test]
fn from_error_uses_operation_fallback() {
    let err = ClientError::Api(ApiError::Rejected { status: 500, detail: None });
    let notice = Notice::from_error(&err, Operation::CreateProject, "http://localhost:8000");
    assert_eq!(notice, Notice::error("Failed to create project"));
}

#[test]
fn from_error_renders_session_expiry() {
    let err = ClientError::Api(ApiError::Unauthorized);
    let notice = Notice::from_error(&err, Operation::GenerateDesign, "http://localhost:8000");
    assert_eq!(notice.text, "Session expired. Please login again.");
}

#[test]
fn validation_notice_is_its_message() {
    let err = ClientError::Validation(ValidationError::EmptyBrief);
    assert_eq!(Notice::from_error(&err, Operation::GenerateDesign, "").text, "Please enter a design brief");
}

#[test]
fn class_follows_kind() {
    assert_eq!(Notice::error("x").class(), "notice notice--error");
    assert_eq!(Notice::success("x").class(), "notice notice--success");
}

#[test]
fn class_is_independent_of_text() {
    let notice = Notice::success("Sketch saved successfully!");
    let class = notice.class();
    let text = notice.text;
    assert_eq!(class, "notice notice--success");
    assert_eq!(text, "Sketch saved successfully!");
}
