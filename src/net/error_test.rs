use super::*;

#[test]
fn error_detail_unwraps_fastapi_string_detail() {
    assert_eq!(error_detail(r#"{"detail":"Document not found"}"#), "Document not found");
}

#[test]
fn error_detail_renders_structured_detail_as_json() {
    let body = r#"{"detail":[{"loc":["body","text"],"msg":"field required"}]}"#;
    assert!(error_detail(body).contains("field required"));
}

#[test]
fn error_detail_passes_plain_text_through() {
    assert_eq!(error_detail("  Internal Server Error\n"), "Internal Server Error");
}

#[test]
fn status_error_display_includes_code_and_detail() {
    let err = ApiError::Status { status: 500, body: r#"{"detail":"model offline"}"#.to_owned() };
    assert_eq!(err.to_string(), "request failed: 500: model offline");
}

#[test]
fn status_error_display_without_body() {
    let err = ApiError::Status { status: 502, body: String::new() };
    assert_eq!(err.to_string(), "request failed: 502");
}
