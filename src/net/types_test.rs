use super::*;

// =============================================================
// Document
// =============================================================

#[test]
fn document_parses_backend_record() {
    let raw = serde_json::json!({
        "id": "7b0c",
        "name": "report.pdf",
        "file_path": "/uploads/7b0c_report.pdf",
        "content_type": "application/pdf",
        "size": 2048
    });
    let doc: Document = serde_json::from_value(raw).expect("document should parse");
    assert_eq!(doc.id, "7b0c");
    assert_eq!(doc.name, "report.pdf");
    assert_eq!(doc.file_path.as_deref(), Some("/uploads/7b0c_report.pdf"));
    assert_eq!(doc.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(doc.size, 2048);
    assert_eq!(doc.embedding_status, None);
}

#[test]
fn document_accepts_null_content_type_and_missing_path() {
    let raw = serde_json::json!({
        "id": "a1",
        "name": "notes",
        "content_type": null,
        "size": 0,
        "embedding_status": "pending"
    });
    let doc: Document = serde_json::from_value(raw).expect("document should parse");
    assert_eq!(doc.content_type, None);
    assert_eq!(doc.file_path, None);
    assert_eq!(doc.embedding_status.as_deref(), Some("pending"));
}

#[test]
fn document_list_parses_array() {
    let raw = r#"[{"id":"a","name":"a.txt","content_type":"text/plain","size":1},
                  {"id":"b","name":"b.txt","content_type":"text/plain","size":2}]"#;
    let docs: Vec<Document> = serde_json::from_str(raw).expect("list should parse");
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1].id, "b");
}

#[test]
fn document_without_size_is_rejected() {
    let raw = serde_json::json!({"id": "a", "name": "a.txt"});
    assert!(serde_json::from_value::<Document>(raw).is_err());
}

// =============================================================
// Chat payloads
// =============================================================

#[test]
fn chat_request_serializes_snake_case_ids() {
    let ids = vec!["doc-1".to_owned()];
    let body = ChatRequest { text: "What is this about?", document_ids: &ids };
    let value = serde_json::to_value(&body).expect("request should serialize");
    assert_eq!(value, serde_json::json!({"text": "What is this about?", "document_ids": ["doc-1"]}));
}

#[test]
fn chat_response_parses_response_field() {
    let parsed: ChatResponse =
        serde_json::from_str(r#"{"response":"It's a summary."}"#).expect("response should parse");
    assert_eq!(parsed.response, "It's a summary.");
}
