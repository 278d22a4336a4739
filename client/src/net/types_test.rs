use super::*;

#[test]
fn user_deserializes_without_display_name() {
    let user: User = serde_json::from_str(r#"{"id":"u1","email":"ada@example.com"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.display_name, None);
}

#[test]
fn user_reads_camel_case_display_name() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","email":"ada@example.com","displayName":"Ada"}"#).unwrap();
    assert_eq!(user.display_name.as_deref(), Some("Ada"));
}

#[test]
fn document_reads_backend_field_names() {
    let raw = serde_json::json!({
        "id": "d1",
        "title": "Quarterly report",
        "fileName": "q3.pdf",
        "fileSize": 2_097_152,
        "fileType": "application/pdf",
        "category": "finance",
        "tags": ["q3", "report"],
        "uploadedAt": "2024-01-02T03:04:05Z",
        "updatedAt": "2024-01-02T03:04:05Z",
        "userId": "u1",
        "fileUrl": "https://files.example.com/q3.pdf",
        "isShared": true,
        "sharedWith": ["u2"],
        "version": 3
    });
    let doc: Document = serde_json::from_value(raw).unwrap();
    assert_eq!(doc.file_name, "q3.pdf");
    assert_eq!(doc.file_size, 2_097_152);
    assert_eq!(doc.description, None);
    assert_eq!(doc.thumbnail_url, None);
    assert!(doc.is_shared);
    assert_eq!(doc.shared_with, vec!["u2".to_owned()]);
    assert_eq!(doc.version, 3);
}

#[test]
fn document_serializes_camel_case_keys() {
    let doc = Document {
        id: "d1".to_owned(),
        title: "Notes".to_owned(),
        file_name: "notes.docx".to_owned(),
        file_size: 10,
        file_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_owned(),
        category: "misc".to_owned(),
        description: Some("draft".to_owned()),
        tags: Vec::new(),
        uploaded_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
        user_id: "u1".to_owned(),
        file_url: "https://files.example.com/notes.docx".to_owned(),
        thumbnail_url: None,
        is_shared: false,
        shared_with: Vec::new(),
        version: 1,
    };
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["fileName"], "notes.docx");
    assert_eq!(value["userId"], "u1");
    assert_eq!(value["isShared"], false);
    assert!(value.get("file_name").is_none());
}

#[test]
fn category_document_count_defaults_to_zero() {
    let cat: Category = serde_json::from_str(r##"{"id":"c1","name":"Legal","color":"#ff0000"}"##).unwrap();
    assert_eq!(cat.document_count, 0);
}

#[test]
fn upload_status_uses_lowercase_tags() {
    assert_eq!(serde_json::to_value(UploadStatus::Uploading).unwrap(), "uploading");
    assert_eq!(serde_json::to_value(UploadStatus::Completed).unwrap(), "completed");
    assert_eq!(serde_json::to_value(UploadStatus::Error).unwrap(), "error");
    assert!(serde_json::from_str::<UploadStatus>(r#""paused""#).is_err());
}

#[test]
fn upload_progress_parses() {
    let p: UploadProgress =
        serde_json::from_str(r#"{"fileName":"a.pdf","progress":42.5,"status":"uploading"}"#).unwrap();
    assert_eq!(p.file_name, "a.pdf");
    assert!((p.progress - 42.5).abs() < f64::EPSILON);
    assert_eq!(p.status, UploadStatus::Uploading);
}
