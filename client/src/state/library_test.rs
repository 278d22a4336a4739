use super::*;

fn doc(id: &str, size: u64) -> Document {
    Document {
        id: id.to_owned(),
        title: id.to_owned(),
        file_name: format!("{id}.pdf"),
        file_size: size,
        file_type: "application/pdf".to_owned(),
        category: "general".to_owned(),
        description: None,
        tags: Vec::new(),
        uploaded_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
        user_id: "u1".to_owned(),
        file_url: format!("https://files.example.com/{id}.pdf"),
        thumbnail_url: None,
        is_shared: false,
        shared_with: Vec::new(),
        version: 1,
    }
}

#[test]
fn empty_library_shows_zero_state() {
    let summary = LibrarySummary::default();
    assert_eq!(summary.total_documents, 0);
    assert_eq!(summary.storage_label(), "0 MB");
    assert_eq!(summary.documents_caption(), "No documents yet");
    assert_eq!(summary.categories_caption(), "No categories created");
    assert_eq!(summary.actions_today, 0);
}

#[test]
fn from_documents_counts_and_sums() {
    let docs = [doc("a", 3 * MIB), doc("b", MIB / 2)];
    let cats = [Category {
        id: "c1".to_owned(),
        name: "Finance".to_owned(),
        color: "#00aa00".to_owned(),
        document_count: 2,
    }];
    let summary = LibrarySummary::from_documents(&docs, &cats);
    assert_eq!(summary.total_documents, 2);
    assert_eq!(summary.storage_bytes, 3 * MIB + MIB / 2);
    assert_eq!(summary.categories, 1);
    assert_eq!(summary.documents_caption(), "in your library");
}

#[test]
fn storage_label_rounds_up_partial_megabytes() {
    let summary = LibrarySummary { storage_bytes: 1, ..LibrarySummary::default() };
    assert_eq!(summary.storage_label(), "1 MB");
    let summary = LibrarySummary { storage_bytes: 2 * MIB, ..LibrarySummary::default() };
    assert_eq!(summary.storage_label(), "2 MB");
}

#[test]
fn upload_hint_lists_types_and_limit() {
    assert_eq!(upload_hint(), "Supports PDF, DOC, DOCX files up to 10MB");
}

#[test]
fn empty_listing_matches_default_summary() {
    assert_eq!(LibrarySummary::from_documents(&[], &[]), LibrarySummary::default());
}
