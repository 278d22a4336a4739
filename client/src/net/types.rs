//! Wire types shared with the hosted backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. The document-side types
//! (`Document`, `Category`, `UploadProgress`) are declarations for features
//! the UI does not yet drive; nothing here enforces invariants on them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Provider-assigned user identifier.
    pub id: String,
    /// Email address, shown verbatim in the sidebar user panel.
    pub email: String,
    /// Optional human-readable name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A stored document and its file metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub file_name: String,
    /// File size in bytes.
    pub file_size: u64,
    /// MIME type (e.g. `"application/pdf"`).
    pub file_type: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO-8601 upload timestamp.
    pub uploaded_at: String,
    /// ISO-8601 last-modified timestamp.
    pub updated_at: String,
    /// Owning user identifier.
    pub user_id: String,
    pub file_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub shared_with: Vec<String>,
    pub version: i64,
}

/// A user-defined grouping of documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Display color as a CSS color string.
    pub color: String,
    /// Denormalized count of documents in this category.
    #[serde(default)]
    pub document_count: u64,
}

/// Lifecycle of a single file upload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    #[default]
    Uploading,
    Completed,
    Error,
}

/// Progress of one in-flight upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadProgress {
    pub file_name: String,
    /// Percentage in `0.0..=100.0`.
    pub progress: f64,
    pub status: UploadStatus,
}
