//! Library figures shown on the dashboard and upload screens.
//!
//! No documents are loaded yet, so the dashboard summarizes empty slices
//! and shows the zero state.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use crate::net::types::{Category, Document};

const MIB: u64 = 1024 * 1024;

/// File extensions the upload screen advertises.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["PDF", "DOC", "DOCX"];

/// Per-file upload ceiling advertised on the upload screen.
pub const MAX_UPLOAD_BYTES: u64 = 10 * MIB;

/// Counts behind the dashboard stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LibrarySummary {
    pub total_documents: usize,
    pub storage_bytes: u64,
    pub categories: usize,
    pub actions_today: usize,
}

impl LibrarySummary {
    pub fn from_documents(documents: &[Document], categories: &[Category]) -> Self {
        Self {
            total_documents: documents.len(),
            storage_bytes: documents.iter().map(|d| d.file_size).sum(),
            categories: categories.len(),
            actions_today: 0,
        }
    }

    /// Storage in whole megabytes, rounded up so any stored bytes show as
    /// at least `1 MB`.
    pub fn storage_label(&self) -> String {
        format!("{} MB", self.storage_bytes.div_ceil(MIB))
    }

    pub fn documents_caption(&self) -> &'static str {
        if self.total_documents == 0 { "No documents yet" } else { "in your library" }
    }

    pub fn categories_caption(&self) -> &'static str {
        if self.categories == 0 { "No categories created" } else { "in use" }
    }
}

/// Footnote under the upload drop zone.
pub fn upload_hint() -> String {
    format!(
        "Supports {} files up to {}MB",
        ACCEPTED_EXTENSIONS.join(", "),
        MAX_UPLOAD_BYTES / MIB
    )
}
