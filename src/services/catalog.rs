// src/services/catalog.rs
use crate::message::DocumentSummary;

/// Documents the server advertises to the front end.
#[derive(Debug, Clone, Default)]
pub struct DocumentCatalog {
    documents: Vec<DocumentSummary>,
}

impl DocumentCatalog {
    pub fn new(documents: Vec<DocumentSummary>) -> Self {
        Self { documents }
    }

    /// The two sample PDFs listed until ingestion exists.
    pub fn sample() -> Self {
        Self::new(vec![
            summary("DOC001", "Sample Document 1", "2024-03-20", "PDF"),
            summary("DOC002", "Sample Document 2", "2024-03-21", "PDF"),
        ])
    }

    /// Documents in insertion order.
    pub fn list(&self) -> &[DocumentSummary] {
        &self.documents
    }
}

fn summary(id: &str, title: &str, date: &str, kind: &str) -> DocumentSummary {
    DocumentSummary {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        kind: kind.to_string(),
    }
}
