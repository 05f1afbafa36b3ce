// src/message.rs
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub citations: Vec<Citation>,
    pub themes: Vec<Theme>,
    pub document_results: Vec<DocumentResult>,
}

/// Pointer to a paragraph of a source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub doc_id: String,
    pub page: u32,
    pub paragraph: u32,
}

impl Citation {
    pub fn new(doc_id: impl Into<String>, page: u32, paragraph: u32) -> Self {
        Self {
            doc_id: doc_id.into(),
            page,
            paragraph,
        }
    }
}

/// Inline marker embedded in response text, e.g. `[DOC001 – p.4¶2]`.
/// The front end matches on this exact form to link citations.
impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} \u{2013} p.{}\u{b6}{}]", self.doc_id, self.page, self.paragraph)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResult {
    pub doc_id: String,
    pub snippet: String,
    pub page: u32,
    pub paragraph: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    /// YYYY-MM-DD
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
}
