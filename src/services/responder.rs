use crate::message::{ChatResponse, Citation, DocumentResult, Theme};

/// Build the answer for a chat message.
///
/// No retrieval is wired in yet, so every message gets the same sample
/// answer: one citation into `DOC001`, one theme and one matching snippet.
pub fn generate_reply(message: &str) -> ChatResponse {
    tracing::debug!(message_len = message.len(), "generating sample reply");

    let citation = Citation::new("DOC001", 4, 2);

    ChatResponse {
        response: format!("This is a sample response with a citation {citation}."),
        themes: vec![Theme {
            title: "Sample Theme".to_string(),
            description: "This is a sample theme extracted from the documents.".to_string(),
        }],
        document_results: vec![DocumentResult {
            doc_id: citation.doc_id.clone(),
            snippet: "This is a sample snippet from the document.".to_string(),
            page: citation.page,
            paragraph: citation.paragraph,
        }],
        citations: vec![citation],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_ignores_message() {
        assert_eq!(generate_reply("hello"), generate_reply(""));
    }

    #[test]
    fn response_text_embeds_its_citation() {
        let reply = generate_reply("anything");
        assert_eq!(
            reply.response,
            "This is a sample response with a citation [DOC001 – p.4¶2]."
        );
        assert!(reply.response.contains(&reply.citations[0].to_string()));
    }
}
