//! Query submissions and the request variants they resolve to.

use super::attachment::DocumentAttachment;
use super::jurisdiction::Jurisdiction;
use super::language::Language;
use crate::error::{LawbotError, Result};
use serde::Serialize;

/// Shown when the user submits neither a question nor a document.
pub const EMPTY_SUBMISSION_MESSAGE: &str = "Please describe your issue or upload a document.";

pub const QUERY_PATH: &str = "/api/query";
pub const UPLOAD_AND_ANALYZE_PATH: &str = "/api/upload_and_analyze";

/// The case facts a user submits for guidance.
#[derive(Debug, Clone, Default)]
pub struct QuerySubmission {
    pub question: String,
    pub language: Language,
    pub jurisdiction: Jurisdiction,
    pub attachment: Option<DocumentAttachment>,
    pub audio_response: bool,
}

impl QuerySubmission {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_jurisdiction(mut self, jurisdiction: Jurisdiction) -> Self {
        self.jurisdiction = jurisdiction;
        self
    }

    pub fn with_attachment(mut self, attachment: DocumentAttachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn with_audio_response(mut self, audio_response: bool) -> Self {
        self.audio_response = audio_response;
        self
    }

    /// Whether the submission carries anything worth sending.
    pub fn is_submittable(&self) -> bool {
        !self.question.trim().is_empty() || self.attachment.is_some()
    }

    /// Validates the submission and picks the request variant.
    ///
    /// An attached document always selects the upload path, even when a
    /// question is present too.
    pub fn into_request(self) -> Result<QueryRequest> {
        if !self.is_submittable() {
            return Err(LawbotError::validation(EMPTY_SUBMISSION_MESSAGE));
        }

        let location = self.jurisdiction.location_hint().to_string();
        let question = self.question.trim().to_string();

        Ok(match self.attachment {
            Some(document) => QueryRequest::Document(DocumentQuery {
                document,
                question,
                language: self.language,
                location,
                audio_response: self.audio_response,
            }),
            None => QueryRequest::Text(TextQuery {
                question,
                language: self.language,
                location,
                audio_response: self.audio_response,
            }),
        })
    }
}

/// JSON body of `POST /api/query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextQuery {
    pub question: String,
    pub language: Language,
    pub location: String,
    pub audio_response: bool,
}

/// Multipart body of `POST /api/upload_and_analyze`.
#[derive(Debug, Clone)]
pub struct DocumentQuery {
    pub document: DocumentAttachment,
    pub question: String,
    pub language: Language,
    pub location: String,
    pub audio_response: bool,
}

impl DocumentQuery {
    /// Text parts of the multipart form, in wire order after the file part.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("question", self.question.clone()),
            ("language", self.language.to_string()),
            ("location", self.location.clone()),
            ("audio_response", self.audio_response.to_string()),
        ]
    }
}

/// A validated query, one variant per backend endpoint.
#[derive(Debug, Clone)]
pub enum QueryRequest {
    Text(TextQuery),
    Document(DocumentQuery),
}

impl QueryRequest {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Text(_) => QUERY_PATH,
            Self::Document(_) => UPLOAD_AND_ANALYZE_PATH,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            Self::Text(q) => &q.location,
            Self::Document(q) => &q.location,
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Self::Text(q) => q.language,
            Self::Document(q) => q.language,
        }
    }
}
